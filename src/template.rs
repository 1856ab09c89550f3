//! HTML page assembly for the web UI
//!
//! Each function builds one complete page as a `String`. The stylesheets are
//! kept as constants so the `format!` templates stay free of brace escaping.

use crate::model::{ShortUrl, Stats};

const HOME_STYLE: &str = r#"
        body { font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }
        h1 { color: #333; }
        .form-container { background: #f5f5f5; padding: 30px; border-radius: 8px; margin: 20px 0; }
        input[type="url"] { width: 70%; padding: 10px; font-size: 16px; border: 1px solid #ddd; border-radius: 4px; }
        button { padding: 10px 20px; font-size: 16px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background: #0056b3; }
        .links { margin-top: 20px; }
        .links a { color: #007bff; text-decoration: none; margin-right: 20px; }
        .links a:hover { text-decoration: underline; }
        .curl-examples { background: #e9ecef; padding: 15px; border-radius: 4px; margin-top: 20px; }
        .curl-examples h3 { margin-top: 0; }
        code { background: #f8f9fa; padding: 2px 4px; border-radius: 3px; font-family: monospace; }
"#;

const SUCCESS_STYLE: &str = r#"
        body { font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }
        h1 { color: #28a745; }
        .success { background: #d4edda; color: #155724; padding: 20px; border-radius: 8px; border: 1px solid #c3e6cb; }
        .url-details { background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0; }
        .short-link { font-size: 20px; font-weight: bold; color: #007bff; }
        .test-button { background: #007bff; color: white; padding: 10px 20px; text-decoration: none; border-radius: 4px; display: inline-block; margin-top: 10px; }
        .test-button:hover { background: #0056b3; text-decoration: none; }
        a { color: #007bff; text-decoration: none; }
        a:hover { text-decoration: underline; }
"#;

const ERROR_STYLE: &str = r#"
        body { font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }
        .error { background: #f8d7da; color: #721c24; padding: 15px; border-radius: 4px; border: 1px solid #f5c6cb; }
        a { color: #007bff; text-decoration: none; }
        a:hover { text-decoration: underline; }
"#;

const ANALYTICS_STYLE: &str = r#"
        body { font-family: Arial, sans-serif; max-width: 1000px; margin: 50px auto; padding: 20px; }
        h1 { color: #333; }
        .summary { background: #e9ecef; padding: 20px; border-radius: 8px; margin-bottom: 30px; display: flex; justify-content: space-around; }
        .stat { text-align: center; }
        .stat-number { font-size: 36px; font-weight: bold; color: #007bff; }
        .stat-label { color: #6c757d; margin-top: 5px; }
        table { width: 100%; border-collapse: collapse; background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        th, td { padding: 15px; text-align: left; border-bottom: 1px solid #dee2e6; }
        th { background: #f8f9fa; font-weight: bold; color: #495057; }
        .short-code { font-family: monospace; background: #f8f9fa; padding: 4px 8px; border-radius: 4px; }
        .original-url { max-width: 300px; word-break: break-all; }
        .click-count { font-weight: bold; color: #28a745; }
        .date { color: #6c757d; }
        a { color: #007bff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        .empty-state { background: #f8f9fa; padding: 30px; border-radius: 8px; text-align: center; color: #6c757d; }
        .actions { margin-top: 20px; }
        .refresh-button { background: #17a2b8; color: white; padding: 8px 16px; text-decoration: none; border-radius: 4px; }
        .refresh-button:hover { background: #138496; text-decoration: none; }
"#;

/// Home page: shorten form plus navigation links
pub fn home_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>URL Shortener</title>
    <style>{style}</style>
</head>
<body>
    <h1>URL Shortener</h1>
    <div class="form-container">
        <form method="POST" action="/create">
            <p>Enter a URL to shorten:</p>
            <input type="url" name="url" placeholder="https://example.com" required>
            <button type="submit">Shorten URL</button>
        </form>
    </div>

    <div class="links">
        <a href="/analytics">View Analytics</a>
        <a href="/create">Create URL (Form)</a>
    </div>
</body>
</html>"#,
        style = HOME_STYLE
    )
}

/// Standalone create page: the same form plus curl examples for API users
pub fn create_page(base_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Create Short URL</title>
    <style>{style}</style>
</head>
<body>
    <h1>Create Short URL</h1>
    <div class="form-container">
        <form method="POST" action="/create">
            <p>Enter a URL to shorten:</p>
            <input type="url" name="url" placeholder="https://example.com" required>
            <button type="submit">Shorten URL</button>
        </form>
    </div>

    <div class="curl-examples">
        <h3>Or use curl commands:</h3>
        <p><code>curl -X POST -d 'url=https://google.com' {base_url}/create</code></p>
        <p><code>curl -X POST -d 'url=https://github.com' {base_url}/create</code></p>
        <p><code>curl -X POST -d 'url=https://stackoverflow.com' {base_url}/create</code></p>
    </div>

    <p><a href="/">&larr; Back to Home</a></p>
</body>
</html>"#,
        style = HOME_STYLE,
        base_url = base_url
    )
}

/// Confirmation page shown after a URL was shortened through the form
pub fn success_page(base_url: &str, record: &ShortUrl) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Short URL Created</title>
    <style>{style}</style>
</head>
<body>
    <h1>Short URL Created Successfully!</h1>

    <div class="success">
        <p>Your URL has been shortened successfully!</p>
    </div>

    <div class="url-details">
        <p><strong>Original URL:</strong> <a href="{original}" target="_blank">{original}</a></p>
        <p><strong>Short Code:</strong> {code}</p>
        <p><strong>Created At:</strong> {created}</p>
        <p><strong>Short URL:</strong> <span class="short-link">{base_url}/{code}</span></p>
        <a href="/{code}" class="test-button">Test the Short Link</a>
    </div>

    <p><a href="/">&larr; Create Another URL</a> | <a href="/analytics">View Analytics</a></p>
</body>
</html>"#,
        style = SUCCESS_STYLE,
        original = record.original_url,
        code = record.short_code,
        created = record.created_at.format("%Y-%m-%d %H:%M:%S"),
        base_url = base_url
    )
}

/// Generic error page with a human-readable message
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Error</title>
    <style>{style}</style>
</head>
<body>
    <h1>Error</h1>
    <div class="error">
        <p>{message}</p>
    </div>
    <p><a href="/create">Try again</a></p>
</body>
</html>"#,
        style = ERROR_STYLE,
        message = message
    )
}

/// Analytics dashboard: stats summary plus a table of all records
///
/// `urls` is rendered in the order given; the handler sorts by id so the
/// table is stable across refreshes.
pub fn analytics_page(stats: &Stats, urls: &[ShortUrl]) -> String {
    if urls.is_empty() {
        return empty_analytics_page();
    }

    let mut table_rows = String::new();
    for url in urls {
        table_rows.push_str(&format!(
            r#"
            <tr>
                <td><span class="short-code">{code}</span></td>
                <td class="original-url"><a href="{original}" target="_blank">{original}</a></td>
                <td class="date">{created}</td>
                <td class="click-count">{clicks}</td>
                <td><a href="/{code}" target="_blank">Test Link</a></td>
            </tr>"#,
            code = url.short_code,
            original = url.original_url,
            created = url.created_at.format("%Y-%m-%d %H:%M"),
            clicks = url.clicks
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Analytics - URL Shortener</title>
    <style>{style}</style>
</head>
<body>
    <h1>Analytics Dashboard</h1>

    <div class="summary">
        <div class="stat">
            <div class="stat-number">{total_urls}</div>
            <div class="stat-label">Total URLs</div>
        </div>
        <div class="stat">
            <div class="stat-number">{total_clicks}</div>
            <div class="stat-label">Total Clicks</div>
        </div>
        <div class="stat">
            <div class="stat-number">{average:.1}</div>
            <div class="stat-label">Avg Clicks/URL</div>
        </div>
    </div>

    <table>
        <thead>
            <tr>
                <th>Short Code</th>
                <th>Original URL</th>
                <th>Created</th>
                <th>Clicks</th>
                <th>Actions</th>
            </tr>
        </thead>
        <tbody>{rows}</tbody>
    </table>

    <div class="actions">
        <a href="/" class="refresh-button">Create New URL</a>
        <a href="/analytics" class="refresh-button">Refresh Analytics</a>
    </div>

    <p><a href="/">&larr; Back to Home</a></p>
</body>
</html>"#,
        style = ANALYTICS_STYLE,
        total_urls = stats.total_urls,
        total_clicks = stats.total_clicks,
        average = stats.average_clicks,
        rows = table_rows
    )
}

fn empty_analytics_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Analytics - URL Shortener</title>
    <style>{style}</style>
</head>
<body>
    <h1>Analytics Dashboard</h1>
    <div class="empty-state">
        <h2>No URLs created yet!</h2>
        <p>Create your first shortened URL to see analytics here.</p>
        <a href="/" class="create-button">Create Your First URL</a>
    </div>
    <p><a href="/">&larr; Back to Home</a></p>
</body>
</html>"#,
        style = ANALYTICS_STYLE
    )
}
