//! Tests for the in-memory URL registry
//!
//! These exercise the registry directly, without the HTTP layer:
//! - Code generation and uniqueness
//! - Lookup and click counting semantics
//! - Statistics aggregation
//! - Behavior under concurrent access

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use linklet::registry::{RegistryError, UrlRegistry, SHORT_CODE_PREFIX};

#[test]
fn create_assigns_sequential_ids_and_codes() {
    let registry = UrlRegistry::new();

    let first = registry.create("https://example.com/one");
    let second = registry.create("https://example.com/two");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.short_code, format!("{}1", SHORT_CODE_PREFIX));
    assert_eq!(second.short_code, format!("{}2", SHORT_CODE_PREFIX));
    assert_eq!(first.clicks, 0);
    assert_eq!(second.clicks, 0);
}

#[test]
fn every_created_code_is_unique() {
    let registry = UrlRegistry::new();

    let mut codes = HashSet::new();
    for i in 0..100 {
        let record = registry.create(&format!("https://example.com/{}", i));
        assert!(codes.insert(record.short_code), "duplicate code at {}", i);
    }

    assert_eq!(registry.get_all().len(), 100);
}

#[test]
fn same_url_twice_gets_two_records() {
    let registry = UrlRegistry::new();

    let first = registry.create("https://a.com");
    let second = registry.create("https://a.com");

    // Intentionally no deduplication
    assert_ne!(first.id, second.id);
    assert_ne!(first.short_code, second.short_code);
    assert_eq!(registry.get_all().len(), 2);
}

#[test]
fn get_returns_the_created_record() {
    let registry = UrlRegistry::new();

    let created = registry.create("https://example.com/lookup");
    let fetched = registry.get(&created.short_code).unwrap();

    assert_eq!(fetched, created);
}

#[test]
fn get_unknown_code_is_not_found() {
    let registry = UrlRegistry::new();

    // Empty registry
    assert_eq!(
        registry.get("doesnotexist"),
        Err(RegistryError::NotFound("doesnotexist".to_string()))
    );

    // Populated registry, still unknown code
    registry.create("https://example.com");
    assert!(matches!(
        registry.get("doesnotexist"),
        Err(RegistryError::NotFound(_))
    ));
}

#[test]
fn get_does_not_count_as_a_click() {
    let registry = UrlRegistry::new();
    let record = registry.create("https://example.com");

    for _ in 0..5 {
        registry.get(&record.short_code).unwrap();
    }

    assert_eq!(registry.get(&record.short_code).unwrap().clicks, 0);
}

#[test]
fn increment_clicks_counts_up() {
    let registry = UrlRegistry::new();
    let record = registry.create("https://example.com");

    for _ in 0..3 {
        registry.increment_clicks(&record.short_code).unwrap();
    }

    assert_eq!(registry.get(&record.short_code).unwrap().clicks, 3);
}

#[test]
fn increment_clicks_unknown_code_changes_nothing() {
    let registry = UrlRegistry::new();
    let record = registry.create("https://example.com");
    registry.increment_clicks(&record.short_code).unwrap();

    let result = registry.increment_clicks("missing");
    assert_eq!(result, Err(RegistryError::NotFound("missing".to_string())));

    // The existing record's counter is untouched
    assert_eq!(registry.get(&record.short_code).unwrap().clicks, 1);

    let stats = registry.stats();
    assert_eq!(stats.total_clicks, 1);
}

#[test]
fn get_all_is_a_snapshot() {
    let registry = UrlRegistry::new();
    let record = registry.create("https://example.com");

    let snapshot = registry.get_all();
    registry.increment_clicks(&record.short_code).unwrap();

    // The snapshot taken before the click still shows zero
    assert_eq!(snapshot[0].clicks, 0);
    assert_eq!(registry.get(&record.short_code).unwrap().clicks, 1);
}

#[test]
fn stats_on_empty_registry_are_zero() {
    let registry = UrlRegistry::new();

    let stats = registry.stats();
    assert_eq!(stats.total_urls, 0);
    assert_eq!(stats.total_clicks, 0);
    assert_eq!(stats.average_clicks, 0.0);
}

#[test]
fn stats_aggregate_clicks_across_records() {
    let registry = UrlRegistry::new();

    let first = registry.create("https://example.com/one");
    let second = registry.create("https://example.com/two");

    for _ in 0..4 {
        registry.increment_clicks(&first.short_code).unwrap();
    }
    for _ in 0..2 {
        registry.increment_clicks(&second.short_code).unwrap();
    }

    let stats = registry.stats();
    assert_eq!(stats.total_urls, 2);
    assert_eq!(stats.total_clicks, 6);
    assert_eq!(stats.average_clicks, 3.0);
}

#[test]
fn concurrent_increments_lose_no_updates() {
    let registry = Arc::new(UrlRegistry::new());
    let record = registry.create("https://example.com/hot");

    let threads: u64 = 8;
    let increments_per_thread: u64 = 250;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let code = record.short_code.clone();
            thread::spawn(move || {
                for _ in 0..increments_per_thread {
                    registry.increment_clicks(&code).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every single increment must have landed
    let final_clicks = registry.get(&record.short_code).unwrap().clicks;
    assert_eq!(final_clicks, threads * increments_per_thread);
}

#[test]
fn concurrent_creates_never_collide() {
    let registry = Arc::new(UrlRegistry::new());

    let threads: u64 = 8;
    let creates_per_thread: u64 = 100;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..creates_per_thread)
                    .map(|i| {
                        registry
                            .create(&format!("https://example.com/{}-{}", t, i))
                            .short_code
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        for code in handle.join().unwrap() {
            assert!(codes.insert(code), "two creates produced the same code");
        }
    }

    assert_eq!(codes.len(), (threads * creates_per_thread) as usize);
    assert_eq!(registry.get_all().len(), (threads * creates_per_thread) as usize);
}
