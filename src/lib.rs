//! Library exports for the URL shortener application
//!
//! This module exposes internal components for testing and potential library usage.

pub mod handler;
pub mod model;
pub mod registry;
pub mod route;
pub mod template;
