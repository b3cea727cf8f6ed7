//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: Builders and pointer gesture shorthands
//! - unit: Single-component tests against the public API
//! - integration: Event-stream and file workflows end-to-end

mod helpers;
mod integration;
mod unit;
