//! Unit tests for Layerboard.

mod handles_tests;
mod snapshot_tests;
mod viewport_tests;
