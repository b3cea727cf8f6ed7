//! Integration tests for Layerboard.
//!
//! These drive the editor through raw input events and file I/O, checking
//! the model, viewport and interaction state that result.

mod layer_workflow_tests;
