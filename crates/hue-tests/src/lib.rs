//! Integration tests for hue-rs crates.
//!
//! End-to-end checks of the grading engines through their public entry
//! points, the session orchestrator, and file round trips.
