//! Integration test utilities for formbind
//!
//! Shared sample models and a tracing capture layer used across the
//! integration test binaries.

pub mod log_capture;
