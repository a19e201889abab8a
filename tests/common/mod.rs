//! Common test utilities for bandramp.
//!
//! This module provides shared fixtures and assertions for the integration tests.

pub mod assertions;
pub mod fixtures;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| bandramp::init_tracing("debug"));

/// Install the test subscriber once per test binary
pub fn init() {
    Lazy::force(&TRACING);
}
