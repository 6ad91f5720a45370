//! Shared test utilities for the integration tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Routes `tracing` events to the test output. Set `RUST_LOG=trace` to see
/// every reallocation.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sorted sample with a run of duplicates in the middle.
pub const DUPLICATES: [i32; 5] = [1, 2, 2, 2, 3];

/// Sorted sample without duplicates.
pub const ODDS: [i32; 5] = [1, 3, 5, 7, 9];
