pub mod batch;
pub mod chart;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod parsers;
pub mod reporting;
pub mod run_name;
pub mod units;

// Test helpers module - made public for use in unit tests and integration tests
// This is conditionally compiled to avoid including test code in release builds
#[doc(hidden)]
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
