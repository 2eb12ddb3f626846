//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. All tests run on the host with no real clock
//! or notification channel.

mod auth_gate_tests;
mod lighting_tests;
mod mock_sink;
mod suppression_tests;
