//! Crate-level test module for scenario and determinism tests.
//!
//! Unit tests live next to the code they cover; this module holds the tests
//! that exercise the whole engine:
//!
//! - `integration.rs`: full matches driven through commands and ticks
//! - `determinism.rs`: replay determinism and invariant property tests
//! - `helpers.rs`: shared setup utilities

mod helpers;
