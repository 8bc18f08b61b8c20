//! Helpers shared by unit and integration tests.
//!
//! Built only for `cfg(test)` or with the `test-support` feature, which the
//! crate's own dev-dependency turns on for the `tests/` binaries.

pub mod recording_outbox;
pub mod state_builder;

pub use recording_outbox::RecordingOutbox;
pub use state_builder::TestStateBuilder;
