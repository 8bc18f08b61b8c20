//! Backend test support utilities
//!
//! Shared by the backend's unit and integration test binaries. Currently this
//! is the unified tracing initialisation so every test binary filters logs the
//! same way.

pub mod logging;
