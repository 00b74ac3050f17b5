//! Shared helpers for the Hearts engine's unit and integration tests.

pub mod test_logging;
