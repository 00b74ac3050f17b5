//! Error handling for the Hearts rules engine.

pub mod domain;

pub use domain::{DomainError, InvalidPlayKind, NotReadyKind, ValidationKind};
