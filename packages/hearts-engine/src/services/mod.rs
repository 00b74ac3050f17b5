//! In-process services layered over the pure domain.

pub mod round_registry;

pub use round_registry::{RoundKey, RoundRegistry};
