//! Rule variants for a round.
//!
//! Hosts either construct [`RulesConfig`] directly, deserialize it from their
//! own settings, or read it from the environment with [`RulesConfig::from_env`].

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Optional house rules. Defaults follow standard Hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Playing the queen of spades breaks hearts.
    pub queen_breaks_hearts: bool,
    /// Hearts and the queen of spades may not be discarded on the first
    /// trick unless the hand holds nothing else.
    pub no_points_on_first_trick: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            queen_breaks_hearts: true,
            no_points_on_first_trick: true,
        }
    }
}

impl RulesConfig {
    /// Read rule overrides from the environment.
    ///
    /// - `HEARTS_QUEEN_BREAKS_HEARTS`
    /// - `HEARTS_NO_POINTS_ON_FIRST_TRICK`
    ///
    /// Unset variables keep their defaults; unparsable values are rejected.
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        Ok(Self {
            queen_breaks_hearts: bool_var(
                "HEARTS_QUEEN_BREAKS_HEARTS",
                defaults.queen_breaks_hearts,
            )?,
            no_points_on_first_trick: bool_var(
                "HEARTS_NO_POINTS_ON_FIRST_TRICK",
                defaults.no_points_on_first_trick,
            )?,
        })
    }
}

fn bool_var(name: &str, default: bool) -> Result<bool, DomainError> {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("{name} must be true/false/1/0, got '{raw}'"),
            )
        }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
