//! Configuration for the café floor.
//!
//! Responsibilities:
//! - Define the TOML-backed model ([`CafeConfig`]).
//! - Load a config file from disk (`loader.rs`).
//! - Check the startup invariants (non-empty roster, valid menu, positive
//!   tick interval, sane decay step).

pub mod loader;

pub use loader::{default_config_path, load_and_validate, load_from_path};

use crate::catalog::MenuCatalog;
use crate::error::CafeError;
use crate::model::MenuItem;
use crate::roster::StaffRoster;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level config file.
///
/// Every field is optional in TOML; missing fields take the defaults below.
///
/// ```toml
/// waiters = ["Amit", "Riya"]
/// tick_interval_ms = 30000
/// decay_step_minutes = 0.5
///
/// [[menu]]
/// id = 1
/// name = "Espresso"
/// prep_time = 4
/// category = "Coffee"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CafeConfig {
    /// Roster in tie-break order.
    pub waiters: Vec<String>,
    pub tick_interval_ms: u64,
    /// Minutes removed from every waiter's load per tick.
    pub decay_step_minutes: f64,
    /// Capacity of the floor actor's request queue.
    pub channel_capacity: usize,
    /// Replaces the built-in menu when present.
    pub menu: Option<Vec<MenuItem>>,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            waiters: ["Amit", "Riya", "Karan", "Priya", "Sam"]
                .into_iter()
                .map(String::from)
                .collect(),
            tick_interval_ms: 30_000,
            decay_step_minutes: 0.5,
            channel_capacity: 32,
            menu: None,
        }
    }
}

impl CafeConfig {
    /// Parses a TOML document. Performs no validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Checks every startup invariant, returning the first violation.
    pub fn validate(&self) -> Result<(), CafeError> {
        if self.tick_interval_ms == 0 {
            return Err(CafeError::InvalidTickInterval(self.tick_interval_ms));
        }
        if !self.decay_step_minutes.is_finite() || self.decay_step_minutes < 0.0 {
            return Err(CafeError::InvalidDecayStep(self.decay_step_minutes));
        }
        if self.channel_capacity == 0 {
            return Err(CafeError::InvalidChannelCapacity(self.channel_capacity));
        }
        self.roster()?;
        self.catalog()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn roster(&self) -> Result<StaffRoster, CafeError> {
        StaffRoster::new(self.waiters.iter().cloned())
    }

    /// The configured menu, or the built-in one.
    pub fn catalog(&self) -> Result<MenuCatalog, CafeError> {
        match &self.menu {
            Some(items) => MenuCatalog::new(items.clone()),
            None => Ok(MenuCatalog::default()),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config file at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing TOML config from {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] CafeError),
}
