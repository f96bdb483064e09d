//! # Storage Configuration
//!
//! Capacities and feature flags for the per-event buffers. The surrounding
//! driver decides where the values come from (the core defines no CLI or
//! config-file surface); this module only validates them.

use serde::Deserialize;

use crate::error::{PecError, Result};

/// Configuration for the per-event tuple store
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of leptons stored per event
    pub max_leptons: usize,

    /// Maximum number of generator-level particles stored per event
    pub max_gen_particles: usize,

    /// Maximum number of generator-level jets stored per event
    pub max_gen_jets: usize,

    /// Whether generator-level particles are read and stored at all
    /// (disabled when running on real data)
    pub store_gen_particles: bool,

    /// Whether generator-level jets are read and stored
    pub store_gen_jets: bool,

    /// Whether running means of event weights are accumulated
    pub compute_mean_weights: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_leptons: 64,
            max_gen_particles: 64,
            max_gen_jets: 128,
            store_gen_particles: true,
            store_gen_jets: true,
            compute_mean_weights: true,
        }
    }
}

impl StoreConfig {
    /// Validate the configuration
    ///
    /// Capacities must be positive for every collection that is enabled, and
    /// mother indices must stay encodable in one byte, which bounds the
    /// generator-particle capacity at 255.
    pub fn validate(&self) -> Result<()> {
        if self.max_leptons == 0 {
            return Err(PecError::config("max_leptons must be positive"));
        }

        if self.store_gen_particles {
            if self.max_gen_particles == 0 {
                return Err(PecError::config(
                    "max_gen_particles must be positive when store_gen_particles is set",
                ));
            }
            if self.max_gen_particles > 255 {
                return Err(PecError::config(
                    "max_gen_particles cannot exceed 255: mother indices are stored in one byte",
                ));
            }
        }

        if self.store_gen_jets && self.max_gen_jets == 0 {
            return Err(PecError::config(
                "max_gen_jets must be positive when store_gen_jets is set",
            ));
        }

        Ok(())
    }
}
