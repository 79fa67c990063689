// ⚙️ Parking Configuration
//
// Size of the lot and the parked time assumed for vehicles that don't say.
// Pricing is fixed and not configurable.

use anyhow::{bail, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::parking::Parking;
use crate::vehicle::DEFAULT_PARKED_TIME;

/// Spaces in the original Alkeparking lot
pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkingConfig {
    /// Maximum number of parked vehicles
    pub capacity: usize,

    /// Minutes used when a fleet entry has no parked_time
    pub default_parked_time: u32,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        ParkingConfig {
            capacity: DEFAULT_CAPACITY,
            default_parked_time: DEFAULT_PARKED_TIME,
        }
    }
}

impl ParkingConfig {
    /// Load config from a JSON file, missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: ParkingConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            bail!("Parking capacity must be at least 1");
        }
        Ok(())
    }

    /// Empty parking lot sized by this config
    pub fn build_parking(&self) -> Parking {
        Parking::new(self.capacity)
    }
}
