// 🚗 Vehicle - The thing that parks
//
// "The plate is the IDENTITY, everything else is a VALUE"
//
// Two vehicles with the same plate are the same vehicle, even if their
// type, card or ticket differ.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// ============================================================================
// VEHICLE TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Motorcycle,
    MiniBus,
    Bus,
}

impl VehicleType {
    /// Base rate charged for the first two hours
    pub fn rate(&self) -> u32 {
        match self {
            VehicleType::Car => 20,
            VehicleType::Motorcycle => 15,
            VehicleType::MiniBus => 25,
            VehicleType::Bus => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::MiniBus => "MiniBus",
            VehicleType::Bus => "Bus",
        }
    }

    pub fn all() -> [VehicleType; 4] {
        [
            VehicleType::Car,
            VehicleType::Motorcycle,
            VehicleType::MiniBus,
            VehicleType::Bus,
        ]
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = anyhow::Error;

    /// Case-insensitive, accepts "minibus" and "mini-bus"
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        VehicleType::all()
            .into_iter()
            .find(|t| t.as_str().to_lowercase() == normalized)
            .ok_or_else(|| anyhow!("Unknown vehicle type: {}", s))
    }
}

// ============================================================================
// VEHICLE
// ============================================================================

/// Minutes a vehicle is assumed to stay when nobody says otherwise
pub const DEFAULT_PARKED_TIME: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Identity - the registry key
    pub plate: String,

    pub vehicle_type: VehicleType,

    /// Informational only, never used for pricing
    pub check_in_time: DateTime<Utc>,

    /// Only presence matters, the card number is never checked
    pub discount_card: Option<String>,

    /// Minutes parked, supplied by the caller
    pub parked_time: u32,

    /// Ticket handed out at the barrier (UUID)
    pub ticket: String,
}

impl Vehicle {
    /// Create a vehicle arriving now with the default parked time
    pub fn new(plate: impl Into<String>, vehicle_type: VehicleType, discount_card: Option<String>) -> Self {
        Vehicle {
            plate: plate.into(),
            vehicle_type,
            check_in_time: Utc::now(),
            discount_card,
            parked_time: DEFAULT_PARKED_TIME,
            ticket: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Builder-style override of the parked time
    pub fn with_parked_time(mut self, minutes: u32) -> Self {
        self.parked_time = minutes;
        self
    }

    pub fn has_discount_card(&self) -> bool {
        self.discount_card.is_some()
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}

// ============================================================================
// TESTS
// ============================================================================
