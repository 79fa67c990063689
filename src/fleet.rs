// 🚌 Fleet - Vehicles waiting at the barrier
//
// The sample fleet from the Alkeparking demo, plus loading a fleet from JSON.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::vehicle::{Vehicle, VehicleType};

/// One vehicle as written in a fleet file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetEntry {
    pub plate: String,
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub discount_card: Option<String>,
    #[serde(default)]
    pub parked_time: Option<u32>,
}

impl FleetEntry {
    pub fn into_vehicle(self, default_parked_time: u32) -> Vehicle {
        Vehicle::new(self.plate, self.vehicle_type, self.discount_card)
            .with_parked_time(self.parked_time.unwrap_or(default_parked_time))
    }
}

/// The 23 demo vehicles, in arrival order.
///
/// B222CCC arrives twice, so there are 22 distinct plates.
pub fn sample_fleet(parked_time: u32) -> Vec<Vehicle> {
    use VehicleType::*;

    let entries: [(&str, VehicleType, Option<&str>); 23] = [
        ("AA111AA", Car, Some("DISCOUNT_CARD_001")),
        ("B222BBB", Motorcycle, None),
        ("CC333CC", MiniBus, None),
        ("DD444DD", Bus, Some("DISCOUNT_CARD_002")),
        ("AA111BB", Car, Some("DISCOUNT_CARD_003")),
        ("B222CCC", Motorcycle, Some("DISCOUNT_CARD_004")),
        ("B222CCC", Motorcycle, Some("DISCOUNT_CARD_004")),
        ("CC333DD", MiniBus, None),
        ("DD444EE", Bus, Some("DISCOUNT_CARD_005")),
        ("AA111CC", Car, None),
        ("B222DDD", Motorcycle, None),
        ("CC333EE", MiniBus, None),
        ("DD444GG", Bus, Some("DISCOUNT_CARD_006")),
        ("AA111DD", Car, Some("DISCOUNT_CARD_007")),
        ("B222EEE", Motorcycle, None),
        ("CC333FF", MiniBus, None),
        ("AA111DA", Car, Some("DISCOUNT_CARD_008")),
        ("AA111DS", Car, None),
        ("AA111DF", Car, Some("DISCOUNT_CARD_009")),
        ("AA111DR", Car, None),
        ("AA111DY", Car, None),
        ("AA11SDY", Car, None),
        ("AA11SJDY", Car, None),
    ];

    entries
        .into_iter()
        .map(|(plate, vehicle_type, card)| {
            Vehicle::new(plate, vehicle_type, card.map(str::to_string)).with_parked_time(parked_time)
        })
        .collect()
}

/// Load a fleet from a JSON array of entries
pub fn load_fleet<P: AsRef<Path>>(path: P, default_parked_time: u32) -> Result<Vec<Vehicle>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read fleet file: {:?}", path.as_ref()))?;

    let entries: Vec<FleetEntry> =
        serde_json::from_str(&content).context("Failed to parse fleet JSON")?;

    Ok(entries
        .into_iter()
        .map(|entry| entry.into_vehicle(default_parked_time))
        .collect())
}
