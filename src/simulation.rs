// 🎬 Simulation - Run a fleet through the barrier
//
// Checks every vehicle in, then checks out the requested plates, and
// collects what happened into a serialisable report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parking::{CheckInStatus, Parking, ProfitSummary};
use crate::vehicle::Vehicle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub plate: String,
    pub status: CheckInStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRecord {
    pub plate: String,
    /// None when the plate was not parked
    pub fee: Option<u32>,
    pub parked_time: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Run identity (UUID)
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub capacity: usize,
    pub check_ins: Vec<CheckInRecord>,
    pub check_outs: Vec<CheckOutRecord>,
    pub profits: ProfitSummary,
    /// Sorted for stable output
    pub parked_plates: Vec<String>,
}

impl SimulationReport {
    pub fn count_status(&self, status: CheckInStatus) -> usize {
        self.check_ins.iter().filter(|r| r.status == status).count()
    }
}

/// Check in the whole fleet, then check out `departures` in order
pub fn run(parking: &mut Parking, fleet: Vec<Vehicle>, departures: &[String]) -> SimulationReport {
    let started_at = Utc::now();

    let check_ins = fleet
        .into_iter()
        .map(|vehicle| {
            let plate = vehicle.plate.clone();
            let status = parking.check_in(vehicle);
            CheckInRecord { plate, status }
        })
        .collect();

    let check_outs = departures
        .iter()
        .map(|plate| {
            let parked_time = parking.get(plate).map(|v| v.parked_time);
            CheckOutRecord {
                plate: plate.clone(),
                fee: parking.check_out(plate).ok(),
                parked_time,
            }
        })
        .collect();

    let mut parked_plates = parking.parked_plates();
    parked_plates.sort();

    SimulationReport {
        id: uuid::Uuid::new_v4().to_string(),
        started_at,
        capacity: parking.capacity(),
        check_ins,
        check_outs,
        profits: parking.profits(),
        parked_plates,
    }
}

/// Check in the whole fleet, then check out everything that got in
pub fn run_full_cycle(parking: &mut Parking, fleet: Vec<Vehicle>) -> SimulationReport {
    let mut departures: Vec<String> = Vec::new();
    let mut arrivals = Vec::with_capacity(fleet.len());

    for vehicle in fleet {
        if !departures.contains(&vehicle.plate) {
            departures.push(vehicle.plate.clone());
        }
        arrivals.push(vehicle);
    }

    let mut report = run(parking, arrivals, &departures);
    // Plates that never got in are not departures
    report.check_outs.retain(|r| r.fee.is_some());
    report
}
