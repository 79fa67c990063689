// 🅿️ Parking Registry - Capacity-bounded check-in / check-out
//
// Holds the vehicles currently parked (keyed by plate) and the running
// totals of everything that has already checked out.
//
// Invariants:
// - parked count never exceeds capacity
// - no two parked vehicles share a plate
// - profits only grow, and only on a successful check-out

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

use crate::error::ParkingError;
use crate::fee::calculate_fee;
use crate::vehicle::Vehicle;

// ============================================================================
// CHECK-IN STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInStatus {
    Success,
    ParkingFull,
    AlreadyRegistered,
}

impl CheckInStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckInStatus::Success)
    }

    /// Message shown at the barrier
    pub fn message(&self) -> &'static str {
        match self {
            CheckInStatus::Success => "Welcome to Alkeparking",
            CheckInStatus::ParkingFull => "Sorry, the check-in failed: parking full",
            CheckInStatus::AlreadyRegistered => {
                "Sorry, the check-in failed: vehicle already registered"
            }
        }
    }
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// PROFIT SUMMARY
// ============================================================================

/// Totals of checked-out vehicles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub vehicles: u32,
    pub profits: u64,
}

impl fmt::Display for ProfitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vehicles have checked out and have earnings of ${}",
            self.vehicles, self.profits
        )
    }
}

// ============================================================================
// PARKING
// ============================================================================

#[derive(Debug, Clone)]
pub struct Parking {
    /// Parked vehicles by plate
    vehicles: HashMap<String, Vehicle>,
    capacity: usize,
    profits: ProfitSummary,
}

impl Parking {
    /// Empty parking lot with room for `capacity` vehicles
    pub fn new(capacity: usize) -> Self {
        Parking {
            vehicles: HashMap::with_capacity(capacity),
            capacity,
            profits: ProfitSummary::default(),
        }
    }

    /// Park a vehicle.
    ///
    /// Capacity is checked before the plate, so a full lot reports
    /// `ParkingFull` even for a plate that is already inside.
    pub fn check_in(&mut self, vehicle: Vehicle) -> CheckInStatus {
        if self.is_full() {
            info!(plate = %vehicle.plate, capacity = self.capacity, "check-in rejected: parking full");
            return CheckInStatus::ParkingFull;
        }

        if self.vehicles.contains_key(&vehicle.plate) {
            info!(plate = %vehicle.plate, "check-in rejected: already registered");
            return CheckInStatus::AlreadyRegistered;
        }

        debug!(
            plate = %vehicle.plate,
            vehicle_type = %vehicle.vehicle_type,
            ticket = %vehicle.ticket,
            "vehicle checked in"
        );
        self.vehicles.insert(vehicle.plate.clone(), vehicle);
        CheckInStatus::Success
    }

    /// Remove a parked vehicle and collect its fee
    pub fn check_out(&mut self, plate: &str) -> Result<u32, ParkingError> {
        let vehicle = self.vehicles.remove(plate).ok_or_else(|| {
            info!(plate, "check-out rejected: plate not found");
            ParkingError::PlateNotFound(plate.to_string())
        })?;

        let fee = Self::fee_for(&vehicle);
        self.profits.vehicles += 1;
        self.profits.profits += u64::from(fee);

        debug!(
            plate,
            fee,
            parked_time = vehicle.parked_time,
            "vehicle checked out"
        );
        Ok(fee)
    }

    /// Fee a parked vehicle would pay if it left now (nothing changes)
    pub fn quote(&self, plate: &str) -> Result<u32, ParkingError> {
        self.vehicles
            .get(plate)
            .map(Self::fee_for)
            .ok_or_else(|| ParkingError::PlateNotFound(plate.to_string()))
    }

    fn fee_for(vehicle: &Vehicle) -> u32 {
        calculate_fee(
            vehicle.vehicle_type,
            vehicle.parked_time,
            vehicle.has_discount_card(),
        )
    }

    /// Totals of everything checked out so far
    pub fn profits(&self) -> ProfitSummary {
        self.profits
    }

    /// Plates currently parked (no particular order)
    pub fn parked_plates(&self) -> Vec<String> {
        self.vehicles.keys().cloned().collect()
    }

    pub fn get(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    pub fn is_parked(&self, plate: &str) -> bool {
        self.vehicles.contains_key(plate)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn parked_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn available_spaces(&self) -> usize {
        self.capacity.saturating_sub(self.vehicles.len())
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.capacity
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleType;

    fn car(plate: &str) -> Vehicle {
        Vehicle::new(plate, VehicleType::Car, None)
    }

    #[test]
    fn test_new_parking_is_empty() {
        let parking = Parking::new(20);

        assert_eq!(parking.capacity(), 20);
        assert_eq!(parking.parked_count(), 0);
        assert_eq!(parking.available_spaces(), 20);
        assert!(!parking.is_full());
        assert!(parking.parked_plates().is_empty());
        assert_eq!(parking.profits(), ProfitSummary::default());
    }

    #[test]
    fn test_check_in_success() {
        let mut parking = Parking::new(2);

        assert_eq!(parking.check_in(car("AA111AA")), CheckInStatus::Success);
        assert!(parking.is_parked("AA111AA"));
        assert_eq!(parking.parked_count(), 1);
        assert_eq!(parking.available_spaces(), 1);
        assert_eq!(parking.get("AA111AA").unwrap().vehicle_type, VehicleType::Car);
    }

    #[test]
    fn test_check_in_duplicate_plate() {
        let mut parking = Parking::new(5);

        assert_eq!(parking.check_in(car("B222CCC")), CheckInStatus::Success);

        // Same plate, different values: still the same vehicle
        let again = Vehicle::new("B222CCC", VehicleType::Motorcycle, Some("CARD".to_string()));
        assert_eq!(parking.check_in(again), CheckInStatus::AlreadyRegistered);

        assert_eq!(parking.parked_count(), 1);
        // The original entry is kept
        assert_eq!(parking.get("B222CCC").unwrap().vehicle_type, VehicleType::Car);
    }

    #[test]
    fn test_check_in_full_is_checked_before_duplicate() {
        let mut parking = Parking::new(1);

        assert_eq!(parking.check_in(car("AA111AA")), CheckInStatus::Success);
        assert!(parking.is_full());

        assert_eq!(parking.check_in(car("AA111AA")), CheckInStatus::ParkingFull);
        assert_eq!(parking.check_in(car("ZZ999ZZ")), CheckInStatus::ParkingFull);
        assert_eq!(parking.parked_count(), 1);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut parking = Parking::new(0);
        assert_eq!(parking.check_in(car("AA111AA")), CheckInStatus::ParkingFull);
        assert_eq!(parking.parked_count(), 0);
    }

    #[test]
    fn test_check_in_succeeds_iff_room_and_new_plate() {
        let mut parking = Parking::new(3);
        let plates = ["P1", "P2", "P1", "P3", "P4", "P2"];

        for plate in plates {
            let had_room = parking.parked_count() < parking.capacity();
            let was_parked = parking.is_parked(plate);

            let status = parking.check_in(car(plate));
            assert_eq!(status.is_success(), had_room && !was_parked, "plate {}", plate);
            assert!(parking.parked_count() <= parking.capacity());
        }
    }

    #[test]
    fn test_check_out_collects_fee() {
        let mut parking = Parking::new(20);
        parking.check_in(Vehicle::new("AA111AA", VehicleType::Car, Some("CARD".to_string())));
        parking.check_in(Vehicle::new("DD444DD", VehicleType::Bus, None).with_parked_time(121));

        assert_eq!(parking.check_out("AA111AA"), Ok(17));
        assert_eq!(parking.profits(), ProfitSummary { vehicles: 1, profits: 17 });

        assert_eq!(parking.check_out("DD444DD"), Ok(35));
        assert_eq!(parking.profits(), ProfitSummary { vehicles: 2, profits: 52 });

        assert_eq!(parking.parked_count(), 0);
    }

    #[test]
    fn test_check_out_removes_plate() {
        let mut parking = Parking::new(20);
        for plate in ["A", "B", "C"] {
            parking.check_in(car(plate));
        }

        let before = parking.profits().vehicles;
        parking.check_out("B").unwrap();

        assert!(!parking.parked_plates().contains(&"B".to_string()));
        assert_eq!(parking.profits().vehicles, before + 1);
        assert_eq!(parking.parked_count(), 2);

        // Checking out twice fails the second time
        assert_eq!(
            parking.check_out("B"),
            Err(ParkingError::PlateNotFound("B".to_string()))
        );
        assert_eq!(parking.profits().vehicles, before + 1);
    }

    #[test]
    fn test_check_out_unknown_plate_changes_nothing() {
        let mut parking = Parking::new(20);
        parking.check_in(car("AA111AA"));
        parking.check_out("AA111AA").unwrap();
        let profits = parking.profits();

        let result = parking.check_out("NOPE");
        assert_eq!(result, Err(ParkingError::PlateNotFound("NOPE".to_string())));
        assert_eq!(parking.profits(), profits);
        assert_eq!(parking.parked_count(), 0);
    }

    #[test]
    fn test_check_out_frees_a_space() {
        let mut parking = Parking::new(1);
        parking.check_in(car("A"));
        assert_eq!(parking.check_in(car("B")), CheckInStatus::ParkingFull);

        parking.check_out("A").unwrap();
        assert_eq!(parking.check_in(car("B")), CheckInStatus::Success);
    }

    #[test]
    fn test_check_out_very_long_stay() {
        let mut parking = Parking::new(20);
        parking.check_in(Vehicle::new("AA111AA", VehicleType::Car, Some("CARD".to_string())).with_parked_time(u32::MAX));
        parking.check_in(Vehicle::new("DD444DD", VehicleType::Bus, None).with_parked_time(u32::MAX));

        assert_eq!(parking.check_out("AA111AA"), Ok(1_216_907_383));
        assert_eq!(parking.check_out("DD444DD"), Ok(1_431_655_755));
        assert_eq!(
            parking.profits(),
            ProfitSummary { vehicles: 2, profits: 1_216_907_383 + 1_431_655_755 }
        );
    }

    #[test]
    fn test_quote_does_not_check_out() {
        let mut parking = Parking::new(20);
        parking.check_in(Vehicle::new("CC333CC", VehicleType::MiniBus, None).with_parked_time(150));

        assert_eq!(parking.quote("CC333CC"), Ok(35));
        assert!(parking.is_parked("CC333CC"));
        assert_eq!(parking.profits(), ProfitSummary::default());

        assert!(parking.quote("NOPE").is_err());
    }

    #[test]
    fn test_capacity_twenty_with_twenty_three_vehicles() {
        let mut parking = Parking::new(20);

        let statuses: Vec<CheckInStatus> = (0..23)
            .map(|i| parking.check_in(car(&format!("PLATE{:02}", i))))
            .collect();

        // First come, first served
        assert!(statuses[..20].iter().all(|s| *s == CheckInStatus::Success));
        assert!(statuses[20..].iter().all(|s| *s == CheckInStatus::ParkingFull));
        assert_eq!(parking.parked_count(), 20);
        assert!(parking.is_parked("PLATE19"));
        assert!(!parking.is_parked("PLATE20"));

        assert!(parking.check_out("PLATE22").is_err());
        assert_eq!(parking.profits(), ProfitSummary::default());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(CheckInStatus::Success.to_string(), "Welcome to Alkeparking");
        assert_eq!(
            CheckInStatus::ParkingFull.to_string(),
            "Sorry, the check-in failed: parking full"
        );
        assert_eq!(
            CheckInStatus::AlreadyRegistered.to_string(),
            "Sorry, the check-in failed: vehicle already registered"
        );
    }

    #[test]
    fn test_profit_summary_display() {
        let summary = ProfitSummary { vehicles: 2, profits: 42 };
        assert_eq!(
            summary.to_string(),
            "2 vehicles have checked out and have earnings of $42"
        );
    }
}
