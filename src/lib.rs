// Alkeparking - Core Library
// Exposes the parking registry for use in the CLI and tests

pub mod vehicle;    // Vehicle types, rates, plate identity
pub mod fee;        // Tiered fee calculation
pub mod error;      // Check-out failures
pub mod parking;    // Parking registry: check-in / check-out
pub mod config;     // Capacity + default parked time, JSON loading
pub mod fleet;      // Demo fleet + fleet files
pub mod simulation; // Fleet runs and reports

// Re-export commonly used types
pub use vehicle::{Vehicle, VehicleType, DEFAULT_PARKED_TIME};
pub use fee::{calculate_fee, overage_blocks};
pub use error::ParkingError;
pub use parking::{CheckInStatus, Parking, ProfitSummary};
pub use config::{ParkingConfig, DEFAULT_CAPACITY};
pub use fleet::{load_fleet, sample_fleet, FleetEntry};
pub use simulation::{CheckInRecord, CheckOutRecord, SimulationReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
