// ⚠️ Parking errors
//
// Expected, recoverable outcomes. Check-in rejections are reported through
// `CheckInStatus`; this type covers the check-out side.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// No parked vehicle has this plate
    PlateNotFound(String),
}

impl Display for ParkingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlateNotFound(plate) => {
                write!(f, "Sorry, the check-out failed: plate {} not found", plate)
            }
        }
    }
}

impl std::error::Error for ParkingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_not_found_message() {
        let err = ParkingError::PlateNotFound("ZZ999ZZ".to_string());
        assert_eq!(err.to_string(), "Sorry, the check-out failed: plate ZZ999ZZ not found");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = ParkingError::PlateNotFound("X".to_string()).into();
        assert_eq!(
            err.downcast_ref::<ParkingError>(),
            Some(&ParkingError::PlateNotFound("X".to_string()))
        );
    }
}
