// 💰 Fee Calculation - Tiered pricing
//
// base rate covers the first two hours, every started quarter hour after
// that adds a flat surcharge, and a discount card takes 15% off the total.

use crate::vehicle::VehicleType;

/// Minutes covered by the base rate
pub const BASE_PERIOD_MINUTES: u32 = 120;

/// Length of one overage block
pub const BLOCK_MINUTES: u32 = 15;

/// Surcharge per started overage block
pub const BLOCK_FEE: u32 = 5;

/// Percentage kept after a discount card is applied (15% off)
pub const DISCOUNT_PERCENT_KEPT: u32 = 85;

/// Number of started blocks past the base period (0 within it)
pub fn overage_blocks(parked_time: u32) -> u32 {
    if parked_time <= BASE_PERIOD_MINUTES {
        return 0;
    }
    (parked_time - BASE_PERIOD_MINUTES).div_ceil(BLOCK_MINUTES)
}

/// Fee for a stay.
///
/// The discount applies to the overage-adjusted fee, never to the base
/// alone, and truncates toward zero.
pub fn calculate_fee(vehicle_type: VehicleType, parked_time: u32, has_discount: bool) -> u32 {
    let fee = vehicle_type.rate() + overage_blocks(parked_time) * BLOCK_FEE;

    if has_discount {
        // Split on hundreds so the multiply stays within u32 for any stay
        fee / 100 * DISCOUNT_PERCENT_KEPT + fee % 100 * DISCOUNT_PERCENT_KEPT / 100
    } else {
        fee
    }
}

// ============================================================================
// TESTS
// ============================================================================
