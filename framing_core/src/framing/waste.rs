//! Waste allowance.

use super::WASTE_PERCENT;

/// Add the waste allowance to a computed quantity, rounding the allowance up.
///
/// `items + ceil(items * 0.1)`, evaluated in integers so multiples of ten
/// never pick up a spurious extra piece from floating point error.
///
/// Apply once per house, never per wall.
pub fn account_for_waste(items: u32) -> u32 {
    items + (items * WASTE_PERCENT).div_ceil(100)
}
