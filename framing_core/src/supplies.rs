//! # Wall Supplies Strategy
//!
//! Host applications can replace per-wall material estimation by installing
//! a [`WallSuppliesCalculator`] on a [`HouseStore`](crate::houses::HouseStore).
//! The framing engine in [`crate::framing`] never consults this seam.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::supplies::{WallSupplies, WallSuppliesCalculator};
//!
//! // closures work as strategies
//! let flat_rate = |_inches: f64| WallSupplies { posts: 1, studs: 10, plates: 2 };
//! assert_eq!(flat_rate.wall_supplies(120.0).studs, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::framing::build_wall;

/// Materials for one wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallSupplies {
    /// Interior support posts
    pub posts: u32,
    /// Vertical studs
    pub studs: u32,
    /// Top and bottom plate pieces
    pub plates: u32,
}

/// Per-wall material estimation strategy.
pub trait WallSuppliesCalculator: Send + Sync {
    /// Estimate the supplies for a wall span given in inches.
    fn wall_supplies(&self, inches: f64) -> WallSupplies;
}

impl<F> WallSuppliesCalculator for F
where
    F: Fn(f64) -> WallSupplies + Send + Sync,
{
    fn wall_supplies(&self, inches: f64) -> WallSupplies {
        self(inches)
    }
}

/// Default strategy: the standard stud/plate/post layout from
/// [`build_wall`], with studs and plates reported separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardWallSupplies;

impl WallSuppliesCalculator for StandardWallSupplies {
    fn wall_supplies(&self, inches: f64) -> WallSupplies {
        let wall = build_wall(inches);
        WallSupplies {
            posts: wall.posts,
            studs: wall.studs,
            plates: wall.plates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_supplies_match_wall() {
        let supplies = StandardWallSupplies.wall_supplies(353.0);
        assert_eq!(supplies, WallSupplies { posts: 1, studs: 23, plates: 8 });
    }

    #[test]
    fn test_closure_strategy() {
        let fixed = |_: f64| WallSupplies { posts: 42, studs: 42, plates: 96 };
        let calculator: Box<dyn WallSuppliesCalculator> = Box::new(fixed);
        assert_eq!(calculator.wall_supplies(10.0).plates, 96);
    }
}
