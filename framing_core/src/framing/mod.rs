//! # Wall Framing Calculations
//!
//! Pure arithmetic that turns a rectangular footprint into a lumber count.
//! Everything here is stateless: identical inputs always produce identical
//! outputs, and nothing performs I/O.
//!
//! The calculation is layered bottom-up:
//!
//! - [`wall`] - per-length plate/stud/board counts, post placement and the
//!   single-wall builder
//! - [`waste`] - the waste allowance applied once per house
//! - [`house`] - validation of the footprint and the whole-house aggregate
//!
//! ## Example
//!
//! ```rust
//! use framing_core::framing::calculate_house_requirements;
//!
//! let req = calculate_house_requirements(10.0, 10.0).unwrap();
//! assert_eq!(req.studs, 53);
//! assert_eq!(req.posts, 5);
//! ```

pub mod house;
pub mod wall;
pub mod waste;

pub use house::{
    calculate_house_breakdown, calculate_house_requirements, HouseBreakdown, HouseDimensions,
    HouseRequirements,
};
pub use wall::{build_wall, Wall};
pub use waste::account_for_waste;

/// Width consumed by one support post (a 4x4 is 3.5" actual)
pub const POST_WIDTH: f64 = 3.5;

/// Standard stock board length in inches (8 ft)
pub const BOARD_LENGTH: f64 = 8.0 * 12.0;

/// Waste allowance as a whole percentage
pub const WASTE_PERCENT: u32 = 10;

/// Waste allowance as a fraction of the computed quantity
pub const WASTE_MULTIPLIER: f64 = WASTE_PERCENT as f64 / 100.0;

/// On-center spacing between studs in inches
pub const STUD_SPACING: f64 = 16.0;

/// Maximum span in inches before another support post is mandatory (20 ft)
pub const POST_INTERVAL: f64 = 20.0 * 12.0;

/// Whole boards that fit between two posts
pub const FULL_BOARDS_IN_SECTION: f64 = 2.0;

/// Largest inter-post span that can be filled with whole boards only (192")
pub const FULL_BOARD_SECTION_SIZE: f64 = FULL_BOARDS_IN_SECTION * BOARD_LENGTH;

/// Posts standing at the building's four corners
pub const CORNER_POSTS: u32 = 4;

/// Walls of each orientation in a rectangular footprint
pub const WALLS_PER_ORIENTATION: u32 = 2;
