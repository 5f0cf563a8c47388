//! # Whole-House Requirements
//!
//! Validates a rectangular footprint and aggregates the two wall
//! orientations into the lumber order for all four exterior walls.
//!
//! ## Assumptions
//!
//! - Dimensions are outside-to-outside, in feet
//! - Opposite walls are mirrored, so each orientation is built once and
//!   billed twice
//! - A post stands at every corner; wall spans are measured between them
//! - No openings (doors/windows) are deducted
//!
//! ## Example
//!
//! ```rust
//! use framing_core::framing::calculate_house_requirements;
//!
//! let req = calculate_house_requirements(30.0, 10.0).unwrap();
//! assert_eq!(req.studs, 95);
//! assert_eq!(req.posts, 7);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::wall::{build_wall, Wall};
use super::waste::account_for_waste;
use super::{CORNER_POSTS, POST_WIDTH, WALLS_PER_ORIENTATION};
use crate::errors::{FramingError, FramingResult};
use crate::units::{Feet, Inches};

/// Largest accepted footprint dimension in feet. Keeps every wall count,
/// including `boards * full_sections`, far inside `u32`.
pub const MAX_DIMENSION_FT: f64 = 10_000.0;

/// Validated outer dimensions of a rectangular building.
///
/// ## JSON Example
///
/// ```json
/// { "width_ft": 30.0, "length_ft": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseDimensions {
    /// Outer width in feet
    pub width_ft: f64,

    /// Outer length in feet
    pub length_ft: f64,
}

impl HouseDimensions {
    /// Validate and build a footprint.
    ///
    /// # Errors
    ///
    /// `FramingError::InvalidDimension` when either value is non-finite,
    /// zero, negative, or larger than [`MAX_DIMENSION_FT`].
    ///
    /// A footprint narrower than its two corner posts is accepted; its
    /// negative inner span frames to zero boards.
    pub fn new(width_ft: f64, length_ft: f64) -> FramingResult<Self> {
        validate_dimension("width_ft", width_ft)?;
        validate_dimension("length_ft", length_ft)?;
        Ok(HouseDimensions { width_ft, length_ft })
    }

    /// Span of the width walls between their corner posts
    pub fn inner_width(&self) -> Inches {
        inner_span(Feet(self.width_ft))
    }

    /// Span of the length walls between their corner posts
    pub fn inner_length(&self) -> Inches {
        inner_span(Feet(self.length_ft))
    }
}

fn validate_dimension(field: &str, value: f64) -> FramingResult<()> {
    if !value.is_finite() {
        return Err(FramingError::invalid_dimension(
            field,
            value.to_string(),
            "Dimension must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(FramingError::invalid_dimension(
            field,
            value.to_string(),
            "Dimension must be positive",
        ));
    }
    if value > MAX_DIMENSION_FT {
        return Err(FramingError::invalid_dimension(
            field,
            value.to_string(),
            format!("Dimension exceeds {MAX_DIMENSION_FT} ft"),
        ));
    }
    Ok(())
}

/// Outer span minus a corner post at each end.
fn inner_span(outer: Feet) -> Inches {
    let outer_in: Inches = outer.into();
    outer_in - Inches(POST_WIDTH) * 2.0
}

/// Lumber order for the four exterior walls, waste included.
///
/// `studs` counts every 2x framing board (vertical studs plus the top and
/// bottom plates); `posts` counts support posts including the corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseRequirements {
    pub studs: u32,
    pub posts: u32,
}

/// Detailed report: both wall orientations plus the final order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseBreakdown {
    pub dimensions: HouseDimensions,

    /// One of the two walls spanning the width
    pub width_wall: Wall,

    /// One of the two walls spanning the length
    pub length_wall: Wall,

    /// Studs before the waste allowance
    pub studs_before_waste: u32,

    /// Posts (interior plus corners) before the waste allowance
    pub posts_before_waste: u32,

    pub requirements: HouseRequirements,
}

impl HouseBreakdown {
    /// Frame both wall orientations of a validated footprint.
    pub fn from_dimensions(dimensions: HouseDimensions) -> Self {
        let width_wall = build_wall(dimensions.inner_width().value());
        let length_wall = build_wall(dimensions.inner_length().value());

        let studs_before_waste = (width_wall.boards + length_wall.boards) * WALLS_PER_ORIENTATION;
        let posts_before_waste = (width_wall.posts + length_wall.posts) * WALLS_PER_ORIENTATION + CORNER_POSTS;

        let requirements = HouseRequirements {
            studs: account_for_waste(studs_before_waste),
            posts: account_for_waste(posts_before_waste),
        };

        debug!(
            width_ft = dimensions.width_ft,
            length_ft = dimensions.length_ft,
            studs = requirements.studs,
            posts = requirements.posts,
            "calculated house requirements"
        );

        HouseBreakdown {
            dimensions,
            width_wall,
            length_wall,
            studs_before_waste,
            posts_before_waste,
            requirements,
        }
    }
}

/// Calculate the lumber order for a rectangular building.
///
/// # Arguments
///
/// * `width_ft` - Outer width in feet
/// * `length_ft` - Outer length in feet
///
/// # Returns
///
/// * `Ok(HouseRequirements)` - Studs and posts, waste included
/// * `Err(FramingError::InvalidDimension)` - Rejected before any formula runs
pub fn calculate_house_requirements(width_ft: f64, length_ft: f64) -> FramingResult<HouseRequirements> {
    calculate_house_breakdown(width_ft, length_ft).map(|breakdown| breakdown.requirements)
}

/// Same as [`calculate_house_requirements`] but keeps the per-wall detail.
pub fn calculate_house_breakdown(width_ft: f64, length_ft: f64) -> FramingResult<HouseBreakdown> {
    let dimensions = HouseDimensions::new(width_ft, length_ft)?;
    Ok(HouseBreakdown::from_dimensions(dimensions))
}
