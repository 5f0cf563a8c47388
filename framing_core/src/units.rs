//! # Unit Types
//!
//! Type-safe length wrappers. Building footprints are entered in feet, while
//! every framing formula works in inches, so the conversion happens exactly
//! once at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::units::{Feet, Inches};
//!
//! let width = Feet(10.0);
//! let width_in: Inches = width.into();
//! assert_eq!(width_in.0, 120.0);
//! ```

use std::fmt;
use std::ops::{Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FramingError;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(convert_feet_to_inches(ft.0))
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

/// Convert feet to inches. No rounding is applied.
pub fn convert_feet_to_inches(feet: f64) -> f64 {
    feet * INCHES_PER_FOOT
}

impl Sub for Inches {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Inches(self.0 - rhs.0)
    }
}

impl Mul<f64> for Inches {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Inches(self.0 * rhs)
    }
}

impl Inches {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Length unit named on the command line.
///
/// Dimensions are always interpreted as feet; this enum exists so the
/// `--units` flag can be parsed and reported instead of silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Feet,
    Inches,
}

impl LengthUnit {
    pub fn abbreviation(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Inches => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for LengthUnit {
    type Err = FramingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            other => Err(FramingError::invalid_input(
                "units",
                other,
                "Expected one of: ft, feet, in, inches",
            )),
        }
    }
}
