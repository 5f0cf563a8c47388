//! # framing_core - Wall Framing Lumber Estimation
//!
//! `framing_core` estimates the dimensional lumber needed to frame the
//! exterior walls of a rectangular building: 2x framing boards (studs plus
//! top and bottom plates) and structural support posts, waste included.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The framing engine is a set of pure functions
//! - **Validated at the boundary**: Bad dimensions fail before any formula runs
//! - **JSON-First**: Results, records and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use framing_core::calculate_house_requirements;
//!
//! // 30 ft x 10 ft footprint
//! let req = calculate_house_requirements(30.0, 10.0)?;
//! assert_eq!(req.studs, 95);
//! assert_eq!(req.posts, 7);
//!
//! let json = serde_json::to_string(&req).unwrap();
//! assert_eq!(json, r#"{"studs":95,"posts":7}"#);
//! # Ok::<(), framing_core::FramingError>(())
//! ```
//!
//! ## Modules
//!
//! - [`framing`] - Wall and whole-house framing arithmetic
//! - [`units`] - Type-safe length wrappers
//! - [`houses`] - Named house records and the record store
//! - [`supplies`] - Pluggable per-wall supplies strategy
//! - [`errors`] - Structured error types
//! - [`file_io`] - Store persistence with atomic saves and locking

pub mod errors;
pub mod file_io;
pub mod framing;
pub mod houses;
pub mod supplies;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{FramingError, FramingResult};
pub use file_io::{load_or_default, load_store, save_store, FileLock};
pub use framing::{calculate_house_breakdown, calculate_house_requirements, HouseDimensions, HouseRequirements};
pub use houses::{HouseRecord, HouseStore};
pub use supplies::{StandardWallSupplies, WallSupplies, WallSuppliesCalculator};
