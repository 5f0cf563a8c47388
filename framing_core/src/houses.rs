//! # House Records
//!
//! Named house footprints that can be stored, listed and fed to the framing
//! engine. A [`HouseStore`] serializes to a JSON file (see [`crate::file_io`]).
//!
//! ## Structure
//!
//! ```text
//! HouseStore
//! ├── version: schema version of the store file
//! └── houses: BTreeMap<String, HouseRecord> (keyed by house name)
//! ```
//!
//! Widths and lengths are stored in **feet**, the same convention the CLI
//! uses, so a stored record and `calc-wood-needed` with the same numbers
//! always agree.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::houses::HouseStore;
//!
//! let mut store = HouseStore::new();
//! store.create("Gerald's Cabin", 30.0, 10.0).unwrap();
//!
//! let req = store.requirements("Gerald's Cabin").unwrap();
//! assert_eq!(req.studs, 95);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{FramingError, FramingResult};
use crate::framing::{HouseBreakdown, HouseDimensions, HouseRequirements};
use crate::supplies::{StandardWallSupplies, WallSupplies, WallSuppliesCalculator};

/// Current schema version for store files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One named house footprint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Gerald's Cabin",
///   "width_ft": 30.0,
///   "length_ft": 10.0,
///   "created": "2026-10-15T12:00:00Z",
///   "modified": "2026-10-15T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    /// Unique name, also the store key
    pub name: String,

    /// Outer width in feet
    pub width_ft: f64,

    /// Outer length in feet
    pub length_ft: f64,

    /// When the record was created
    pub created: DateTime<Utc>,

    /// When the record was last saved
    pub modified: DateTime<Utc>,
}

impl HouseRecord {
    /// Create a validated record. The name is trimmed.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - the name is empty
    /// * `InvalidDimension` - see [`HouseDimensions::new`]
    pub fn new(name: impl Into<String>, width_ft: f64, length_ft: f64) -> FramingResult<Self> {
        let name = normalize_name(name.into())?;
        HouseDimensions::new(width_ft, length_ft)?;

        let now = Utc::now();
        Ok(HouseRecord {
            name,
            width_ft,
            length_ft,
            created: now,
            modified: now,
        })
    }

    /// Validated footprint of this house.
    pub fn dimensions(&self) -> FramingResult<HouseDimensions> {
        HouseDimensions::new(self.width_ft, self.length_ft)
    }

    /// Run the framing engine on this house.
    pub fn requirements(&self) -> FramingResult<HouseRequirements> {
        Ok(self.breakdown()?.requirements)
    }

    /// Run the framing engine on this house, keeping the per-wall detail.
    pub fn breakdown(&self) -> FramingResult<HouseBreakdown> {
        Ok(HouseBreakdown::from_dimensions(self.dimensions()?))
    }
}

fn normalize_name(name: String) -> FramingResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FramingError::invalid_input("name", name, "House name must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Supplies for one wall of each orientation, from the installed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseWallSupplies {
    pub width_wall: WallSupplies,
    pub length_wall: WallSupplies,
}

/// Collection of house records keyed by name.
#[derive(Clone, Serialize, Deserialize)]
pub struct HouseStore {
    /// Schema version (for migration compatibility)
    pub version: String,

    houses: BTreeMap<String, HouseRecord>,

    #[serde(skip)]
    supplies: Option<Arc<dyn WallSuppliesCalculator>>,
}

impl HouseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        HouseStore {
            version: SCHEMA_VERSION.to_string(),
            houses: BTreeMap::new(),
            supplies: None,
        }
    }

    /// Create and insert a new house.
    ///
    /// Fails with `DuplicateHouse` if the name is taken.
    pub fn create(&mut self, name: impl Into<String>, width_ft: f64, length_ft: f64) -> FramingResult<&HouseRecord> {
        let record = HouseRecord::new(name, width_ft, length_ft)?;
        if self.houses.contains_key(&record.name) {
            return Err(FramingError::duplicate_house(record.name));
        }

        let key = record.name.clone();
        Ok(&*self.houses.entry(key).or_insert(record))
    }

    /// Insert or replace a house, returning the previous record.
    ///
    /// Replacing keeps the original `created` timestamp and bumps `modified`.
    pub fn save(&mut self, mut record: HouseRecord) -> FramingResult<Option<HouseRecord>> {
        record.name = normalize_name(record.name)?;
        record.dimensions()?;
        record.modified = Utc::now();

        if let Some(existing) = self.houses.get(&record.name) {
            record.created = existing.created;
        }

        Ok(self.houses.insert(record.name.clone(), record))
    }

    /// All houses, sorted by name.
    pub fn list(&self) -> Vec<&HouseRecord> {
        self.houses.values().collect()
    }

    /// Look up a house by name.
    pub fn get(&self, name: &str) -> FramingResult<&HouseRecord> {
        self.houses
            .get(name.trim())
            .ok_or_else(|| FramingError::house_not_found(name.trim()))
    }

    /// Remove a house by name.
    pub fn remove(&mut self, name: &str) -> FramingResult<HouseRecord> {
        self.houses
            .remove(name.trim())
            .ok_or_else(|| FramingError::house_not_found(name.trim()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.houses.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.houses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }

    /// Lumber order for a stored house.
    pub fn requirements(&self, name: &str) -> FramingResult<HouseRequirements> {
        self.get(name)?.requirements()
    }

    /// Install a custom per-wall supplies strategy.
    pub fn set_wall_supplies_calculator(&mut self, calculator: impl WallSuppliesCalculator + 'static) {
        self.supplies = Some(Arc::new(calculator));
    }

    /// Go back to [`StandardWallSupplies`].
    pub fn clear_wall_supplies_calculator(&mut self) {
        self.supplies = None;
    }

    /// Per-wall supplies for a stored house, using the installed strategy.
    pub fn wall_supplies(&self, name: &str) -> FramingResult<HouseWallSupplies> {
        let dimensions = self.get(name)?.dimensions()?;
        let width_in = dimensions.inner_width().value();
        let length_in = dimensions.inner_length().value();

        let (width_wall, length_wall) = match &self.supplies {
            Some(calculator) => (calculator.wall_supplies(width_in), calculator.wall_supplies(length_in)),
            None => (
                StandardWallSupplies.wall_supplies(width_in),
                StandardWallSupplies.wall_supplies(length_in),
            ),
        };

        Ok(HouseWallSupplies { width_wall, length_wall })
    }
}

impl Default for HouseStore {
    fn default() -> Self {
        HouseStore::new()
    }
}

impl fmt::Debug for HouseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HouseStore")
            .field("version", &self.version)
            .field("houses", &self.houses)
            .field("custom_supplies", &self.supplies.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut store = HouseStore::new();
        let record = store.create("  Cabin  ", 10.0, 10.0).unwrap();
        assert_eq!(record.name, "Cabin");

        assert!(store.contains("Cabin"));
        assert_eq!(store.get("Cabin").unwrap().width_ft, 10.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_duplicates() {
        let mut store = HouseStore::new();
        store.create("Cabin", 10.0, 10.0).unwrap();

        let err = store.create("Cabin", 20.0, 20.0).unwrap_err();
        assert_eq!(err, FramingError::duplicate_house("Cabin"));
        assert_eq!(store.get("Cabin").unwrap().width_ft, 10.0);
    }

    #[test]
    fn test_create_validates_input() {
        let mut store = HouseStore::new();
        assert_eq!(store.create("   ", 10.0, 10.0).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(store.create("Shed", -3.0, 10.0).unwrap_err().error_code(), "INVALID_DIMENSION");
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_replaces_and_keeps_created() {
        let mut store = HouseStore::new();
        let created = store.create("Barn", 10.0, 10.0).unwrap().created;

        let updated = HouseRecord::new("Barn", 30.0, 10.0).unwrap();
        let previous = store.save(updated).unwrap();

        assert_eq!(previous.unwrap().width_ft, 10.0);
        let stored = store.get("Barn").unwrap();
        assert_eq!(stored.width_ft, 30.0);
        assert_eq!(stored.created, created);
        assert!(stored.modified >= created);
    }

    #[test]
    fn test_save_new_record() {
        let mut store = HouseStore::new();
        let previous = store.save(HouseRecord::new("Garage", 20.0, 24.0).unwrap()).unwrap();
        assert!(previous.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_sorted_by_name() {
        let mut store = HouseStore::new();
        store.create("Shed", 8.0, 10.0).unwrap();
        store.create("Barn", 40.0, 60.0).unwrap();
        store.create("Cabin", 10.0, 10.0).unwrap();

        let names: Vec<_> = store.list().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Barn", "Cabin", "Shed"]);
    }

    #[test]
    fn test_remove() {
        let mut store = HouseStore::new();
        store.create("Shed", 8.0, 10.0).unwrap();

        assert_eq!(store.remove("Shed").unwrap().name, "Shed");
        assert_eq!(store.remove("Shed").unwrap_err(), FramingError::house_not_found("Shed"));
    }

    #[test]
    fn test_requirements_from_record() {
        let mut store = HouseStore::new();
        store.create("Cabin", 30.0, 10.0).unwrap();

        let req = store.requirements("Cabin").unwrap();
        assert_eq!(req, HouseRequirements { studs: 95, posts: 7 });
        assert!(store.requirements("Missing").is_err());
    }

    #[test]
    fn test_wall_supplies_default_and_custom() {
        let mut store = HouseStore::new();
        store.create("Cabin", 30.0, 10.0).unwrap();

        let standard = store.wall_supplies("Cabin").unwrap();
        assert_eq!(standard.width_wall, WallSupplies { posts: 1, studs: 23, plates: 8 });
        assert_eq!(standard.length_wall, WallSupplies { posts: 0, studs: 8, plates: 4 });

        store.set_wall_supplies_calculator(|_: f64| WallSupplies { posts: 42, studs: 42, plates: 96 });
        let custom = store.wall_supplies("Cabin").unwrap();
        assert_eq!(custom.width_wall.plates, 96);

        // the engine itself is unaffected by the strategy
        assert_eq!(store.requirements("Cabin").unwrap().studs, 95);

        store.clear_wall_supplies_calculator();
        assert_eq!(store.wall_supplies("Cabin").unwrap(), standard);
    }

    #[test]
    fn test_store_serialization() {
        let mut store = HouseStore::new();
        store.create("Cabin", 10.0, 12.5).unwrap();

        let json = serde_json::to_string_pretty(&store).unwrap();
        assert!(json.contains("\"version\": \"0.1.0\""));
        assert!(json.contains("Cabin"));

        let roundtrip: HouseStore = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.get("Cabin").unwrap().length_ft, 12.5);
    }
}
