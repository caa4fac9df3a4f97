//! Listing catalog: loading, validation, and location grouping.
//!
//! The catalog is loaded once at startup, validated record by record, and
//! passed into the allocation engine as an immutable value. Malformed
//! records (undecodable fields, non-positive dimensions) are excluded here;
//! the engine never sees them.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::{Listing, Location};

/// Error type for catalog loading.
#[derive(Debug)]
pub enum CatalogError {
    /// I/O error reading the catalog source.
    Io(std::io::Error),
    /// The catalog source is not a JSON array of listing records.
    Parse(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "I/O error: {}", e),
            CatalogError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

/// The immutable listing catalog, grouped by location.
///
/// Locations keep the order in which their `location_id` first appeared in
/// the source; within a location, listings keep source order. That encounter
/// order is what breaks price ties in the final ranking.
///
/// # Examples
///
/// ```
/// use vehicle_storage::catalog::Catalog;
/// use vehicle_storage::domain::Listing;
///
/// let catalog = Catalog::new(vec![
///     Listing::new("a", "north", 10.0, 20.0, 500),
///     Listing::new("b", "south", 10.0, 20.0, 300),
///     Listing::new("c", "north", 20.0, 20.0, 900),
/// ]);
///
/// assert_eq!(catalog.locations().len(), 2);
/// assert_eq!(catalog.locations()[0].id, "north");
/// assert_eq!(catalog.locations()[0].listings.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Builds a catalog from validated listings, grouping by `location_id`
    /// in first-seen order.
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut locations: Vec<Location> = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();

        for listing in listings {
            let idx = *index_by_id
                .entry(listing.location_id.clone())
                .or_insert_with(|| {
                    locations.push(Location::new(listing.location_id.clone()));
                    locations.len() - 1
                });
            locations[idx].listings.push(listing);
        }

        Self { locations }
    }

    /// All locations, in catalog encounter order.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Total number of listings across all locations.
    pub fn listing_count(&self) -> usize {
        self.locations.iter().map(|l| l.listings.len()).sum()
    }

    /// Returns true if the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Loads a catalog from a JSON file: an array of listing records.
    ///
    /// Records that fail to decode, or whose width or length is not a
    /// positive finite number, are skipped with a warning rather than
    /// failing the whole load. An unreadable or unparsable file is an error;
    /// the caller treats that as fatal.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let records: Vec<serde_json::Value> =
            serde_json::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let total = records.len();
        let mut listings = Vec::with_capacity(total);
        for (i, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Listing>(record) {
                Ok(listing) if is_valid(&listing) => listings.push(listing),
                Ok(listing) => {
                    warn!(
                        listing_id = %listing.id,
                        width = listing.width,
                        length = listing.length,
                        "skipping listing with non-positive dimensions"
                    );
                }
                Err(e) => {
                    warn!(record = i, error = %e, "skipping undecodable listing record");
                }
            }
        }

        info!(
            path = %path.display(),
            loaded = listings.len(),
            skipped = total - listings.len(),
            "catalog loaded"
        );
        Ok(Self::new(listings))
    }
}

/// A listing is usable only with positive, finite dimensions.
fn is_valid(listing: &Listing) -> bool {
    listing.width.is_finite()
        && listing.length.is_finite()
        && listing.width > 0.0
        && listing.length > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_location_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            Listing::new("1", "b", 10.0, 10.0, 100),
            Listing::new("2", "a", 10.0, 10.0, 100),
            Listing::new("3", "b", 10.0, 10.0, 100),
        ]);

        let ids: Vec<&str> = catalog.locations().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.locations()[0].listings.len(), 2);
        assert_eq!(catalog.listing_count(), 3);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.listing_count(), 0);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(!is_valid(&Listing::new("l", "x", 0.0, 10.0, 100)));
        assert!(!is_valid(&Listing::new("l", "x", 10.0, -1.0, 100)));
        assert!(!is_valid(&Listing::new("l", "x", f64::NAN, 10.0, 100)));
        assert!(is_valid(&Listing::new("l", "x", 10.0, 10.0, 100)));
    }

    #[test]
    fn from_file_skips_malformed_records() {
        let json = r#"[
            {"id": "ok", "locationId": "a", "width": 20.0, "length": 30.0, "priceInCents": 500},
            {"id": "bad-dims", "locationId": "a", "width": 0.0, "length": 30.0, "priceInCents": 500},
            {"id": "missing-fields", "locationId": "a"},
            {"id": "ok-2", "locationId": "b", "width": 10.0, "length": 15.0, "priceInCents": 200}
        ]"#;
        let dir = std::env::temp_dir();
        let path = dir.join("vehicle-storage-catalog-test.json");
        std::fs::write(&path, json).unwrap();

        let catalog = Catalog::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.listing_count(), 2);
        assert_eq!(catalog.locations().len(), 2);
        assert_eq!(catalog.locations()[0].listings[0].id, "ok");
    }

    #[test]
    fn from_file_errors_on_missing_file() {
        let err = Catalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn from_file_errors_on_invalid_json() {
        let dir = std::env::temp_dir();
        let path = dir.join("vehicle-storage-bad-catalog-test.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Catalog::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
