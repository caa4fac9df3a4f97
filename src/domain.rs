//! Domain model for vehicle storage allocation.
//!
//! # Overview
//!
//! Models a storage marketplace with:
//! - [`VehicleRequestItem`]s describing how many vehicles of a given length
//!   need storage
//! - Priced [`Listing`]s with physical width and length, grouped into
//!   [`Location`]s
//! - [`AllocationResult`] as the per-location outcome: which listings, at
//!   what total price
//!
//! # Design
//!
//! A listing's width is carved into fixed 10-unit lanes; vehicles are parked
//! end-to-end within a lane up to the listing's length. Lanes are ephemeral:
//! they exist only inside a single fitness check and are never persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Width of a single parking lane, in the same unit as listing dimensions.
///
/// A listing's width is divided into fixed slices of this width; any
/// remainder narrower than one lane is unusable.
pub const LANE_WIDTH: f64 = 10.0;

/// A request for storage of `quantity` vehicles, each of the given length.
///
/// Validated at the API boundary: `length` is always positive. A quantity of
/// zero is legal and contributes no vehicles.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::VehicleRequestItem;
///
/// let item = VehicleRequestItem::new(25, 3);
/// assert_eq!(item.length, 25);
/// assert_eq!(item.quantity, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRequestItem {
    /// Length of each requested vehicle (positive).
    pub length: u32,
    /// Number of vehicles of this length.
    pub quantity: u32,
}

impl VehicleRequestItem {
    /// Creates a new request item.
    pub fn new(length: u32, quantity: u32) -> Self {
        Self { length, quantity }
    }
}

/// A priced storage offering at a location.
///
/// Loaded once from the catalog and read-only during allocation. The loader
/// guarantees `width` and `length` are positive; the engine treats that as a
/// precondition.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::Listing;
///
/// let listing = Listing::new("l-1", "downtown", 25.0, 40.0, 1500);
///
/// // 25 units of width hold two 10-unit lanes; the 5-unit remainder is lost.
/// assert_eq!(listing.lane_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: String,
    /// Identifier of the location this listing belongs to.
    pub location_id: String,
    /// Physical width (positive).
    pub width: f64,
    /// Physical length (positive).
    pub length: f64,
    /// Price in cents.
    pub price_in_cents: u64,
}

impl Listing {
    /// Creates a new listing.
    pub fn new(
        id: impl Into<String>,
        location_id: impl Into<String>,
        width: f64,
        length: f64,
        price_in_cents: u64,
    ) -> Self {
        Self {
            id: id.into(),
            location_id: location_id.into(),
            width,
            length,
            price_in_cents,
        }
    }

    /// Number of parallel lanes this listing provides.
    ///
    /// Integer floor of `width / LANE_WIDTH`, exactly. This truncation is a
    /// deliberate policy, not a rounding approximation: a listing narrower
    /// than one lane holds no vehicles at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicle_storage::domain::Listing;
    ///
    /// assert_eq!(Listing::new("a", "x", 9.9, 50.0, 100).lane_count(), 0);
    /// assert_eq!(Listing::new("b", "x", 10.0, 50.0, 100).lane_count(), 1);
    /// assert_eq!(Listing::new("c", "x", 39.0, 50.0, 100).lane_count(), 3);
    /// ```
    #[inline]
    pub fn lane_count(&self) -> usize {
        (self.width / LANE_WIDTH).floor() as usize
    }
}

/// A grouping of listings sharing a location identifier.
///
/// Allocation succeeds or fails per location; using one location never
/// reduces availability in another.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Location identifier.
    pub id: String,
    /// Listings at this location, in catalog encounter order.
    pub listings: Vec<Listing>,
}

impl Location {
    /// Creates a location with no listings yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listings: Vec::new(),
        }
    }
}

/// A feasible allocation at one location.
///
/// `listing_ids` holds the listings in the order they were used;
/// `total_price_in_cents` is the sum of their prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    /// The location that can store the full request.
    pub location_id: String,
    /// Listings used, in selection order.
    pub listing_ids: Vec<String>,
    /// Total price of the used listings, in cents.
    pub total_price_in_cents: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_count_floors_width() {
        let listing = Listing::new("l", "loc", 29.9, 10.0, 0);
        assert_eq!(listing.lane_count(), 2);
    }

    #[test]
    fn sub_lane_width_yields_zero_lanes() {
        let listing = Listing::new("l", "loc", 9.0, 100.0, 0);
        assert_eq!(listing.lane_count(), 0);
    }

    #[test]
    fn exact_multiple_of_lane_width() {
        let listing = Listing::new("l", "loc", 40.0, 10.0, 0);
        assert_eq!(listing.lane_count(), 4);
    }
}
