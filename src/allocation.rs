//! Allocation engine: lane packing and cheapest-first listing selection.
//!
//! # Overview
//!
//! Given an expanded, longest-first vehicle list and the catalog:
//! - [`check_storage_fitness`] packs vehicles into one listing's lanes with
//!   a single-pass First-Fit Decreasing sweep
//! - [`find_storages_for_location`] greedily combines a location's listings,
//!   cheapest first, until the vehicle list is consumed
//! - [`find_storages`] ranks the locations that can store the full request,
//!   cheapest total first
//!
//! # Design
//!
//! The engine is pure: the catalog is read-only, each location is evaluated
//! against its own copy of the vehicle list, and residual vehicles travel as
//! an explicit [`VecDeque`] return value rather than a mutated shared list.
//! Locations are independent, so they are evaluated on a rayon parallel
//! iterator; the final stable price sort makes the output order
//! deterministic regardless of scheduling.

use std::collections::VecDeque;

use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::domain::{AllocationResult, Listing, VehicleRequestItem};

/// Listings selected at one location, with their combined price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSelection {
    /// Ids of the listings tried, in selection order.
    pub listing_ids: Vec<String>,
    /// Sum of the tried listings' prices, in cents.
    pub total_price_in_cents: u64,
}

/// Expands request items into a flat vehicle list, sorted longest first.
///
/// Each item contributes `quantity` copies of its length; a quantity of
/// zero contributes nothing. The descending order is what the packer's
/// First-Fit Decreasing sweep relies on.
///
/// # Examples
///
/// ```
/// use vehicle_storage::allocation::expand_vehicles;
/// use vehicle_storage::domain::VehicleRequestItem;
///
/// let items = vec![
///     VehicleRequestItem::new(10, 2),
///     VehicleRequestItem::new(25, 1),
///     VehicleRequestItem::new(5, 0),
/// ];
/// assert_eq!(expand_vehicles(&items), vec![25, 10, 10]);
/// ```
pub fn expand_vehicles(items: &[VehicleRequestItem]) -> Vec<u32> {
    let mut vehicles: Vec<u32> = Vec::with_capacity(
        items.iter().map(|item| item.quantity as usize).sum(),
    );
    for item in items {
        for _ in 0..item.quantity {
            vehicles.push(item.length);
        }
    }
    vehicles.sort_unstable_by(|a, b| b.cmp(a));
    vehicles
}

/// Packs the front of a longest-first vehicle deque into one listing's lanes.
///
/// Builds `lane_count()` lanes, each starting with the listing's full
/// length. Lanes are filled in turn: while the front vehicle fits the
/// current lane's remaining length, it is consumed and the lane shrinks. A
/// front vehicle that does not fit closes the lane — because the deque is
/// sorted descending, no later (shorter) vehicle is back-filled into it.
///
/// Returns true iff the deque empties; otherwise the unplaced remainder is
/// left in the deque for the caller to try against further listings.
///
/// Zero lanes (width under one lane) can only satisfy an already-empty
/// deque.
pub fn check_storage_fitness(vehicles: &mut VecDeque<u32>, listing: &Listing) -> bool {
    for _ in 0..listing.lane_count() {
        if vehicles.is_empty() {
            return true;
        }
        let mut remaining = listing.length;
        while let Some(&front) = vehicles.front() {
            if f64::from(front) > remaining {
                break;
            }
            remaining -= f64::from(front);
            vehicles.pop_front();
        }
    }
    vehicles.is_empty()
}

/// Greedily selects listings at one location, cheapest first, until the
/// vehicle list is consumed.
///
/// Works on a private copy of `vehicles`; the caller's list is untouched.
/// Every listing attempted while vehicles remain is charged into the total
/// and recorded in `listing_ids`, whether or not it fully (or even partly)
/// drains the residual list — partial fills are still useful, and the
/// charge-on-attempt policy is the contract. Selection stops as soon as the
/// residual empties.
///
/// Returns the selection plus the leftover vehicles; a non-empty leftover
/// means the location cannot store the full request.
pub fn find_storages_for_location(
    vehicles: &[u32],
    listings: &[Listing],
) -> (ListingSelection, VecDeque<u32>) {
    let mut residual: VecDeque<u32> = vehicles.iter().copied().collect();

    let mut by_price: Vec<&Listing> = listings.iter().collect();
    by_price.sort_by_key(|l| l.price_in_cents);

    let mut listing_ids = Vec::new();
    let mut total_price_in_cents: u64 = 0;
    for listing in by_price {
        if residual.is_empty() {
            break;
        }
        listing_ids.push(listing.id.clone());
        total_price_in_cents += listing.price_in_cents;
        check_storage_fitness(&mut residual, listing);
    }

    (
        ListingSelection {
            listing_ids,
            total_price_in_cents,
        },
        residual,
    )
}

/// Finds every location that can store the full request, ranked by price.
///
/// Each location is evaluated independently against a fresh copy of the
/// expanded vehicle list; locations with leftover vehicles are dropped.
/// The survivors are stable-sorted ascending by total price, so price ties
/// keep catalog encounter order. An empty request is satisfiable everywhere
/// at zero cost.
///
/// # Examples
///
/// ```
/// use vehicle_storage::allocation::find_storages;
/// use vehicle_storage::catalog::Catalog;
/// use vehicle_storage::domain::{Listing, VehicleRequestItem};
///
/// let catalog = Catalog::new(vec![
///     Listing::new("big", "pricey", 20.0, 50.0, 2000),
///     Listing::new("small", "bargain", 10.0, 30.0, 700),
/// ]);
/// let request = vec![VehicleRequestItem::new(15, 2)];
///
/// let results = find_storages(&request, &catalog);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].location_id, "bargain");
/// assert_eq!(results[0].total_price_in_cents, 700);
/// ```
pub fn find_storages(items: &[VehicleRequestItem], catalog: &Catalog) -> Vec<AllocationResult> {
    let vehicles = expand_vehicles(items);

    let mut results: Vec<AllocationResult> = catalog
        .locations()
        .par_iter()
        .filter_map(|location| {
            let (selection, leftover) =
                find_storages_for_location(&vehicles, &location.listings);
            if leftover.is_empty() {
                Some(AllocationResult {
                    location_id: location.id.clone(),
                    listing_ids: selection.listing_ids,
                    total_price_in_cents: selection.total_price_in_cents,
                })
            } else {
                None
            }
        })
        .collect();

    results.sort_by_key(|r| r.total_price_in_cents);
    results
}
