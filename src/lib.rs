//! Vehicle Storage Allocation Service
//!
//! Decides which storage locations can physically accommodate a multiset of
//! vehicles, using which listings, at what total price — ranked cheapest
//! first.
//!
//! # Domain Model
//!
//! - [`VehicleRequestItem`](domain::VehicleRequestItem): length/quantity pair
//! - [`Listing`](domain::Listing): priced lot whose width divides into
//!   fixed 10-unit lanes
//! - [`Location`](domain::Location): listings grouped by site
//! - [`AllocationResult`](domain::AllocationResult): one feasible, priced
//!   allocation
//!
//! # Engine
//!
//! A deterministic greedy heuristic, not an exact solver: vehicles are
//! packed longest-first into lanes (First-Fit Decreasing), listings are
//! combined cheapest-first per location, and feasible locations are ranked
//! by total price. See [`allocation`].

pub mod allocation;
pub mod api;
pub mod catalog;
pub mod demo_data;
pub mod domain;
pub mod dto;
