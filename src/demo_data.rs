//! Demo catalog generators.
//!
//! Provides realistic demo catalogs for two cities:
//! - Baltimore (8 storage yards, 2-5 listings each)
//! - Providence (5 storage yards, 2-4 listings each)
//!
//! Yards carry a mix of listing shapes:
//! - Compact (50%): 1-2 lanes, short, cheap
//! - Standard (30%): 2-3 lanes, mid-length
//! - Bulk (20%): 4+ lanes, long, priced per area

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Listing;

/// Listing shape with width/length/price characteristics.
#[derive(Clone, Copy)]
enum ListingKind {
    /// One or two short lanes for cars and small trailers.
    Compact,
    /// A few mid-length lanes.
    Standard,
    /// Wide, long lots for fleets and RVs.
    Bulk,
}

impl ListingKind {
    fn width_range(&self) -> (f64, f64) {
        match self {
            ListingKind::Compact => (10.0, 25.0),
            ListingKind::Standard => (20.0, 38.0),
            ListingKind::Bulk => (40.0, 65.0),
        }
    }

    fn length_range(&self) -> (f64, f64) {
        match self {
            ListingKind::Compact => (12.0, 20.0),
            ListingKind::Standard => (20.0, 40.0),
            ListingKind::Bulk => (40.0, 80.0),
        }
    }

    /// Price per unit of area, in cents.
    fn rate_range(&self) -> (f64, f64) {
        match self {
            ListingKind::Compact => (3.0, 5.0),
            ListingKind::Standard => (2.0, 4.0),
            ListingKind::Bulk => (1.5, 3.0),
        }
    }

    /// Weighted random selection: 50% compact, 30% standard, 20% bulk.
    fn random(rng: &mut StdRng) -> Self {
        let r: u32 = rng.gen_range(1..=100);
        if r <= 50 {
            ListingKind::Compact
        } else if r <= 80 {
            ListingKind::Standard
        } else {
            ListingKind::Bulk
        }
    }
}

/// Demo catalog configuration.
struct DemoConfig {
    seed: u64,
    yards: &'static [&'static str],
    min_listings_per_yard: usize,
    max_listings_per_yard: usize,
}

const BALTIMORE_YARDS: &[&str] = &[
    "Canton Waterfront Yard",
    "Locust Point Depot",
    "Highlandtown Lot",
    "Curtis Bay Storage",
    "Hampden Mill Yard",
    "Brooklyn Park Lot",
    "Dundalk Terminal Yard",
    "Pigtown Rail Lot",
];

const PROVIDENCE_YARDS: &[&str] = &[
    "Fox Point Yard",
    "Olneyville Depot",
    "Eagle Square Lot",
    "Port of Providence Yard",
    "Valley Street Storage",
];

const BALTIMORE: DemoConfig = DemoConfig {
    seed: 37,
    yards: BALTIMORE_YARDS,
    min_listings_per_yard: 2,
    max_listings_per_yard: 5,
};

const PROVIDENCE: DemoConfig = DemoConfig {
    seed: 73,
    yards: PROVIDENCE_YARDS,
    min_listings_per_yard: 2,
    max_listings_per_yard: 4,
};

/// Names of the available demo catalogs.
pub fn available_catalogs() -> &'static [&'static str] {
    &["baltimore", "providence"]
}

/// Generates a demo catalog by name, listings in yard order.
pub fn generate_by_name(name: &str) -> Option<Vec<Listing>> {
    match name {
        "baltimore" => Some(generate(&BALTIMORE)),
        "providence" => Some(generate(&PROVIDENCE)),
        _ => None,
    }
}

/// Generates the Baltimore demo catalog.
pub fn generate_baltimore() -> Vec<Listing> {
    generate(&BALTIMORE)
}

/// Generates the Providence demo catalog.
pub fn generate_providence() -> Vec<Listing> {
    generate(&PROVIDENCE)
}

fn generate(config: &DemoConfig) -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut listings = Vec::new();

    for yard in config.yards {
        let count = rng.gen_range(config.min_listings_per_yard..=config.max_listings_per_yard);
        for i in 0..count {
            let kind = ListingKind::random(&mut rng);

            let (min_w, max_w) = kind.width_range();
            let width = round_half(rng.gen_range(min_w..=max_w));
            let (min_l, max_l) = kind.length_range();
            let length = round_half(rng.gen_range(min_l..=max_l));
            let (min_r, max_r) = kind.rate_range();
            let rate = rng.gen_range(min_r..=max_r);
            let price_in_cents = (width * length * rate).round() as u64;

            listings.push(Listing::new(
                format!("{}-{}", slug(yard), i + 1),
                *yard,
                width,
                length,
                price_in_cents,
            ));
        }
    }

    listings
}

/// Rounds to the nearest half unit for tidier demo dimensions.
fn round_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Lowercase, hyphenated id fragment from a yard name.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
