//! DTOs for REST API requests/responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AllocationResult, VehicleRequestItem};

/// Error raised when a request item fails validation.
#[derive(Debug)]
pub enum RequestError {
    /// The request payload is malformed (non-positive length, negative
    /// quantity).
    InvalidRequest(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// A single length/quantity pair from the request body.
///
/// Fields are signed so that negative inputs reach validation instead of
/// failing opaquely inside deserialization; [`to_domain`](Self::to_domain)
/// rejects them before the engine ever runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequestItemDto {
    /// Length of each vehicle; must be at least 1.
    pub length: i64,
    /// Number of vehicles of this length; must not be negative.
    pub quantity: i64,
}

impl VehicleRequestItemDto {
    /// Validates and converts to the domain type. Fails fast: values are
    /// never silently coerced.
    pub fn to_domain(self) -> Result<VehicleRequestItem, RequestError> {
        if self.length < 1 || self.length > u32::MAX as i64 {
            return Err(RequestError::InvalidRequest(format!(
                "vehicle length must be a positive integer, got {}",
                self.length
            )));
        }
        if self.quantity < 0 || self.quantity > u32::MAX as i64 {
            return Err(RequestError::InvalidRequest(format!(
                "vehicle quantity must not be negative, got {}",
                self.quantity
            )));
        }
        Ok(VehicleRequestItem::new(
            self.length as u32,
            self.quantity as u32,
        ))
    }
}

/// Validates a whole request body.
pub fn to_domain_items(
    items: &[VehicleRequestItemDto],
) -> Result<Vec<VehicleRequestItem>, RequestError> {
    items.iter().map(|dto| dto.to_domain()).collect()
}

/// One ranked allocation in the response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResultDto {
    pub location_id: String,
    /// Listings used, in the order they were selected.
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}

impl From<AllocationResult> for AllocationResultDto {
    fn from(result: AllocationResult) -> Self {
        Self {
            location_id: result.location_id,
            listing_ids: result.listing_ids,
            total_price_in_cents: result.total_price_in_cents,
        }
    }
}

/// Summary of one location in the catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummaryDto {
    pub id: String,
    pub listing_count: usize,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status indicator ("UP" when healthy).
    pub status: &'static str,
}

/// Application info response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    /// Application name.
    pub name: &'static str,
    /// Application version.
    pub version: &'static str,
}

/// Error body for rejected requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_item() {
        let dto = VehicleRequestItemDto {
            length: 10,
            quantity: 0,
        };
        let item = dto.to_domain().unwrap();
        assert_eq!(item.length, 10);
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn rejects_non_positive_length() {
        for length in [0, -5] {
            let dto = VehicleRequestItemDto {
                length,
                quantity: 1,
            };
            assert!(matches!(
                dto.to_domain(),
                Err(RequestError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn rejects_negative_quantity() {
        let dto = VehicleRequestItemDto {
            length: 10,
            quantity: -1,
        };
        assert!(matches!(
            dto.to_domain(),
            Err(RequestError::InvalidRequest(_))
        ));
    }

    #[test]
    fn batch_validation_fails_on_first_bad_item() {
        let items = vec![
            VehicleRequestItemDto {
                length: 10,
                quantity: 1,
            },
            VehicleRequestItemDto {
                length: -1,
                quantity: 1,
            },
        ];
        assert!(to_domain_items(&items).is_err());
    }
}
