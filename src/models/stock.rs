//! Stock model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::Resource;

/// Number of copies of a media held by the library
///
/// `current_stock` counts the copies on the shelf and always stays within
/// `0..=initial_stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i64,
    pub media_id: i64,
    pub initial_stock: i32,
    pub current_stock: i32,
}

impl Stock {
    /// Stock after moving `delta` copies, if it stays within bounds
    pub fn adjusted(&self, delta: i32) -> Option<Stock> {
        let current_stock = self.current_stock.checked_add(delta)?;
        (0..=self.initial_stock)
            .contains(&current_stock)
            .then(|| Stock {
                current_stock,
                ..self.clone()
            })
    }
}

/// Create or replace stock request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_stock_bounds"))]
pub struct StockPayload {
    pub media_id: i64,
    #[validate(range(min = 0, message = "Initial stock must not be negative"))]
    pub initial_stock: i32,
    #[validate(range(min = 0, message = "Current stock must not be negative"))]
    pub current_stock: i32,
}

fn validate_stock_bounds(stock: &StockPayload) -> Result<(), ValidationError> {
    if stock.current_stock > stock.initial_stock {
        let mut error = ValidationError::new("stock_bounds");
        error.message = Some("Current stock exceeds initial stock".into());
        return Err(error);
    }
    Ok(())
}

impl Resource for Stock {
    type Payload = StockPayload;
    /// One stock line per media
    type Key = i64;

    const NAME: &'static str = "Stock";
    const COLLECTION: &'static str = "stocks";

    fn id(&self) -> i64 {
        self.id
    }

    fn key(&self) -> i64 {
        self.media_id
    }

    fn payload_key(payload: &StockPayload) -> i64 {
        payload.media_id
    }

    fn from_payload(id: i64, payload: StockPayload) -> Self {
        Self {
            id,
            media_id: payload.media_id,
            initial_stock: payload.initial_stock,
            current_stock: payload.current_stock,
        }
    }
}
