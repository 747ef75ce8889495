//! Stock endpoints
//!
//! Besides the usual CRUD routes a stock line can be incremented (a copy is
//! returned to the shelf) or decremented (a copy is lent). Both move the
//! stored count by one and answer `405 Method Not Allowed` when the move
//! would leave `0..=initialStock`.

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::put,
    Json, Router,
};

use super::resource::{record_location, resource_endpoints};
use crate::{
    error::AppResult,
    models::{Stock, StockPayload},
    AppState,
};

resource_endpoints! {
    resource = Stock,
    payload = StockPayload,
    service = stocks,
    tag = "stocks",
    collection_path = "/services/stocks/",
    record_path = "/services/stocks/{id}",
}

/// Put one copy back on the shelf
#[utoipa::path(
    put,
    path = "/services/stocks/{id}/increment",
    tag = "stocks",
    params(("id" = i64, Path, description = "Stock ID")),
    responses(
        (status = 200, description = "Current stock incremented", body = Stock),
        (status = 204, description = "No stock with this ID"),
        (status = 405, description = "Every copy is already on the shelf")
    )
)]
pub async fn increment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let stock = state.services.stock_levels.increment(id).await?;
    Ok(adjusted(stock))
}

/// Take one copy off the shelf
#[utoipa::path(
    put,
    path = "/services/stocks/{id}/decrement",
    tag = "stocks",
    params(("id" = i64, Path, description = "Stock ID")),
    responses(
        (status = 200, description = "Current stock decremented", body = Stock),
        (status = 204, description = "No stock with this ID"),
        (status = 405, description = "No copy left on the shelf")
    )
)]
pub async fn decrement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let stock = state.services.stock_levels.decrement(id).await?;
    Ok(adjusted(stock))
}

fn adjusted(stock: Stock) -> Response {
    let location = record_location::<Stock>(stock.id);
    (StatusCode::OK, [(LOCATION, location)], Json(stock)).into_response()
}

pub fn adjustment_routes() -> Router<AppState> {
    Router::new()
        .route("/stocks/:id/increment", put(increment))
        .route("/stocks/:id/decrement", put(decrement))
}
