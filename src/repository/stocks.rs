//! Stocks table mapping and atomic shelf moves

use async_trait::async_trait;

use super::{
    postgres::{PgQueryAs, PgResource, PgStore},
    StockLevels,
};
use crate::{
    error::{AppError, AppResult},
    models::{Stock, StockPayload},
};

impl PgResource for Stock {
    const TABLE: &'static str = "stocks";
    const COLUMNS: &'static [&'static str] = &["media_id", "initial_stock", "current_stock"];
    const KEY_FILTER: &'static str = "media_id = $1";

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q StockPayload) -> PgQueryAs<'q, Self> {
        query
            .bind(payload.media_id)
            .bind(payload.initial_stock)
            .bind(payload.current_stock)
    }

    fn bind_key<'q>(query: PgQueryAs<'q, Self>, media_id: &'q i64) -> PgQueryAs<'q, Self> {
        query.bind(*media_id)
    }
}

#[async_trait]
impl StockLevels for PgStore<Stock> {
    async fn adjust(&self, id: i64, delta: i32) -> AppResult<Stock> {
        // Bound check and write in a single statement; the stocks_bounds_check
        // constraint of the initial migration enforces the same bound
        let adjusted = sqlx::query_as::<_, Stock>(
            r#"
            UPDATE stocks SET current_stock = current_stock + $2
            WHERE id = $1
              AND current_stock + $2 >= 0
              AND current_stock + $2 <= initial_stock
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(stock) = adjusted {
            return Ok(stock);
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stocks WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        if !exists {
            return Err(Self::not_found(id));
        }
        Err(AppError::OutOfBounds(format!(
            "Stock {} cannot move {} copies",
            id, delta
        )))
    }
}
