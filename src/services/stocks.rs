//! Stock shelf moves

use std::sync::Arc;

use crate::{error::AppResult, models::Stock, repository::StockLevels};

#[derive(Clone)]
pub struct StockLevelsService {
    levels: Arc<dyn StockLevels>,
}

impl StockLevelsService {
    pub fn new(levels: Arc<dyn StockLevels>) -> Self {
        Self { levels }
    }

    /// Put one copy back on the shelf
    pub async fn increment(&self, id: i64) -> AppResult<Stock> {
        self.adjust(id, 1).await
    }

    /// Take one copy off the shelf
    pub async fn decrement(&self, id: i64) -> AppResult<Stock> {
        self.adjust(id, -1).await
    }

    async fn adjust(&self, id: i64, delta: i32) -> AppResult<Stock> {
        tracing::info!("Move stock {} by {}", id, delta);
        match self.levels.adjust(id, delta).await {
            Ok(stock) => {
                tracing::info!(
                    "Stock {} of media {} now holds {}/{}",
                    stock.id,
                    stock.media_id,
                    stock.current_stock,
                    stock.initial_stock
                );
                Ok(stock)
            }
            Err(e) => {
                tracing::warn!("Stock {} not moved: {}", id, e);
                Err(e)
            }
        }
    }
}
