//! Repository layer: one store per resource, backed by PostgreSQL or memory

pub mod adverts;
pub mod advertisers;
pub mod loans;
pub mod medias;
pub mod memory;
pub mod postgres;
pub mod stocks;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Advert, Advertiser, Loan, Media, Resource, Stock, User},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence contract shared by every resource.
///
/// `insert` and `replace` reject a payload whose natural key belongs to
/// another record with `AppError::Conflict`; the check and the write happen
/// in one step.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    /// All records, ordered by id
    async fn list(&self) -> AppResult<Vec<R>>;

    async fn get(&self, id: i64) -> AppResult<R>;

    async fn find_by_key(&self, key: &R::Key) -> AppResult<Option<R>>;

    /// Store a new record under a fresh id
    async fn insert(&self, payload: &R::Payload) -> AppResult<R>;

    /// Overwrite every field of record `id` except the id itself
    async fn replace(&self, id: i64, payload: &R::Payload) -> AppResult<R>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Atomic moves of the shelf count of a stock line
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockLevels: Send + Sync {
    /// Add `delta` to `current_stock` unless the result leaves
    /// `0..=initial_stock`, in which case `AppError::OutOfBounds` is returned
    /// and nothing is written.
    async fn adjust(&self, id: i64, delta: i32) -> AppResult<Stock>;
}

/// Main repository struct holding one store handle per resource
#[derive(Clone)]
pub struct Repository {
    pub pool: Option<Pool<Postgres>>,
    pub adverts: Arc<dyn Store<Advert>>,
    pub advertisers: Arc<dyn Store<Advertiser>>,
    pub loans: Arc<dyn Store<Loan>>,
    pub medias: Arc<dyn Store<Media>>,
    pub stocks: Arc<dyn Store<Stock>>,
    pub stock_levels: Arc<dyn StockLevels>,
    pub users: Arc<dyn Store<User>>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        let stocks = Arc::new(PgStore::<Stock>::new(pool.clone()));
        Self {
            adverts: Arc::new(PgStore::<Advert>::new(pool.clone())),
            advertisers: Arc::new(PgStore::<Advertiser>::new(pool.clone())),
            loans: Arc::new(PgStore::<Loan>::new(pool.clone())),
            medias: Arc::new(PgStore::<Media>::new(pool.clone())),
            stocks: stocks.clone(),
            stock_levels: stocks,
            users: Arc::new(PgStore::<User>::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository keeping every record in process memory
    pub fn in_memory() -> Self {
        let stocks = Arc::new(MemoryStore::<Stock>::new());
        Self {
            pool: None,
            adverts: Arc::new(MemoryStore::<Advert>::new()),
            advertisers: Arc::new(MemoryStore::<Advertiser>::new()),
            loans: Arc::new(MemoryStore::<Loan>::new()),
            medias: Arc::new(MemoryStore::<Media>::new()),
            stocks: stocks.clone(),
            stock_levels: stocks,
            users: Arc::new(MemoryStore::<User>::new()),
        }
    }

    /// Check that the backing database answers
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
