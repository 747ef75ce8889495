//! Generic PostgreSQL store

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, Pool, Postgres,
};

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::Resource,
};

pub type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Table mapping of a resource.
///
/// `COLUMNS` lists the payload columns in the order `bind_payload` binds
/// them; `KEY_FILTER` is the `WHERE` clause matching a natural key, with the
/// placeholders `bind_key` fills.
pub trait PgResource: Resource + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const KEY_FILTER: &'static str;

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q Self::Payload) -> PgQueryAs<'q, Self>;

    fn bind_key<'q>(query: PgQueryAs<'q, Self>, key: &'q Self::Key) -> PgQueryAs<'q, Self>;
}

#[derive(Clone)]
pub struct PgStore<R> {
    pub(super) pool: Pool<Postgres>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: PgResource> PgStore<R> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    pub(super) fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::NAME, id))
    }

    /// Turn a unique violation into a conflict on the natural key
    fn map_write_error(error: sqlx::Error, payload: &R::Payload) -> AppError {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(format!(
                "{} {:?} already exists",
                R::NAME,
                R::payload_key(payload)
            )),
            _ => AppError::Database(error),
        }
    }
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|idx| format!("${}", idx))
        .collect::<Vec<_>>()
        .join(", ")
}

fn assignments(columns: &[&str]) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| format!("{} = ${}", column, idx + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl<R: PgResource> Store<R> for PgStore<R> {
    async fn list(&self) -> AppResult<Vec<R>> {
        let query = format!("SELECT * FROM {} ORDER BY id", R::TABLE);
        let rows = sqlx::query_as::<_, R>(&query).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<R> {
        let query = format!("SELECT * FROM {} WHERE id = $1", R::TABLE);
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn find_by_key(&self, key: &R::Key) -> AppResult<Option<R>> {
        let query = format!("SELECT * FROM {} WHERE {}", R::TABLE, R::KEY_FILTER);
        let row = R::bind_key(sqlx::query_as::<_, R>(&query), key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, payload: &R::Payload) -> AppResult<R> {
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders(R::COLUMNS.len())
        );
        R::bind_payload(sqlx::query_as::<_, R>(&query), payload)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, payload))
    }

    async fn replace(&self, id: i64, payload: &R::Payload) -> AppResult<R> {
        let query = format!(
            "UPDATE {} SET {} WHERE id = ${} RETURNING *",
            R::TABLE,
            assignments(R::COLUMNS),
            R::COLUMNS.len() + 1
        );
        R::bind_payload(sqlx::query_as::<_, R>(&query), payload)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, payload))?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let query = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
