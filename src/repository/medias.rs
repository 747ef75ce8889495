//! Medias table mapping

use chrono::NaiveDate;

use super::postgres::{PgQueryAs, PgResource};
use crate::models::{Media, MediaPayload};

impl PgResource for Media {
    const TABLE: &'static str = "medias";
    const COLUMNS: &'static [&'static str] = &["name", "description", "release_date", "supports"];
    // Undated editions share one NULL release date
    const KEY_FILTER: &'static str = "name = $1 AND release_date IS NOT DISTINCT FROM $2";

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q MediaPayload) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(payload.release_date)
            .bind(&payload.supports)
    }

    fn bind_key<'q>(
        query: PgQueryAs<'q, Self>,
        key: &'q (String, Option<NaiveDate>),
    ) -> PgQueryAs<'q, Self> {
        query.bind(&key.0).bind(key.1)
    }
}
