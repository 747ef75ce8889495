//! Adverts table mapping

use super::postgres::{PgQueryAs, PgResource};
use crate::models::{Advert, AdvertPayload};

impl PgResource for Advert {
    const TABLE: &'static str = "adverts";
    const COLUMNS: &'static [&'static str] = &["title", "content", "advert_date", "advertiser_id"];
    const KEY_FILTER: &'static str = "title = $1";

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q AdvertPayload) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.title)
            .bind(&payload.content)
            .bind(payload.advert_date)
            .bind(payload.advertiser_id)
    }

    fn bind_key<'q>(query: PgQueryAs<'q, Self>, title: &'q String) -> PgQueryAs<'q, Self> {
        query.bind(title)
    }
}
