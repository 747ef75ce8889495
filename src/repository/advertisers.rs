//! Advertisers table mapping

use super::postgres::{PgQueryAs, PgResource};
use crate::models::{Advertiser, AdvertiserPayload};

impl PgResource for Advertiser {
    const TABLE: &'static str = "advertisers";
    const COLUMNS: &'static [&'static str] = &["name", "email", "website"];
    const KEY_FILTER: &'static str = "name = $1";

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q AdvertiserPayload) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(&payload.website)
    }

    fn bind_key<'q>(query: PgQueryAs<'q, Self>, name: &'q String) -> PgQueryAs<'q, Self> {
        query.bind(name)
    }
}
