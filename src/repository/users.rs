//! Users table mapping

use super::postgres::{PgQueryAs, PgResource};
use crate::models::{User, UserPayload};

impl PgResource for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["email", "password", "role"];
    const KEY_FILTER: &'static str = "email = $1";

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q UserPayload) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.email)
            .bind(&payload.password)
            .bind(payload.role)
    }

    fn bind_key<'q>(query: PgQueryAs<'q, Self>, email: &'q String) -> PgQueryAs<'q, Self> {
        query.bind(email)
    }
}
