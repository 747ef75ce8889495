//! Media model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;

/// Catalog entry (book, film, album...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Physical supports the media is available on (e.g. "dvd", "blu-ray")
    pub supports: Vec<String>,
}

/// Create or replace media request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub supports: Vec<String>,
}

impl Resource for Media {
    type Payload = MediaPayload;
    /// Two editions may share a name when their release dates differ
    type Key = (String, Option<NaiveDate>);

    const NAME: &'static str = "Media";
    const COLLECTION: &'static str = "medias";

    fn id(&self) -> i64 {
        self.id
    }

    fn key(&self) -> Self::Key {
        (self.name.clone(), self.release_date)
    }

    fn payload_key(payload: &MediaPayload) -> Self::Key {
        (payload.name.clone(), payload.release_date)
    }

    fn from_payload(id: i64, payload: MediaPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            release_date: payload.release_date,
            supports: payload.supports,
        }
    }
}
