//! Advert model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;

/// Advert published by an advertiser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    pub id: i64,
    /// Headline, unique across adverts
    pub title: String,
    pub content: Option<String>,
    pub advert_date: Option<NaiveDate>,
    pub advertiser_id: Option<i64>,
}

/// Create or replace advert request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertPayload {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub content: Option<String>,
    pub advert_date: Option<NaiveDate>,
    pub advertiser_id: Option<i64>,
}

impl Resource for Advert {
    type Payload = AdvertPayload;
    type Key = String;

    const NAME: &'static str = "Advert";
    const COLLECTION: &'static str = "adverts";

    fn id(&self) -> i64 {
        self.id
    }

    fn key(&self) -> String {
        self.title.clone()
    }

    fn payload_key(payload: &AdvertPayload) -> String {
        payload.title.clone()
    }

    fn from_payload(id: i64, payload: AdvertPayload) -> Self {
        Self {
            id,
            title: payload.title,
            content: payload.content,
            advert_date: payload.advert_date,
            advertiser_id: payload.advertiser_id,
        }
    }
}
