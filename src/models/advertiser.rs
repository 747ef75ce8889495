//! Advertiser model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;

/// Organisation publishing adverts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub website: Option<String>,
}

/// Create or replace advertiser request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserPayload {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
}

impl Resource for Advertiser {
    type Payload = AdvertiserPayload;
    type Key = String;

    const NAME: &'static str = "Advertiser";
    const COLLECTION: &'static str = "advertisers";

    fn id(&self) -> i64 {
        self.id
    }

    fn key(&self) -> String {
        self.name.clone()
    }

    fn payload_key(payload: &AdvertiserPayload) -> String {
        payload.name.clone()
    }

    fn from_payload(id: i64, payload: AdvertiserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            website: payload.website,
        }
    }
}
