//! Data models for MediaLibs

pub mod advert;
pub mod advertiser;
pub mod loan;
pub mod media;
pub mod stock;
pub mod user;

use std::fmt::Debug;

use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;

// Re-export commonly used types
pub use advert::{Advert, AdvertPayload};
pub use advertiser::{Advertiser, AdvertiserPayload};
pub use loan::{Loan, LoanPayload};
pub use media::{Media, MediaPayload};
pub use stock::{Stock, StockPayload};
pub use user::{Role, User, UserPayload};

/// A record served under `/api/v1/services/<collection>/`.
///
/// Every resource is a flat record with a store-assigned `id` and one
/// natural key. Creating a record whose natural key is already taken is a
/// conflict, and a replacement keeps the `id` while overwriting every other
/// field with the payload.
pub trait Resource: Debug + Clone + Serialize + Send + Sync + Unpin + 'static {
    /// Body accepted by create and replace requests
    type Payload: Debug + Clone + Validate + Send + Sync + 'static;
    /// Natural key used for duplicate detection
    type Key: Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Singular name used in log lines and error messages
    const NAME: &'static str;
    /// Path segment of the collection, e.g. `medias`
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    fn key(&self) -> Self::Key;

    fn payload_key(payload: &Self::Payload) -> Self::Key;

    /// Build the stored record for `id` from a (prepared) payload
    fn from_payload(id: i64, payload: Self::Payload) -> Self;

    /// Transform a validated payload before it reaches the store
    fn prepare(payload: Self::Payload) -> AppResult<Self::Payload> {
        Ok(payload)
    }
}
