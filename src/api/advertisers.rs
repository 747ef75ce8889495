//! Advertiser endpoints

use super::resource::resource_endpoints;
use crate::models::{Advertiser, AdvertiserPayload};

resource_endpoints! {
    resource = Advertiser,
    payload = AdvertiserPayload,
    service = advertisers,
    tag = "advertisers",
    collection_path = "/services/advertisers/",
    record_path = "/services/advertisers/{id}",
}
