//! Advert endpoints

use super::resource::resource_endpoints;
use crate::models::{Advert, AdvertPayload};

resource_endpoints! {
    resource = Advert,
    payload = AdvertPayload,
    service = adverts,
    tag = "adverts",
    collection_path = "/services/adverts/",
    record_path = "/services/adverts/{id}",
}
