//! Media endpoints

use super::resource::resource_endpoints;
use crate::models::{Media, MediaPayload};

resource_endpoints! {
    resource = Media,
    payload = MediaPayload,
    service = medias,
    tag = "medias",
    collection_path = "/services/medias/",
    record_path = "/services/medias/{id}",
}
