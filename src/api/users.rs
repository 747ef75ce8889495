//! User management endpoints

use super::resource::resource_endpoints;
use crate::models::{User, UserPayload};

resource_endpoints! {
    resource = User,
    payload = UserPayload,
    service = users,
    tag = "users",
    collection_path = "/services/users/",
    record_path = "/services/users/{id}",
}
