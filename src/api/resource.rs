//! Handlers shared by every resource endpoint
//!
//! A missing record answers `204 No Content` (see `AppError::NotFound`), an
//! empty collection as well. Writes answer with a `Location` header: the
//! record for create and replace, the collection for delete.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::SERVICES_BASE;
use crate::{error::AppResult, models::Resource, services::ResourceService};

/// `Location` of a collection, e.g. `/api/v1/services/medias/`
pub fn collection_location<R: Resource>() -> String {
    format!("{}/{}/", SERVICES_BASE, R::COLLECTION)
}

/// `Location` of one record, e.g. `/api/v1/services/medias/3`
pub fn record_location<R: Resource>(id: i64) -> String {
    format!("{}/{}/{}", SERVICES_BASE, R::COLLECTION, id)
}

pub async fn list<R: Resource>(service: &ResourceService<R>) -> AppResult<Response> {
    let records = service.list().await?;
    if records.is_empty() {
        tracing::info!("List of {} records is empty", R::NAME);
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(records).into_response())
}

pub async fn fetch<R: Resource>(service: &ResourceService<R>, id: i64) -> AppResult<Response> {
    let record = service.get(id).await?;
    Ok(Json(record).into_response())
}

pub async fn create<R: Resource>(
    service: &ResourceService<R>,
    payload: R::Payload,
) -> AppResult<Response> {
    let record = service.create(payload).await?;
    let location = record_location::<R>(record.id());
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(record)).into_response())
}

pub async fn replace<R: Resource>(
    service: &ResourceService<R>,
    id: i64,
    payload: R::Payload,
) -> AppResult<Response> {
    let record = service.update(id, payload).await?;
    Ok((StatusCode::OK, [(LOCATION, record_location::<R>(id))], Json(record)).into_response())
}

pub async fn remove<R: Resource>(service: &ResourceService<R>, id: i64) -> AppResult<Response> {
    service.delete(id).await?;
    Ok((StatusCode::OK, [(LOCATION, collection_location::<R>())]).into_response())
}

/// Declare the documented CRUD handlers of one resource and its `routes()`.
///
/// Handlers pull the resource service named by `service` out of
/// `AppState::services` and delegate to the generic handlers above.
macro_rules! resource_endpoints {
    (
        resource = $resource:ident,
        payload = $payload:ident,
        service = $service:ident,
        tag = $tag:tt,
        collection_path = $collection_path:tt,
        record_path = $record_path:tt $(,)?
    ) => {
        /// List every record
        #[utoipa::path(
            get,
            path = $collection_path,
            tag = $tag,
            operation_id = concat!("list_", $tag),
            responses(
                (status = 200, description = "All records", body = Vec<$resource>),
                (status = 204, description = "No record stored")
            )
        )]
        pub async fn list(
            axum::extract::State(state): axum::extract::State<$crate::AppState>,
        ) -> $crate::error::AppResult<axum::response::Response> {
            $crate::api::resource::list(&state.services.$service).await
        }

        /// Get one record by ID
        #[utoipa::path(
            get,
            path = $record_path,
            tag = $tag,
            operation_id = concat!("get_", $tag),
            params(("id" = i64, Path, description = "Record ID")),
            responses(
                (status = 200, description = "Record found", body = $resource),
                (status = 204, description = "No record with this ID")
            )
        )]
        pub async fn fetch(
            axum::extract::State(state): axum::extract::State<$crate::AppState>,
            axum::extract::Path(id): axum::extract::Path<i64>,
        ) -> $crate::error::AppResult<axum::response::Response> {
            $crate::api::resource::fetch(&state.services.$service, id).await
        }

        /// Create a record
        #[utoipa::path(
            post,
            path = $collection_path,
            tag = $tag,
            operation_id = concat!("create_", $tag),
            request_body = $payload,
            responses(
                (status = 201, description = "Record created, Location points at it", body = $resource),
                (status = 400, description = "Invalid payload"),
                (status = 409, description = "Natural key already taken")
            )
        )]
        pub async fn create(
            axum::extract::State(state): axum::extract::State<$crate::AppState>,
            axum::Json(payload): axum::Json<$payload>,
        ) -> $crate::error::AppResult<axum::response::Response> {
            $crate::api::resource::create(&state.services.$service, payload).await
        }

        /// Replace every field of a record
        #[utoipa::path(
            put,
            path = $record_path,
            tag = $tag,
            operation_id = concat!("replace_", $tag),
            params(("id" = i64, Path, description = "Record ID")),
            request_body = $payload,
            responses(
                (status = 200, description = "Record replaced, Location points at it", body = $resource),
                (status = 204, description = "No record with this ID"),
                (status = 400, description = "Invalid payload"),
                (status = 409, description = "Natural key taken by another record")
            )
        )]
        pub async fn replace(
            axum::extract::State(state): axum::extract::State<$crate::AppState>,
            axum::extract::Path(id): axum::extract::Path<i64>,
            axum::Json(payload): axum::Json<$payload>,
        ) -> $crate::error::AppResult<axum::response::Response> {
            $crate::api::resource::replace(&state.services.$service, id, payload).await
        }

        /// Delete a record
        #[utoipa::path(
            delete,
            path = $record_path,
            tag = $tag,
            operation_id = concat!("delete_", $tag),
            params(("id" = i64, Path, description = "Record ID")),
            responses(
                (status = 200, description = "Record deleted, Location points at the collection"),
                (status = 204, description = "No record with this ID")
            )
        )]
        pub async fn remove(
            axum::extract::State(state): axum::extract::State<$crate::AppState>,
            axum::extract::Path(id): axum::extract::Path<i64>,
        ) -> $crate::error::AppResult<axum::response::Response> {
            $crate::api::resource::remove(&state.services.$service, id).await
        }

        /// Routes of this resource, relative to the services base path
        pub fn routes() -> axum::Router<$crate::AppState> {
            use axum::routing::get;

            let collection = format!("/{}", <$resource as $crate::models::Resource>::COLLECTION);
            axum::Router::new()
                .route(&collection, get(list).post(create))
                .route(&format!("{}/", collection), get(list).post(create))
                .route(
                    &format!("{}/:id", collection),
                    get(fetch).put(replace).delete(remove),
                )
        }
    };
}

pub(crate) use resource_endpoints;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Media, Stock};

    #[test]
    fn test_locations() {
        assert_eq!(record_location::<Media>(3), "/api/v1/services/medias/3");
        assert_eq!(collection_location::<Stock>(), "/api/v1/services/stocks/");
    }
}
