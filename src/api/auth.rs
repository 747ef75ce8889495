//! Authentication endpoints

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::resource::record_location;
use crate::{error::AppResult, models::User, AppState};

/// Email and password pair
#[derive(Deserialize, ToSchema)]
pub struct CredentialsRequest {
    /// Account email
    pub email: String,
    /// Plain password
    pub password: String,
}

/// Check credentials and return the matching user
#[utoipa::path(
    post,
    path = "/services/auth/authenticate",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Credentials valid", body = User),
        (status = 204, description = "No user with this email"),
        (status = 401, description = "Wrong password")
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .auth
        .authenticate(&request.email, &request.password)
        .await?;
    Ok(Json(user))
}

/// Register a guest account
#[utoipa::path(
    post,
    path = "/services/auth/register",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered, Location points at it", body = User),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> AppResult<Response> {
    let user = state
        .services
        .auth
        .register(request.email, request.password)
        .await?;
    let location = record_location::<User>(user.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(user)).into_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/authenticate", post(authenticate))
        .route("/auth/register", post(register))
}
