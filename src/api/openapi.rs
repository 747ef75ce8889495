//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{adverts, advertisers, auth, health, loans, medias, stocks, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediaLibs API",
        version = "1.0.0",
        description = "Media lending services REST API",
        license(name = "GPL-3.0", url = "https://www.gnu.org/licenses/gpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::authenticate,
        auth::register,
        // Adverts
        adverts::list,
        adverts::fetch,
        adverts::create,
        adverts::replace,
        adverts::remove,
        // Advertisers
        advertisers::list,
        advertisers::fetch,
        advertisers::create,
        advertisers::replace,
        advertisers::remove,
        // Loans
        loans::list,
        loans::fetch,
        loans::create,
        loans::replace,
        loans::remove,
        // Medias
        medias::list,
        medias::fetch,
        medias::create,
        medias::replace,
        medias::remove,
        // Stocks
        stocks::list,
        stocks::fetch,
        stocks::create,
        stocks::replace,
        stocks::remove,
        stocks::increment,
        stocks::decrement,
        // Users
        users::list,
        users::fetch,
        users::create,
        users::replace,
        users::remove,
    ),
    components(
        schemas(
            crate::models::Advert,
            crate::models::AdvertPayload,
            crate::models::Advertiser,
            crate::models::AdvertiserPayload,
            crate::models::Loan,
            crate::models::LoanPayload,
            crate::models::Media,
            crate::models::MediaPayload,
            crate::models::Stock,
            crate::models::StockPayload,
            crate::models::User,
            crate::models::UserPayload,
            crate::models::Role,
            auth::CredentialsRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "adverts", description = "Advert management"),
        (name = "advertisers", description = "Advertiser management"),
        (name = "loans", description = "Loan management"),
        (name = "medias", description = "Media catalog"),
        (name = "stocks", description = "Media stock levels"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
