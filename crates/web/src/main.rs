use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::registrations::handlers::calculate_price,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::get_registration,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::override_registration_status,
        features::registrations::handlers::bulk_delete_registrations,
        features::coupons::handlers::validate_coupon,
        features::coupons::handlers::create_coupon,
        features::coupons::handlers::list_coupons,
        features::coupons::handlers::update_coupon,
        features::coupons::handlers::delete_coupon,
        features::categories::handlers::get_catalog,
        features::categories::handlers::get_catalog_admin,
        features::categories::handlers::update_prices,
        features::payments::handlers::create_preference,
        features::payments::handlers::verify_payment,
        features::payments::handlers::webhook,
        features::checkin::handlers::scan_qr,
        features::checkin::handlers::check_in,
        features::checkin::handlers::attendance_stats,
        features::platform::handlers::get_platform_config,
        features::platform::handlers::update_platform_config,
        features::platform::handlers::get_event_payment_config,
        features::platform::handlers::update_event_payment_config,
        features::platform::handlers::get_commission_stats,
        features::platform::handlers::list_registrations,
        features::news::handlers::list_news,
        features::news::handlers::create_news,
        features::news::handlers::delete_news,
    ),
    components(
        schemas(
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::PriceQuoteRequest,
            storage::dto::registration::PriceQuoteResponse,
            storage::dto::registration::RegistrationResponse,
            storage::dto::registration::RegistrationAdminResponse,
            storage::dto::registration::RegistrationListResponse,
            storage::dto::registration::UpdateStatusRequest,
            storage::dto::registration::BulkDeleteRequest,
            storage::dto::coupon::ValidateCouponRequest,
            storage::dto::coupon::ValidateCouponResponse,
            storage::dto::coupon::CreateCouponRequest,
            storage::dto::coupon::UpdateCouponRequest,
            storage::dto::coupon::CouponResponse,
            storage::dto::coupon::CouponListResponse,
            storage::dto::category::CategoryCatalogResponse,
            storage::dto::category::PriceEntryUpdate,
            storage::dto::category::UpdatePricesRequest,
            storage::dto::checkin::QrScanRequest,
            storage::dto::checkin::QrScanResponse,
            storage::dto::checkin::CheckInRequest,
            storage::dto::checkin::AttendanceStatsResponse,
            storage::dto::platform::PlatformConfigResponse,
            storage::dto::platform::UpdatePlatformConfigRequest,
            storage::dto::platform::EventPaymentConfigResponse,
            storage::dto::platform::UpdateEventPaymentConfigRequest,
            storage::dto::platform::CommissionStatsResponse,
            storage::dto::news::CreateNewsRequest,
            storage::dto::news::NewsResponse,
            storage::dto::news::NewsListResponse,
            features::payments::handlers::CreatePreferenceRequest,
            storage::models::Registration,
            storage::models::Coupon,
            storage::models::News,
            storage::models::CategoryPriceEntry,
        )
    ),
    tags(
        (name = "registrations", description = "Pilot registration and pricing endpoints"),
        (name = "coupons", description = "Discount coupon endpoints"),
        (name = "categories", description = "Category catalog endpoints"),
        (name = "payments", description = "Payment gateway endpoints"),
        (name = "checkin", description = "Venue check-in endpoints"),
        (name = "platform", description = "Platform operator endpoints"),
        (name = "news", description = "News endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Championship registration API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting championship registration API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(db, config.clone());

    let api = Router::new()
        .route("/", get(root))
        .merge(features::registrations::routes::routes(state.clone()))
        .merge(features::coupons::routes::routes(state.clone()))
        .merge(features::categories::routes::routes(state.clone()))
        .merge(features::payments::routes::routes())
        .merge(features::checkin::routes::routes(state.clone()))
        .merge(features::platform::routes::routes(state.clone()))
        .merge(features::news::routes::routes(state.clone()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
