use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod mailer;
mod middleware;
mod state;

use config::Config;
use mailer::Mailer;
use middleware::auth::ApiKeys;
use state::{AdminEmail, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::registrations::handlers::register,
        features::registrations::handlers::register_dependent,
        features::registrations::handlers::get_registration,
        features::payments::handlers::create_payment,
        features::payments::handlers::list_payments,
        features::payments::handlers::update_status,
        features::payments::handlers::submit_proof,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::list_profiles,
        features::accounts::handlers::password_strength,
        features::accounts::handlers::validate_document,
        features::navigation::handlers::resolve,
        features::navigation::handlers::resolve_for_user,
    ),
    components(
        schemas(
            storage::dto::registration::RegisterRequest,
            storage::dto::registration::DependentRegisterRequest,
            storage::dto::registration::RegisterResponse,
            storage::dto::registration::RegistrationResponse,
            storage::dto::payment::CreatePaymentRequest,
            storage::dto::payment::PaymentResponse,
            storage::dto::payment::UpdatePaymentStatusRequest,
            storage::dto::payment::SubmitProofRequest,
            storage::dto::payment::SubmitProofResponse,
            storage::dto::account::PasswordStrengthRequest,
            storage::dto::account::DocumentRequest,
            storage::dto::account::DocumentResponse,
            storage::dto::event::EventResponse,
            storage::dto::event::ProfileWithFee,
            storage::models::User,
            storage::models::Event,
            storage::models::Profile,
            storage::models::ProfileCode,
            storage::models::RegistrationFee,
            storage::models::RoleAssignment,
            storage::models::Registration,
            storage::models::Payment,
            storage::services::enrollment::RegistrationCategory,
            storage::services::password::PasswordStrength,
            storage::services::password::StrengthLabel,
            features::navigation::services::NavigationRequest,
            features::navigation::services::NavigationResponse,
            features::navigation::services::NavEntryResponse,
        )
    ),
    tags(
        (name = "registrations", description = "Event registration and profile/fee resolution"),
        (name = "payments", description = "Payments and proof submission"),
        (name = "events", description = "Public event and profile endpoints"),
        (name = "accounts", description = "Document and password checks"),
        (name = "navigation", description = "Role-based navigation resolution"),
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

    tracing::info!("Starting Olimpíadas registration API");

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

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let mailer = Mailer::new(config.mailer_url.clone(), config.mailer_api_key.clone());

    let state = AppState {
        db,
        mailer,
        admin_email: AdminEmail(config.admin_email.clone()),
    };

    let app = Router::new()
        .nest("/api/registrations", features::registrations::routes(api_keys.clone()))
        .nest("/api/payments", features::payments::routes(api_keys))
        .nest("/api/events", features::events::routes())
        .nest("/api/accounts", features::accounts::routes())
        .nest("/api/navigation", features::navigation::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
