//! BookApp Server - Book Collection REST API

use axum::{
    http::{header, HeaderName},
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookapp_server::{
    api,
    config::AppConfig,
    repository::MemoryStore,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookapp_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BookApp Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create the shared store and services
    let store = MemoryStore::new();
    let services = Services::new(store);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration: any origin, any method, but only the accept and
    // Auth-Key headers (the original posture, reproduced verbatim)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([header::ACCEPT, HeaderName::from_static("auth-key")]);

    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Books
        .route("/books/GetBookById", get(api::books::get_book_by_id))
        .route("/books/GetUserBooks", get(api::books::get_user_books))
        .route("/books/CreateBook", post(api::books::create_book))
        .route("/books/CreateUserBook", post(api::books::create_user_book))
        .route("/books/UpdateBook", put(api::books::update_book))
        .route("/books/DeleteBook", delete(api::books::delete_book))
        // Account
        .route("/account/GetUserById", get(api::users::get_user_by_id))
        .route("/account/CreateUser", post(api::users::create_user))
        .route("/account/UpdateUser", put(api::users::update_user))
        .route("/account/DeleteUser", delete(api::users::delete_user))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
