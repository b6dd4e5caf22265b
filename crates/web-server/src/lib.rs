use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get},
    Router,
};
use database::BookStore;
use jsonwebtoken::DecodingKey;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod auth;
pub mod error;
pub mod handlers;
pub mod params;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub store: Arc<dyn BookStore>,
    pub decoding_key: DecodingKey,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>, jwt_secret: &[u8]) -> Self {
        Self {
            store,
            decoding_key: DecodingKey::from_secret(jwt_secret),
        }
    }
}

/// Builds the application router. Split out from [`run_server`] so tests
/// can drive it without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    let protected = Router::new()
        .route("/jwt_test", get(handlers::jwt_test))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/books/get_by_rating/:rating",
            get(handlers::get_by_rating),
        )
        .route(
            "/books/delete_by_range/:min/:max",
            delete(handlers::delete_by_range),
        )
        .merge(protected)
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024)) // Set a 1MB body limit
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app(state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
