//! Axum application setup.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::error::ApiError;
use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Origins the embedded UI is served from.
#[derive(Clone)]
struct LocalOrigins(Arc<Vec<HeaderValue>>);

impl LocalOrigins {
    fn new(port: u16) -> Self {
        let origins = ["localhost", "127.0.0.1"]
            .iter()
            .filter_map(|host| HeaderValue::from_str(&format!("http://{}:{}", host, port)).ok())
            .collect();
        Self(Arc::new(origins))
    }
}

/// Refuse requests made by pages on any other origin. Requests without an
/// `Origin` header (curl, scripts) pass.
async fn reject_foreign_origin(
    State(origins): State<LocalOrigins>,
    request: Request,
    next: Next,
) -> Response {
    let foreign = request
        .headers()
        .get(header::ORIGIN)
        .filter(|origin| !origins.0.contains(*origin))
        .cloned();

    if let Some(origin) = foreign {
        log::warn!("refused {} {} from origin {:?}", request.method(), request.uri(), origin);
        return ApiError::Forbidden("cross-origin requests are not allowed".to_string())
            .into_response();
    }
    next.run(request).await
}

/// Create the Axum router with all routes for a server on `port`.
pub fn create_router(state: AppState, port: u16) -> Router {
    let origins = LocalOrigins::new(port);
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.0.iter().cloned()))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/state", get(handlers::get_state))
        // Creation view
        .route("/notes", post(handlers::set_notes))
        .route("/file", post(handlers::load_file))
        .route("/format", post(handlers::format))
        // Review view
        .route("/flip", post(handlers::flip))
        .route("/known", post(handlers::mark_known))
        .route("/unknown", post(handlers::mark_unknown))
        .route("/restart", post(handlers::restart))
        .route("/new-deck", post(handlers::new_deck))
        // API key
        .route(
            "/credential",
            get(handlers::get_credential).put(handlers::put_credential),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .layer(middleware::from_fn_with_state(origins, reject_foreign_origin))
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state, port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    log::info!("server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
