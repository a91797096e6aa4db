pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod store;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the full application router. The budget routes sit behind the
/// bearer-auth layer; everything else is public.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected (owned data)
        .merge(budget_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public::{plans, questions, routines, token};

    Router::new()
        .route("/jwt", post(token::issue))
        .route(
            "/routines",
            get(routines::list)
                .post(routines::create)
                .delete(routines::clear),
        )
        .route("/plans", get(plans::list).post(plans::create))
        .route("/plans/:id", delete(plans::delete))
        .route("/allquestions", get(questions::list))
}

fn budget_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::budget;

    Router::new()
        .route("/budgettracker", post(budget::create))
        .route("/budgettracker/:uid", get(budget::list))
        // Authentication must run and succeed before any budget handler
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::bearer_auth_middleware,
        ))
}

async fn root() -> &'static str {
    "Student toolkit server is running"
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}
