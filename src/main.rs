use std::sync::Arc;

use student_toolkit_api::auth::TokenService;
use student_toolkit_api::config::AppConfig;
use student_toolkit_api::state::AppState;
use student_toolkit_api::store::PgStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting student toolkit API in {:?} mode",
        config.environment
    );

    // The store client must be ready before the listener accepts requests;
    // no handler can observe a half-initialized connection.
    let store = PgStore::connect(&config.database).await?;
    store.ensure_schema().await?;

    let tokens = TokenService::new(
        config.security.jwt_secret.clone(),
        config.security.token_expiry_hours,
    );
    let state = AppState::new(Arc::new(store), tokens);

    let app = student_toolkit_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Student toolkit API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
