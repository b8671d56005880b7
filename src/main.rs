//! Tagnote - a browser client for a tagged-notes backend.
//!
//! This is the main entry point for the web server. The application is
//! organized into the following modules:
//!
//! - `config`: Environment configuration and capability flags
//! - `api`: HTTP client for the notes backend
//! - `models`: Notes, tags, pages and statistics
//! - `pagination`: Listing state, filters and request sequencing
//! - `form`: Note form and the rich-text surface
//! - `sanitize`: HTML sanitizing and escaping
//! - `calendar`: The 100-day activity calendar
//! - `templates`: HTML/CSS templates and rendering
//! - `handlers`: HTTP route handlers

use std::sync::Arc;

use tagnote::{app_router, AppState, ClientConfig};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tagnote=info".parse()?),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Starting tagnote with config: {:?}", config);

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config)?);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Notes client running at http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
