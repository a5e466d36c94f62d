pub mod handlers;

use crate::{Result, chat::ChatHandler, config::Config, llm::OpenAiClient};
use axum::{Router, routing::any};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Builds the application router: the chat endpoint plus static file serving
/// for everything else.
pub fn app(config: &Config) -> Result<Router> {
    let client = OpenAiClient::new(config.llm.clone())?;
    let handler = ChatHandler::new(Arc::new(client));

    let app_state = handlers::AppState {
        handler: Arc::new(handler),
    };

    Ok(Router::new()
        .route("/api/chat", any(handlers::chat))
        .with_state(app_state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http()))
}

pub async fn run(config: Config) -> Result<()> {
    let app = app(&config)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
