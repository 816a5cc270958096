//! Service entry point: configuration, logging, listener.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wikitext_md::adapters::http::{wikitext_router, WikitextAppState};
use wikitext_md::adapters::wikitext::ParseWikiTextConverter;
use wikitext_md::application::ConvertDocumentHandler;
use wikitext_md::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_level)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let converter = Arc::new(ParseWikiTextConverter::new());
    let convert = Arc::new(ConvertDocumentHandler::new(converter));
    let app = wikitext_router(WikitextAppState { convert })
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr();
    tracing::info!(%addr, "wikitext conversion service listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
