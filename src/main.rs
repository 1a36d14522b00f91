//! Moon Shell entry point.
//!
//! With the `server` feature this serves server-rendered pages over HTTP.
//! Without it (the WASM build) it mounts the app in the browser, replacing
//! the server-rendered markup.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use moon_shell::{api, config};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "moon_shell=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Moon Shell v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app = api::router(api::AppState::new(config))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    moon_shell::app::clear_server_markup();
    dioxus::launch(moon_shell::app::ClientApp);
}
