//! SSR host: renders the Leptos shell and serves the compiled WASM bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game server owns the `/api` routes. This binary only serves the
//! client: server-rendered pages for every client route plus the `/pkg`
//! assets produced by the hydrate build. Browser bundles reach the game
//! server through the compile-time `CAH_API_BASE`.

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] cah_client::config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "cah-client host failed");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn run() -> Result<(), HostError> {
    use std::path::PathBuf;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use cah_client::app::{App, shell};
    use cah_client::config::HostConfig;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    async fn healthz() -> StatusCode {
        StatusCode::OK
    }

    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", host.port)).await?;
    tracing::info!(port = host.port, "cah-client listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The hydrate build is loaded by the browser through `cah_client::hydrate`.
}
