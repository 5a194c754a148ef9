pub mod api;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post},
        Router,
    };
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.server.socket_addr()?;
    let static_dir = shared::config::get_static_dir(&config);
    tracing::info!("Upstream GraphQL: {}", config.upstream.graphql_url);
    tracing::info!("Serving front end from {}", static_dir.display());

    let state = shared::state::AppState::new(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_DISPOSITION]);

    // SPA: unknown paths get index.html so client-side routes survive a reload
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH ROUTES (PUBLIC)
        // ========================================
        .route("/api/auth/login", post(system::handlers::auth::login))
        .route("/api/auth/session", get(system::handlers::auth::session))
        .route("/api/auth/logout", post(system::handlers::auth::logout))
        // ========================================
        // UPSTREAM RELAYS (SESSION REQUIRED)
        // ========================================
        .route(
            "/graphql",
            post(api::graphql_proxy::relay)
                .layer(middleware::from_fn(system::auth::middleware::require_session)),
        )
        .route(
            "/api/export/:entity",
            get(api::export::relay)
                .layer(middleware::from_fn(system::auth::middleware::require_session)),
        )
        .fallback_service(spa)
        .with_state(state)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
