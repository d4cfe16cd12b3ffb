// src/bin/api_server.rs

use search_params::infra::{config, logging};
use search_params::transport;
use search_params::CodecRegistry;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing(&config::log_filter());

    // --- Codec Registry Initialization ---
    // Every definition is checked here; a duplicated wire key stops startup.
    println!("> Initializing CodecRegistry...");
    let registry = Arc::new(CodecRegistry::with_builtin()?);
    println!("> Registered codecs: {}", registry.list_codecs().join(", "));

    let app_state = transport::http::AppState { registry };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let mut app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()));
    if config::cors_allow_any()? {
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
        app = app.layer(cors);
    }

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C).");
            tracing::info!("api server stopped");
        }
    }

    Ok(())
}
