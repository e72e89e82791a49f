//! Internship program management backend.
//!
//! The backend follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **DTO Layer** (`dto/`) - Request/response shapes exposed over HTTP
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token parsing and authorization guards
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, verifier, directory client)
//! - **Startup** (`startup`) - Database, logging, and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Directory** (`directory/`) - Client for the external identity provider

mod config;
mod controller;
mod data;
mod directory;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use crate::{
    config::Config, directory::DirectoryClient, error::AppError, middleware::auth::TokenVerifier,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();

    let token_verifier = TokenVerifier::new(&config.jwt_secret, &config.jwt_issuer);
    let directory = DirectoryClient::new(
        http_client,
        config.directory_api_url.clone(),
        config.directory_api_token.clone(),
    );

    let state = AppState::new(
        db,
        token_verifier,
        directory,
        config.directory_admin_group.clone(),
        config.directory_mentor_group.clone(),
    );

    let app = router::router(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.listen_addr, e)))?;

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
