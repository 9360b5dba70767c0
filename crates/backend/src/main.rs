//! Gamedex Backend Server
//!
//! Provides:
//! - REST API for the game catalog
//! - Bulk import from the Android/iOS store feeds
//! - PostgreSQL storage for catalog data

mod db;
mod feeds;
mod routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use deadpool_postgres::{Config, Pool, Runtime};
use std::sync::Arc;
use tokio_postgres::NoTls;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub db_pool: Pool,
    pub http: reqwest::Client,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "gamedex_backend=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection pool
    let mut cfg = Config::new();
    cfg.host = std::env::var("DB_HOST").ok();
    cfg.port = std::env::var("DB_PORT").ok().and_then(|p| p.parse().ok());
    cfg.dbname = std::env::var("DB_NAME").ok();
    cfg.user = std::env::var("DB_USER").ok();
    cfg.password = std::env::var("DB_PASSWORD").ok();

    let db_pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .expect("Failed to create database pool");

    // Test connection and make sure the games table exists
    db::init_schema(&db_pool).await.expect("Failed to initialize database schema");
    tracing::info!("Connected to database");

    let state = Arc::new(AppState {
        db_pool,
        http: reqwest::Client::new(),
    });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // REST API
        .route("/api/games", get(routes::get_games))
        .route("/api/games", post(routes::create_game))
        .route("/api/games/{id}", put(routes::update_game))
        .route("/api/games/{id}", delete(routes::delete_game))
        .route("/api/games/search", post(routes::search_games))
        .route("/api/games/populate", get(routes::populate_games))
        .with_state(state)
        // Frontend assets
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
