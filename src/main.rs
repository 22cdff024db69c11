//! Pokédex Backend
//!
//! A REST backend that normalizes nested Pokémon documents into SQLite and
//! reassembles them into summary and detail shapes on read.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod mapping;
mod models;
mod query;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pokédex Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!(
        "Page size: {}, body limit: {} bytes, sprite titles: {:?}",
        config.page_size,
        config.body_limit,
        config.sprite_titles
    );

    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));
    tracing::info!("Database ready with {} pokemons", repo.count_pokemons().await?);

    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let v1_routes = Router::new()
        // Pokemons
        .route(
            "/pokemons",
            get(api::list_pokemons)
                .post(api::create_pokemons)
                .delete(api::delete_pokemons),
        )
        .route("/pokemons/{id}", get(api::get_pokemon))
        // Search
        .route("/search", get(api::search_pokemons))
        // Teams
        .route("/teams", get(api::list_teams).post(api::create_team))
        .route(
            "/teams/{id}",
            get(api::get_team)
                .post(api::update_team)
                .delete(api::delete_team),
        )
        // Users
        .route("/users", get(api::list_users).post(api::create_user))
        .route("/users/login", post(api::login))
        .route("/users/{id}", get(api::get_user).delete(api::delete_user));

    let v2_routes = Router::new()
        .route("/pokemons", get(api::list_pokemons_page))
        .route("/pokemons/{id}", get(api::get_pokemon));

    let health_routes = Router::new().route("/health", get(health_check));

    let body_limit = state.config.body_limit;

    Router::new()
        .nest("/api/v1", v1_routes)
        .nest("/api/v2", v2_routes)
        .merge(health_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
