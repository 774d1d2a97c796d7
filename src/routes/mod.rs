pub mod admin;
pub mod blogs;
pub mod news;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    ai::client::GenerationClient,
    routes::{admin::admin_routes, blogs::blog_routes, news::news_routes},
    store::{FallbackStore, RemoteStore},
    utils::{
        config::Config, passwords::hash_password, reader_sessions::ReaderSessionStore,
        state::AppState,
    },
};

pub async fn make_app() -> Result<Router, Box<dyn Error>> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();
    info!("Configuration loaded successfully");

    let http_client = reqwest::Client::new();

    let remote = match (&config.supabase_project_url, &config.supabase_anon_key) {
        (Some(url), Some(key)) => {
            info!("Content store backed by remote document database");
            Some(RemoteStore::new(url, key))
        }
        _ => {
            info!("No document database configured, content store runs in memory");
            None
        }
    };
    let store = FallbackStore::new(remote);

    let mut ai = GenerationClient::new(http_client, config.openrouter_api_key.clone());
    if let Some(model) = &config.generation_model {
        ai = ai.with_model(model.clone());
    }
    info!("Generation client initialized successfully");

    let admin_password_hash = hash_password(&config.admin_password)?;

    let state = Arc::new(AppState {
        store,
        ai,
        config,
        reader_sessions: ReaderSessionStore::new(),
        admin_password_hash,
    });

    let app = Router::new()
        .route("/", get(health_check))
        .nest("/blogs", blog_routes())
        .nest("/news", news_routes())
        .nest("/admin", admin_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    Ok(app)
}

async fn health_check() -> impl IntoResponse {
    return (StatusCode::OK, Json(json!({"message": "Green IQ backend"}))).into_response();
}
