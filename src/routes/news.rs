use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::news::{ask_question, default_headlines, headlines, read_article},
    utils::state::AppState,
};

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(default_headlines))
        .route("/{category}", get(headlines))
        .route("/article", post(read_article))
        .route("/ask", post(ask_question))
}
