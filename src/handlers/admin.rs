use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::{
    store::BlogStore,
    utils::{jwt_encode::admin_token, passwords::verify_password, state::AppState},
};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Exchange the shared admin passphrase for a short-lived session token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    if !verify_password(&payload.password, &state.admin_password_hash) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid password"})),
        )
            .into_response();
    }

    match admin_token(&state.config.jwt_secret) {
        Ok(token) => (StatusCode::OK, Json(json!({"token": token}))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Summary numbers for the analytics dashboard: post count, distinct
/// authors, and the five most recent posts. Reads through the same
/// never-failing list path as the public page.
pub async fn analytics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let blogs = state.store.get_blogs().await.unwrap_or_default();

    let total_blogs = blogs.len();
    let mut authors: Vec<&str> = blogs.iter().map(|b| b.author.as_str()).collect();
    authors.sort_unstable();
    authors.dedup();
    let recent: Vec<_> = blogs.iter().take(5).collect();

    (
        StatusCode::OK,
        Json(json!({
            "totalBlogs": total_blogs,
            "uniqueAuthors": authors.len(),
            "recentBlogs": recent,
        })),
    )
        .into_response()
}
