use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde_json::json;

use crate::{
    models::{blog::BlogInput, error::Error},
    store::BlogStore,
    utils::state::AppState,
};

/// Public article list, newest first. This path never fails: a broken store
/// degrades to the fallback contents or an empty list so the page still
/// renders.
pub async fn list_blogs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let blogs = state.store.get_blogs().await.unwrap_or_default();
    (StatusCode::OK, Json(json!({"data": blogs}))).into_response()
}

pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BlogInput>,
) -> Result<impl IntoResponse, Error> {
    payload
        .validate()
        .map_err(|msg| Error::new(StatusCode::BAD_REQUEST, msg))?;

    let id = state.store.add_blog(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({"id": id}))))
}

pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<BlogInput>,
) -> Result<impl IntoResponse, Error> {
    payload
        .validate()
        .map_err(|msg| Error::new(StatusCode::BAD_REQUEST, msg))?;

    state.store.update_blog(&id, payload).await?;
    Ok((StatusCode::OK, Json(json!({"id": id}))))
}

pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    state.store.delete_blog(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
