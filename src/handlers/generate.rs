use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::{
    ai::{
        client::GenerationTask,
        parser,
        prompts::{self, Length, Tone},
    },
    models::error::Error,
    utils::state::AppState,
};

#[derive(Deserialize)]
pub struct TitlesRequest {
    pub topic: String,
}

#[derive(Deserialize)]
pub struct DraftRequest {
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    /// The suggestion the admin picked, if any; otherwise a title is
    /// synthesized from the topic.
    pub title: Option<String>,
}

/// Up to five title candidates for the compose form. Any non-blank line the
/// model returns counts as a candidate.
pub async fn suggest_titles(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TitlesRequest>,
) -> Result<impl IntoResponse, Error> {
    let topic = payload.topic.trim();
    if topic.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "Topic is required"));
    }

    let raw = state
        .ai
        .complete(GenerationTask::TitleSuggestions, &prompts::title_suggestions(topic))
        .await
        .map_err(|e| {
            warn!("title generation failed: {e}");
            Error::new(
                StatusCode::BAD_GATEWAY,
                "Failed to generate title suggestions.",
            )
        })?;

    let suggestions = parser::title_suggestions(&raw);
    Ok((StatusCode::OK, Json(json!({"suggestions": suggestions}))))
}

/// Compose a full draft: generate the body, then derive the excerpt from its
/// opening. The second call depends on the first's output, so they run
/// strictly in sequence.
pub async fn draft_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DraftRequest>,
) -> Result<impl IntoResponse, Error> {
    let topic = payload.topic.trim();
    if topic.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "Topic is required"));
    }

    let content_raw = state
        .ai
        .complete(
            GenerationTask::BlogContent,
            &prompts::blog_content(topic, payload.tone, payload.length),
        )
        .await
        .map_err(|e| {
            warn!("content generation failed: {e}");
            Error::new(
                StatusCode::BAD_GATEWAY,
                "Failed to generate blog content. Please check your API key and try again.",
            )
        })?;
    let content = parser::plain_text(&content_raw);

    let excerpt_raw = state
        .ai
        .complete(GenerationTask::Excerpt, &prompts::excerpt(&content))
        .await
        .map_err(|e| {
            warn!("excerpt generation failed: {e}");
            Error::new(StatusCode::BAD_GATEWAY, "Failed to generate excerpt.")
        })?;
    let excerpt = parser::plain_text(&excerpt_raw);

    let title = payload
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("{}: A Sustainable Technology Perspective", topic));

    Ok((
        StatusCode::OK,
        Json(json!({
            "title": title,
            "content": content,
            "excerpt": excerpt,
        })),
    ))
}
