use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::{
    ai::{client::GenerationTask, parser, prompts},
    models::{
        error::Error,
        news::{NewsCategory, NewsItem},
    },
    utils::state::AppState,
};

const SESSION_HEADER: &str = "x-session-id";

#[derive(Deserialize)]
pub struct ArticleRequest {
    pub headline: String,
    pub summary: String,
    pub category: NewsCategory,
    /// Carried over from the headline batch when present, so the detail view
    /// shows the item the reader clicked rather than a re-minted one.
    pub id: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

pub async fn default_headlines(state: State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    headlines_for(state, NewsCategory::default()).await
}

pub async fn headlines(
    state: State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let category = NewsCategory::from_str(&category)
        .map_err(|_| Error::new(StatusCode::BAD_REQUEST, "Unknown news category"))?;
    headlines_for(state, category).await
}

/// One generation call per category visit; the batch replaces whatever list
/// the client showed before, nothing is merged.
async fn headlines_for(
    State(state): State<Arc<AppState>>,
    category: NewsCategory,
) -> Result<impl IntoResponse, Error> {
    let raw = state
        .ai
        .complete(GenerationTask::NewsHeadlines, &prompts::news_headlines(category))
        .await
        .map_err(|e| {
            warn!("headline generation failed for {category}: {e}");
            Error::new(StatusCode::BAD_GATEWAY, "Failed to generate news headlines.")
        })?;

    let outcome = parser::news_items(&raw);
    if outcome.is_degraded() {
        warn!("headline batch for {category} came back malformed, placeholders substituted");
    }
    let items: Vec<NewsItem> = outcome
        .into_inner()
        .into_iter()
        .enumerate()
        .map(|(i, fields)| NewsItem::new(category, i, fields.headline, fields.summary))
        .collect();

    Ok((
        StatusCode::OK,
        Json(json!({"category": category, "items": items})),
    ))
}

/// Generate the full article for a headline and make it the session's open
/// article. Selecting a new article clears the previous Q&A history.
pub async fn read_article(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<ArticleRequest>,
) -> Result<impl IntoResponse, Error> {
    let session = reader_session(&state, &headers)?;
    let Ok(mut session) = session.try_lock_owned() else {
        return Err(busy());
    };

    let raw = state
        .ai
        .complete(
            GenerationTask::NewsDetail,
            &prompts::news_detail(&payload.headline, &payload.summary, payload.category),
        )
        .await
        .map_err(|e| {
            warn!("news detail generation failed: {e}");
            Error::new(
                StatusCode::BAD_GATEWAY,
                "Failed to generate detailed news content.",
            )
        })?;

    let mut item = match (payload.id, payload.published_at) {
        (Some(id), Some(published_at)) => NewsItem {
            id,
            headline: payload.headline,
            summary: payload.summary,
            category: payload.category,
            published_at,
            full_content: None,
        },
        _ => NewsItem::new(payload.category, 0, payload.headline, payload.summary),
    };
    item.full_content = Some(parser::plain_text(&raw));

    session.select_article(item.clone());

    Ok((StatusCode::OK, Json(json!({"article": item}))))
}

/// Answer a reader question about the open article. A failed generation call
/// still appends one exchange, with the apologetic fallback as its answer.
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<AskRequest>,
) -> Result<impl IntoResponse, Error> {
    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "Question is required"));
    }

    let session = reader_session(&state, &headers)?;
    let Ok(mut session) = session.try_lock_owned() else {
        return Err(busy());
    };

    let (headline, content) = match session.selected() {
        Some(item) => match &item.full_content {
            Some(content) => (item.headline.clone(), content.clone()),
            None => {
                return Err(Error::new(
                    StatusCode::BAD_REQUEST,
                    "No article is open for this session",
                ))
            }
        },
        None => {
            return Err(Error::new(
                StatusCode::BAD_REQUEST,
                "No article is open for this session",
            ))
        }
    };

    let result = state
        .ai
        .complete(
            GenerationTask::NewsAnswer,
            &prompts::news_answer(&question, &content, &headline),
        )
        .await
        .map(|raw| parser::plain_text(&raw));
    if let Err(e) = &result {
        warn!("question answering failed: {e}");
    }

    let exchange = session.record_exchange(&question, result);

    Ok((
        StatusCode::OK,
        Json(json!({
            "exchange": exchange,
            "history": session.history(),
        })),
    ))
}

fn reader_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Arc<tokio::sync::Mutex<crate::utils::reader_sessions::ReaderSession>>, Error> {
    let id = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::new(StatusCode::BAD_REQUEST, "Missing x-session-id header"))?;
    Ok(state.reader_sessions.session(id))
}

fn busy() -> Error {
    Error::new(
        StatusCode::CONFLICT,
        "A request for this session is already in progress",
    )
}
