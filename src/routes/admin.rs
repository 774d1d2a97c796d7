use std::sync::Arc;

use axum::{
    extract::State,
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};

use crate::{
    handlers::{
        admin::{analytics, login},
        blogs::{create_blog, delete_blog, update_blog},
        generate::{draft_post, suggest_titles},
        middleware::admin_middleware,
    },
    utils::state::AppState,
};

/// The admin surface: everything except `/login` sits behind the session
/// token middleware.
pub fn admin_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let gated = Router::new()
        .route("/blogs", post(create_blog))
        .route("/blogs/{id}", put(update_blog).delete(delete_blog))
        .route("/generate/titles", post(suggest_titles))
        .route("/generate/draft", post(draft_post))
        .route("/analytics", get(analytics))
        .layer(from_fn(move |req, next| {
            admin_middleware(State(state.clone()), req, next)
        }));

    Router::new().route("/login", post(login)).merge(gated)
}
