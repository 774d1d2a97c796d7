use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::blogs::list_blogs, utils::state::AppState};

/// Public read surface for articles. Mutations live under the gated admin
/// router.
pub fn blog_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_blogs))
}
