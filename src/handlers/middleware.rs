use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use http::{header, StatusCode};
use jsonwebtoken::{decode, DecodingKey, Validation};
use std::sync::Arc;

use crate::{
    models::{error::Error, jwt::Claims},
    utils::state::AppState,
};

/// Gate for the admin surface: requires a valid, unexpired session token
/// issued by `/admin/login`.
pub async fn admin_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, Error> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or((StatusCode::UNAUTHORIZED, "Missing Bearer token"))?;

    let decoding_key = DecodingKey::from_secret(state.config.jwt_secret.as_bytes());
    let decoded = decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|e| {
        Error::new(
            StatusCode::UNAUTHORIZED,
            &format!("Token validation failed: {}", e),
        )
    })?;

    req.extensions_mut().insert(decoded.claims);

    Ok(next.run(req).await)
}
