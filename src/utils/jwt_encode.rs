use jsonwebtoken::{EncodingKey, Header};

use crate::models::jwt::Claims;

/// Admin sessions expire after an hour; re-entering the passphrase renews.
pub const ADMIN_SESSION_SECS: usize = 60 * 60;

pub fn admin_token(secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "admin".to_string(),
        iat: now,
        exp: now + ADMIN_SESSION_SECS,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn issued_token_decodes_with_expiry() {
        let token = admin_token("test-secret").unwrap();
        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, "admin");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, ADMIN_SESSION_SECS);
    }
}
