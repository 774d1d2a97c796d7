use serde::{Deserialize, Serialize};

/// Claims carried by the admin session token. There is a single shared admin
/// identity, so `sub` is always "admin"; the expiry is what matters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}
