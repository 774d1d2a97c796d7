use crate::ai::client::GenerationClient;
use crate::store::FallbackStore;
use crate::utils::config::Config;
use crate::utils::reader_sessions::ReaderSessionStore;

pub struct AppState {
    pub store: FallbackStore,
    pub ai: GenerationClient,
    pub config: Config,
    pub reader_sessions: ReaderSessionStore,
    /// Argon2 hash of the admin passphrase, computed at startup.
    pub admin_password_hash: String,
}
