pub mod config;
pub mod jwt_encode;
pub mod passwords;
pub mod rate_limiter;
pub mod reader_sessions;
pub mod state;
