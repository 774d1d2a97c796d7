pub mod blog;
pub mod error;
pub mod jwt;
pub mod news;
