//! Persistence for blog records: one `BlogStore` contract with a remote
//! document-database backend and an in-process fallback, so callers never
//! branch on which backend is live.

pub mod fallback;
pub mod memory;
pub mod remote;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::blog::{Blog, BlogInput};

pub use fallback::FallbackStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),

    #[error("unexpected store response: {0}")]
    Response(String),

    #[error("blog {0} not found")]
    NotFound(String),
}

#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Persist a new blog, assigning id and timestamps. Returns the id.
    async fn add_blog(&self, input: BlogInput) -> Result<String, StoreError>;

    /// All blogs, newest first by creation time.
    async fn get_blogs(&self) -> Result<Vec<Blog>, StoreError>;

    async fn update_blog(&self, id: &str, input: BlogInput) -> Result<(), StoreError>;

    async fn delete_blog(&self, id: &str) -> Result<(), StoreError>;
}
