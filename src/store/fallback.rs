use async_trait::async_trait;
use tracing::warn;

use crate::models::blog::{Blog, BlogInput};
use crate::store::{BlogStore, MemoryStore, RemoteStore, StoreError};

/// The store the rest of the app talks to. Pairs the remote backend with the
/// in-memory one and applies the availability policy:
///
/// - create/list favor availability: a remote failure falls back to the
///   memory store (create) or degrades to its contents (list) instead of
///   surfacing.
/// - update/delete favor correctness: remote failures surface to the caller
///   and the fallback is never consulted.
///
/// Without a configured remote backend every operation runs in memory.
pub struct FallbackStore {
    remote: Option<RemoteStore>,
    local: MemoryStore,
}

impl FallbackStore {
    pub fn new(remote: Option<RemoteStore>) -> Self {
        FallbackStore {
            remote,
            local: MemoryStore::new(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(None)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }
}

#[async_trait]
impl BlogStore for FallbackStore {
    async fn add_blog(&self, input: BlogInput) -> Result<String, StoreError> {
        match &self.remote {
            Some(remote) => match remote.add_blog(input.clone()).await {
                Ok(id) => Ok(id),
                Err(e) => {
                    warn!("remote blog create failed, keeping post in memory: {e}");
                    self.local.add_blog(input).await
                }
            },
            None => self.local.add_blog(input).await,
        }
    }

    async fn get_blogs(&self) -> Result<Vec<Blog>, StoreError> {
        match &self.remote {
            Some(remote) => match remote.get_blogs().await {
                Ok(blogs) => Ok(blogs),
                Err(e) => {
                    warn!("remote blog list failed, serving fallback contents: {e}");
                    self.local.get_blogs().await
                }
            },
            None => self.local.get_blogs().await,
        }
    }

    async fn update_blog(&self, id: &str, input: BlogInput) -> Result<(), StoreError> {
        match &self.remote {
            Some(remote) => remote.update_blog(id, input).await,
            None => self.local.update_blog(id, input).await,
        }
    }

    async fn delete_blog(&self, id: &str) -> Result<(), StoreError> {
        match &self.remote {
            Some(remote) => remote.delete_blog(id).await,
            None => self.local.delete_blog(id).await,
        }
    }
}
