use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::blog::{Blog, BlogInput};
use crate::store::{BlogStore, StoreError};

struct StoredBlog {
    // Creation sequence number; createdAt alone can tie on fast writes.
    seq: u64,
    blog: Blog,
}

/// In-process store scoped to the running instance. Used standalone when the
/// remote database is not configured, and as the fallback when it fails.
/// Contents are lost on restart and never sync back to the remote store.
#[derive(Default)]
pub struct MemoryStore {
    blogs: DashMap<String, StoredBlog>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn add_blog(&self, input: BlogInput) -> Result<String, StoreError> {
        let now = Utc::now();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = format!("mock-{}-{}", now.timestamp_millis(), seq);
        let blog = Blog {
            id: id.clone(),
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            author: input.author,
            created_at: now,
            updated_at: now,
        };
        self.blogs.insert(id.clone(), StoredBlog { seq, blog });
        Ok(id)
    }

    async fn get_blogs(&self) -> Result<Vec<Blog>, StoreError> {
        let mut entries: Vec<(u64, Blog)> = self
            .blogs
            .iter()
            .map(|entry| (entry.seq, entry.blog.clone()))
            .collect();
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(entries.into_iter().map(|(_, blog)| blog).collect())
    }

    async fn update_blog(&self, id: &str, input: BlogInput) -> Result<(), StoreError> {
        let mut entry = self
            .blogs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let blog = &mut entry.blog;
        blog.title = input.title;
        blog.excerpt = input.excerpt;
        blog.content = input.content;
        blog.author = input.author;
        blog.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_blog(&self, id: &str) -> Result<(), StoreError> {
        self.blogs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
