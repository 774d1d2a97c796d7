use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Fields the compose form submits; ids and timestamps are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogInput {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
}

impl BlogInput {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.excerpt.trim().is_empty() {
            return Err("Excerpt is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required");
        }
        if self.author.trim().is_empty() {
            return Err("Author is required");
        }
        Ok(())
    }
}
