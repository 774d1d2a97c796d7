use async_trait::async_trait;
use postgrest::Postgrest;
use serde_json::{from_str, json, Value};

use crate::models::blog::{Blog, BlogInput};
use crate::store::{BlogStore, StoreError};

const BLOGS_TABLE: &str = "blogs";

/// Hosted document-database backend for the `blogs` collection, reached over
/// its REST interface. Documents carry {title, excerpt, content, author,
/// createdAt, updatedAt}; ids and ordering come from the database.
pub struct RemoteStore {
    client: Postgrest,
}

impl RemoteStore {
    pub fn new(project_url: &str, anon_key: &str) -> Self {
        let client = Postgrest::new(format!("{}/rest/v1", project_url))
            .insert_header("apikey", anon_key)
            // Inserts must echo the stored row back so we can report the
            // assigned id.
            .insert_header("Prefer", "return=representation");
        RemoteStore { client }
    }

    fn id_of(row: &Value) -> Option<String> {
        match &row["id"] {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Mutations ask for the affected rows back; an empty representation
    /// means the id matched nothing.
    fn ensure_row_matched(text: &str, id: &str) -> Result<(), StoreError> {
        let rows: Value = from_str(text).map_err(|e| StoreError::Response(e.to_string()))?;
        if rows.as_array().map(|a| a.is_empty()).unwrap_or(true) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BlogStore for RemoteStore {
    async fn add_blog(&self, input: BlogInput) -> Result<String, StoreError> {
        let now = chrono::Utc::now();
        let body = json!({
            "title": input.title,
            "excerpt": input.excerpt,
            "content": input.content,
            "author": input.author,
            "createdAt": now,
            "updatedAt": now,
        });
        let response = self
            .client
            .from(BLOGS_TABLE)
            .insert(body.to_string())
            .execute()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Response(format!(
                "insert returned status {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Response(e.to_string()))?;
        let rows: Value = from_str(&text).map_err(|e| StoreError::Response(e.to_string()))?;
        rows.get(0)
            .and_then(Self::id_of)
            .ok_or_else(|| StoreError::Response("insert returned no id".to_string()))
    }

    async fn get_blogs(&self) -> Result<Vec<Blog>, StoreError> {
        let response = self
            .client
            .from(BLOGS_TABLE)
            .select("*")
            .order("createdAt.desc")
            .execute()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Response(format!(
                "list returned status {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Response(e.to_string()))?;
        let rows: Vec<Value> = from_str(&text).map_err(|e| StoreError::Response(e.to_string()))?;
        let blogs = rows
            .into_iter()
            .filter_map(|mut row| {
                // ids may come back numeric; normalize before typing the row.
                if let Some(id) = Self::id_of(&row) {
                    row["id"] = Value::String(id);
                }
                serde_json::from_value::<Blog>(row).ok()
            })
            .collect();
        Ok(blogs)
    }

    async fn update_blog(&self, id: &str, input: BlogInput) -> Result<(), StoreError> {
        let body = json!({
            "title": input.title,
            "excerpt": input.excerpt,
            "content": input.content,
            "author": input.author,
            "updatedAt": chrono::Utc::now(),
        });
        let response = self
            .client
            .from(BLOGS_TABLE)
            .eq("id", id)
            .update(body.to_string())
            .execute()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Response(format!(
                "update returned status {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Response(e.to_string()))?;
        Self::ensure_row_matched(&text, id)
    }

    async fn delete_blog(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .from(BLOGS_TABLE)
            .eq("id", id)
            .delete()
            .execute()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Response(format!(
                "delete returned status {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Response(e.to_string()))?;
        Self::ensure_row_matched(&text, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_representation_means_not_found() {
        assert!(matches!(
            RemoteStore::ensure_row_matched("[]", "gone"),
            Err(StoreError::NotFound(_))
        ));
        assert!(RemoteStore::ensure_row_matched(r#"[{"id": 1}]"#, "1").is_ok());
        assert!(matches!(
            RemoteStore::ensure_row_matched("not json", "x"),
            Err(StoreError::Response(_))
        ));
    }
}
