use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_postgres::Row;

/// A row of the `posts` table as sent to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for an insert; `id` and `created_at` come from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
}

impl Post {
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            image_url: row.try_get("image_url")?,
            user_id: row.try_get("user_id")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
