use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::post::NewPost;

/// Body of `POST /api/posts`.
///
/// Only `content` is checked. `imageUrl` and `userId` are read leniently:
/// anything empty, zero or of the wrong type is stored as null.
/// The body must be a JSON object; arrays and scalars are rejected.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CreatePostDTO {
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<i32>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct CreatePostFields {
    #[serde(default)]
    content: Option<String>,
    #[serde(default, deserialize_with = "lenient_image_url")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_user_id")]
    user_id: Option<i32>,
}

impl TryFrom<Map<String, Value>> for CreatePostDTO {
    type Error = serde_json::Error;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: CreatePostFields = serde_json::from_value(Value::Object(body))?;
        Ok(Self {
            content: fields.content,
            image_url: fields.image_url,
            user_id: fields.user_id,
        })
    }
}

impl CreatePostDTO {
    /// Trims `content` and rejects it when nothing is left.
    pub fn into_new_post(self) -> Result<NewPost, String> {
        let content = self.content.as_deref().map(str::trim).unwrap_or_default();
        if content.is_empty() {
            return Err("内容を入力してください".to_string());
        }

        Ok(NewPost {
            content: content.to_string(),
            image_url: self.image_url,
            user_id: self.user_id,
        })
    }
}

fn lenient_image_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(url)) if !url.is_empty() => Some(url),
        _ => None,
    })
}

fn lenient_user_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    // Only the number 0 is falsy; a string like "0" is kept.
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .filter(|id| *id != 0),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageOut {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}
