// src/handlers/post_handlers.rs

use actix_web::{delete, get, post, web, HttpResponse};
use log::{debug, error, info};

use crate::dtos::post_dtos::{CreatePostDTO, MessageOut};
use crate::errors::ApiError;
use crate::repositories::post_repository::RepoError;
use crate::AppState;

const LIST_FAILED: &str = "投稿の取得に失敗しました";
const CREATE_FAILED: &str = "投稿の作成に失敗しました";
const INVALID_ID: &str = "無効なIDです";
const NOT_FOUND: &str = "投稿が見つかりません";
const DELETE_FAILED: &str = "投稿の削除に失敗しました";
const DELETED: &str = "投稿を削除しました";

/// GET /api/posts
#[get("/posts")]
pub async fn list_posts(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    match app_state.posts.list().await {
        Ok(posts) => {
            debug!("Listing {} posts", posts.len());
            Ok(HttpResponse::Ok().json(posts))
        }
        Err(e) => {
            error!("Failed to list posts: {}", e);
            Err(ApiError::Internal(LIST_FAILED.to_string()))
        }
    }
}

/// POST /api/posts
#[post("/posts")]
pub async fn create_post(
    app_state: web::Data<AppState>,
    body: web::Json<CreatePostDTO>,
) -> Result<HttpResponse, ApiError> {
    let new_post = body
        .into_inner()
        .into_new_post()
        .map_err(ApiError::BadRequest)?;

    match app_state.posts.create(new_post).await {
        Ok(post) => {
            info!("Created post {}", post.id);
            Ok(HttpResponse::Created().json(post))
        }
        Err(e) => {
            error!("Failed to create post: {}", e);
            Err(ApiError::Internal(CREATE_FAILED.to_string()))
        }
    }
}

/// DELETE /api/posts/{id}
#[delete("/posts/{id}")]
pub async fn delete_post(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path
        .trim()
        .parse::<i32>()
        .map_err(|_| ApiError::BadRequest(INVALID_ID.to_string()))?;

    match app_state.posts.delete(id).await {
        Ok(()) => {
            info!("Deleted post {}", id);
            Ok(HttpResponse::Ok().json(MessageOut {
                message: DELETED.to_string(),
            }))
        }
        Err(RepoError::NotFound) => Err(ApiError::NotFound(NOT_FOUND.to_string())),
        Err(e) => {
            error!("Failed to delete post {}: {}", id, e);
            Err(ApiError::Internal(DELETE_FAILED.to_string()))
        }
    }
}
