// src/repositories/post_repository.rs

use deadpool_postgres::{Pool, PoolError};
use futures::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::models::post::{NewPost, Post};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("post not found")]
    NotFound,
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Db(#[from] tokio_postgres::Error),
    #[error("other: {0}")]
    Other(String),
}

/// Storage for posts. Handlers only see this trait so tests can swap the backend.
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    fn list(&self) -> BoxFuture<'_, Result<Vec<Post>, RepoError>>;

    fn create(&self, new_post: NewPost) -> BoxFuture<'_, Result<Post, RepoError>>;

    /// Fails with `RepoError::NotFound` when no row has this id.
    fn delete(&self, id: i32) -> BoxFuture<'_, Result<(), RepoError>>;
}

const SELECT_COLUMNS: &str = "id, content, image_url, user_id, created_at";

/// `PostRepository` over the shared Postgres pool.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: Pool,
}

impl PgPostRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Post>, RepoError>> {
        async move {
            let client = self.pool.get().await?;
            let sql = format!(
                "SELECT {} FROM posts ORDER BY created_at DESC, id DESC",
                SELECT_COLUMNS
            );
            let rows = client.query(sql.as_str(), &[]).await?;
            let posts = rows
                .iter()
                .map(Post::from_row)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(posts)
        }
        .boxed()
    }

    fn create(&self, new_post: NewPost) -> BoxFuture<'_, Result<Post, RepoError>> {
        async move {
            let client = self.pool.get().await?;
            let sql = format!(
                "INSERT INTO posts (content, image_url, user_id) VALUES ($1, $2, $3) RETURNING {}",
                SELECT_COLUMNS
            );
            let row = client
                .query_one(
                    sql.as_str(),
                    &[&new_post.content, &new_post.image_url, &new_post.user_id],
                )
                .await?;
            Ok(Post::from_row(&row)?)
        }
        .boxed()
    }

    fn delete(&self, id: i32) -> BoxFuture<'_, Result<(), RepoError>> {
        async move {
            let client = self.pool.get().await?;
            let affected = client
                .execute("DELETE FROM posts WHERE id = $1", &[&id])
                .await?;
            if affected == 0 {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }
        .boxed()
    }
}
