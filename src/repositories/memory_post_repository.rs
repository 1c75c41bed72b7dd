use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use futures::future::{self, BoxFuture, FutureExt};

use crate::models::post::{NewPost, Post};
use crate::repositories::post_repository::{PostRepository, RepoError};

/// Vec-backed store used by the handler tests.
#[derive(Default)]
pub struct MemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicUsize,
    failing: AtomicBool,
    delete_calls: AtomicUsize,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later call fails with `RepoError::Other`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// Inserts with a fixed timestamp so ordering can be checked.
    pub fn seed(&self, content: &str, created_at: DateTime<Utc>) -> Post {
        self.insert(
            NewPost {
                content: content.to_string(),
                image_url: None,
                user_id: None,
            },
            created_at,
        )
    }

    fn insert(&self, new_post: NewPost, created_at: DateTime<Utc>) -> Post {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let post = Post {
            id,
            content: new_post.content,
            image_url: new_post.image_url,
            user_id: new_post.user_id,
            created_at,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepoError::Other("connection refused".to_string()));
        }
        Ok(())
    }
}

impl PostRepository for MemoryPostRepository {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Post>, RepoError>> {
        let result = self.check().map(|_| {
            let mut posts = self.posts.lock().unwrap().clone();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            posts
        });
        future::ready(result).boxed()
    }

    fn create(&self, new_post: NewPost) -> BoxFuture<'_, Result<Post, RepoError>> {
        let result = self.check().map(|_| self.insert(new_post, Utc::now()));
        future::ready(result).boxed()
    }

    fn delete(&self, id: i32) -> BoxFuture<'_, Result<(), RepoError>> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let result = self.check().and_then(|_| {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            if posts.len() == before {
                Err(RepoError::NotFound)
            } else {
                Ok(())
            }
        });
        future::ready(result).boxed()
    }
}
