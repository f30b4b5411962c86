//! In-memory repository implementations.
//!
//! The default backend when `DATABASE_URL` is not set, and the backend
//! used by tests. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use journal_core::domain::{Post, User};
use journal_core::error::RepoError;
use journal_core::ports::{BaseRepository, PostFilter, PostRepository, UserRepository};

/// In-memory user store using a HashMap behind an async RwLock.
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        // Unique username constraint, matching the DB-level index.
        let taken = store
            .values()
            .any(|u| u.username == user.username && u.id != user.id);
        if taken {
            return Err(RepoError::Constraint("Username already taken".to_string()));
        }

        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.username == username).cloned())
    }
}

/// In-memory post store. Writes are last-write-wins, like the document
/// store it stands in for.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(post: &Post, filter: PostFilter) -> bool {
    use journal_core::domain::PostStatus;
    match filter {
        PostFilter::All => true,
        PostFilter::Published => post.status == PostStatus::Published,
        PostFilter::ByAuthor(author) => post.author == author,
        PostFilter::PublishedByAuthor(author) => {
            post.author == author && post.status == PostStatus::Published
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .values()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.views += 1;
        Ok(())
    }
}
