use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Feed filter for listing posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    /// Every post regardless of status.
    All,
    /// Published posts only - the public feed.
    Published,
    /// Every post by a specific author, drafts included.
    ByAuthor(Uuid),
    /// Published posts by a specific author - public profile view.
    PublishedByAuthor(Uuid),
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// List posts matching the filter, newest first by `created_at`.
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Best-effort view counter bump. Not exactly-once: retries and
    /// concurrent calls each add one.
    async fn increment_views(&self, id: Uuid) -> Result<(), RepoError>;
}
