use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Publication state of a post. Drafts are visible only to their author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Published
    }
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => Err(DomainError::Validation(format!(
                "Unknown post status: {other}"
            ))),
        }
    }
}

/// A comment embedded in a post. Append-only; comments are never edited
/// or deleted and are not addressable outside their post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Post entity - an authored article with a markdown body, embedded
/// comments, and like/view counters.
///
/// `author_name` is a snapshot of the username at creation time and is
/// intentionally never re-synced when the author renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author: Uuid,
    pub author_name: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub likes: Vec<Uuid>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied by the post's author. `author` and
/// `author_name` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<PostStatus>,
}

impl Post {
    /// Create a new post. Fails when the title or content is empty or
    /// whitespace-only.
    pub fn new(
        author: Uuid,
        author_name: String,
        title: String,
        content: String,
        image_url: Option<String>,
        status: PostStatus,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        if content.trim().is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            author,
            author_name,
            status,
            views: 0,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Owner-only mutation guard: true when the acting user is the author.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author == user_id
    }

    /// Merge patch fields and stamp `updated_at`. Fails when a patched
    /// title or content would become empty.
    pub fn apply(&mut self, patch: PostPatch) -> Result<(), DomainError> {
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(DomainError::Validation("Title is required".to_string()));
            }
            self.title = title;
        }
        if let Some(content) = patch.content {
            if content.trim().is_empty() {
                return Err(DomainError::Validation("Content is required".to_string()));
            }
            self.content = content;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = if image_url.is_empty() {
                None
            } else {
                Some(image_url)
            };
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Toggle a like: remove the user id if present, append it otherwise.
    /// Each user id appears at most once. Returns the new liked state.
    pub fn toggle_like(&mut self, user_id: Uuid) -> bool {
        if let Some(pos) = self.likes.iter().position(|id| *id == user_id) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user_id);
            true
        }
    }

    /// Append a comment. Any authenticated user may comment, including
    /// the author. Fails on empty text.
    pub fn add_comment(
        &mut self,
        author_id: Uuid,
        author_name: String,
        text: String,
    ) -> Result<(), DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation(
                "Comment text is required".to_string(),
            ));
        }
        self.comments.push(Comment {
            id: Uuid::new_v4(),
            author_id,
            author_name,
            text,
            created_at: Utc::now(),
        });
        Ok(())
    }
}
