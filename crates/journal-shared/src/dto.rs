//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire to match the front end's post
//! shape (`imageUrl`, `authorName`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use journal_core::domain::{Post, PostStatus, User};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Defaults to `published` when omitted.
    #[serde(default)]
    pub status: Option<PostStatus>,
}

/// Partial update to a post. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
}

/// Request to append a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// A user's public information - never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

/// Public author profile: the user plus their published posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfileResponse {
    pub user: UserResponse,
    pub posts: Vec<Post>,
}

/// Response to an image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
