//! Typed REST bindings for the Journal API.
//!
//! Each call is an independent request; there is no cross-request
//! ordering or cancellation. Failures surface as [`ApiError`] for the
//! UI to present.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use thiserror::Error;
use uuid::Uuid;

use journal_core::domain::Post;
use journal_shared::ErrorResponse;
use journal_shared::dto::{
    AuthorProfileResponse, CreateCommentRequest, CreatePostRequest, LoginRequest, LoginResponse,
    SignupRequest, UpdatePostRequest, UploadResponse,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
}

/// REST client bound to one API base URL, e.g. `http://localhost:8080/api`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an [`ApiError::Api`] carrying the
    /// server's `{ "message": ... }` body.
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.message)
            .unwrap_or_else(|_| "Request failed".to_string());
        Err(ApiError::Api { status, message })
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let body = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/signup")).json(&body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/login")).json(&body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// The public feed: published posts, newest first.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.http.get(self.url("/posts")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// All of the caller's posts, drafts included.
    pub async fn fetch_my_posts(&self, token: &str) -> Result<Vec<Post>, ApiError> {
        let response = self
            .http
            .get(self.url("/posts/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn fetch_post(&self, id: Uuid) -> Result<Post, ApiError> {
        let response = self.http.get(self.url(&format!("/posts/{id}"))).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn author_profile(&self, author: Uuid) -> Result<AuthorProfileResponse, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/posts/author/{author}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_post(
        &self,
        token: &str,
        request: &CreatePostRequest,
    ) -> Result<Post, ApiError> {
        let response = self
            .http
            .post(self.url("/posts"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_post(
        &self,
        token: &str,
        id: Uuid,
        request: &UpdatePostRequest,
    ) -> Result<Post, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/posts/{id}")))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_post(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/posts/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Toggle the caller's like; returns the updated post.
    pub async fn toggle_like(&self, token: &str, id: Uuid) -> Result<Post, ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/posts/{id}/like")))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn add_comment(&self, token: &str, id: Uuid, text: &str) -> Result<Post, ApiError> {
        let body = CreateCommentRequest {
            text: text.to_string(),
        };
        let response = self
            .http
            .post(self.url(&format!("/posts/{id}/comments")))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Best-effort view counter bump. Errors are logged, not surfaced:
    /// a lost count is acceptable, a blocked page load is not.
    pub async fn record_view(&self, id: Uuid) {
        let result = self
            .http
            .post(self.url(&format!("/posts/{id}/view")))
            .send()
            .await;
        if let Err(e) = result {
            tracing::debug!(post_id = %id, "View count request failed: {e}");
        }
    }

    pub async fn upload_image(
        &self,
        token: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("image", part);
        let response = self
            .http
            .post(self.url("/upload"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
