//! Post handlers - the CRUD surface plus likes, comments, and views.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use journal_core::domain::{Post, PostPatch};
use journal_core::ports::PostFilter;
use journal_shared::MessageResponse;
use journal_shared::dto::{
    AuthorProfileResponse, CreateCommentRequest, CreatePostRequest, UpdatePostRequest,
    UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn load_post(state: &AppState, id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))
}

/// GET /api/posts - the public feed: published posts, newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list(PostFilter::Published).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/me - all of the caller's posts, drafts included.
pub async fn my_posts(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list(PostFilter::ByAuthor(identity.user_id))
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/author/{id} - public profile plus published posts.
pub async fn author_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let author_id = path.into_inner();

    let user = state
        .users
        .find_by_id(author_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    let posts = state
        .posts
        .list(PostFilter::PublishedByAuthor(author_id))
        .await?;

    Ok(HttpResponse::Ok().json(AuthorProfileResponse {
        user: UserResponse::from(&user),
        posts,
    }))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts - create a post; status defaults to published.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // author_name is a snapshot of the username at creation time
    let post = Post::new(
        identity.user_id,
        identity.username,
        req.title,
        req.content,
        req.image_url,
        req.status.unwrap_or_default(),
    )?;

    let saved = state.posts.save(post).await?;
    tracing::debug!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /api/posts/{id} - owner-only partial update.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = load_post(&state, path.into_inner()).await?;

    if !post.is_owned_by(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    let req = body.into_inner();
    post.apply(PostPatch {
        title: req.title,
        content: req.content,
        image_url: req.image_url,
        status: req.status,
    })?;

    let saved = state.posts.save(post).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/posts/{id} - owner-only.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;

    if !post.is_owned_by(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(post.id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}

/// POST /api/posts/{id}/like - toggle the caller's like.
pub async fn toggle_like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let mut post = load_post(&state, path.into_inner()).await?;

    post.toggle_like(identity.user_id);

    let saved = state.posts.save(post).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// POST /api/posts/{id}/comments - any authenticated user may comment.
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let mut post = load_post(&state, path.into_inner()).await?;

    post.add_comment(identity.user_id, identity.username, body.into_inner().text)?;

    let saved = state.posts.save(post).await?;
    Ok(HttpResponse::Created().json(saved))
}

/// POST /api/posts/{id}/view - unauthenticated, best-effort counter.
/// One call adds one view; retries double-count.
pub async fn record_view(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.increment_views(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use journal_core::domain::PostStatus;
    use journal_infra::{InMemoryPostRepository, InMemoryUserRepository};

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        })
    }

    fn identity(username: &str) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: username.to_string(),
        }
    }

    async fn seed_post(state: &AppState, author: &Identity) -> Post {
        let post = Post::new(
            author.user_id,
            author.username.clone(),
            "Hi".to_string(),
            "World".to_string(),
            None,
            PostStatus::Published,
        )
        .unwrap();
        state.posts.save(post).await.unwrap()
    }

    #[actix_web::test]
    async fn test_create_post_snapshots_author_name() {
        let state = test_state();
        let amy = identity("amy");

        let response = create_post(
            state.clone(),
            amy.clone(),
            web::Json(CreatePostRequest {
                title: "Hi".to_string(),
                content: "World".to_string(),
                image_url: None,
                status: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let posts = state.posts.list(PostFilter::Published).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, amy.user_id);
        assert_eq!(posts[0].author_name, "amy");
        assert_eq!(posts[0].status, PostStatus::Published);
    }

    #[actix_web::test]
    async fn test_create_post_rejects_blank_title() {
        let state = test_state();

        let result = create_post(
            state,
            identity("amy"),
            web::Json(CreatePostRequest {
                title: "  ".to_string(),
                content: "World".to_string(),
                image_url: None,
                status: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[actix_web::test]
    async fn test_update_by_non_owner_forbidden_and_unchanged() {
        let state = test_state();
        let amy = identity("amy");
        let post = seed_post(&state, &amy).await;

        let result = update_post(
            state.clone(),
            identity("bob"),
            web::Path::from(post.id),
            web::Json(UpdatePostRequest {
                title: Some("hijacked".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Forbidden)));

        let unchanged = state.posts.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "Hi");
    }

    #[actix_web::test]
    async fn test_delete_by_non_owner_forbidden_and_still_retrievable() {
        let state = test_state();
        let amy = identity("amy");
        let post = seed_post(&state, &amy).await;

        let result = delete_post(state.clone(), identity("bob"), web::Path::from(post.id)).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
        assert!(state.posts.find_by_id(post.id).await.unwrap().is_some());

        // The author can delete
        let response = delete_post(state.clone(), amy, web::Path::from(post.id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.posts.find_by_id(post.id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_like_toggle_round_trip() {
        let state = test_state();
        let amy = identity("amy");
        let post = seed_post(&state, &amy).await;
        let liker = identity("bob");

        toggle_like(state.clone(), liker.clone(), web::Path::from(post.id))
            .await
            .unwrap();
        let liked = state.posts.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(liked.likes, vec![liker.user_id]);

        toggle_like(state.clone(), liker, web::Path::from(post.id))
            .await
            .unwrap();
        let unliked = state.posts.find_by_id(post.id).await.unwrap().unwrap();
        assert!(unliked.likes.is_empty());
    }

    #[actix_web::test]
    async fn test_empty_comment_rejected() {
        let state = test_state();
        let amy = identity("amy");
        let post = seed_post(&state, &amy).await;

        let result = add_comment(
            state.clone(),
            identity("bob"),
            web::Path::from(post.id),
            web::Json(CreateCommentRequest {
                text: "   ".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        let unchanged = state.posts.find_by_id(post.id).await.unwrap().unwrap();
        assert!(unchanged.comments.is_empty());
    }

    #[actix_web::test]
    async fn test_update_missing_post_not_found() {
        let state = test_state();
        let result = update_post(
            state,
            identity("amy"),
            web::Path::from(Uuid::new_v4()),
            web::Json(UpdatePostRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
