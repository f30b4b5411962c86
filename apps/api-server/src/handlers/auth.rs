//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use journal_core::domain::User;
use journal_core::ports::{PasswordService, TokenService};
use journal_shared::MessageResponse;
use journal_shared::dto::{LoginRequest, LoginResponse, SignupRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/signup
pub async fn signup(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    // Check if the username is taken
    if state
        .users
        .find_by_username(&req.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    // Hash password - the plaintext is never stored
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.username, password_hash);
    state.users.save(user).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("User registered")))
}

/// POST /api/login
///
/// Unknown username and wrong password both produce the same 401 body,
/// so the response never reveals whether an account exists.
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user_id: user.id,
        username: user.username,
        expires_in: token_service.expiration_seconds(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::http::StatusCode;
    use journal_infra::{Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository,
        JwtConfig, JwtTokenService};

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        })
    }

    fn services() -> (
        web::Data<Arc<dyn TokenService>>,
        web::Data<Arc<dyn PasswordService>>,
    ) {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        }));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        (web::Data::new(tokens), web::Data::new(passwords))
    }

    fn credentials(username: &str, password: &str) -> web::Json<SignupRequest> {
        web::Json(SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[actix_web::test]
    async fn test_signup_then_login() {
        let state = test_state();
        let (tokens, passwords) = services();

        let response = signup(state.clone(), passwords.clone(), credentials("amy", "pw1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = login(
            state,
            tokens,
            passwords,
            web::Json(LoginRequest {
                username: "amy".to_string(),
                password: "pw1".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_duplicate_username_conflict() {
        let state = test_state();
        let (_, passwords) = services();

        signup(state.clone(), passwords.clone(), credentials("amy", "pw1"))
            .await
            .unwrap();
        let result = signup(state, passwords, credentials("amy", "other")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[actix_web::test]
    async fn test_login_failures_are_uniform() {
        let state = test_state();
        let (tokens, passwords) = services();

        signup(state.clone(), passwords.clone(), credentials("amy", "pw1"))
            .await
            .unwrap();

        // Wrong password and unknown user produce the same error
        let wrong_password = login(
            state.clone(),
            tokens.clone(),
            passwords.clone(),
            web::Json(LoginRequest {
                username: "amy".to_string(),
                password: "nope".to_string(),
            }),
        )
        .await;
        let unknown_user = login(
            state,
            tokens,
            passwords,
            web::Json(LoginRequest {
                username: "ghost".to_string(),
                password: "pw1".to_string(),
            }),
        )
        .await;

        assert!(matches!(wrong_password, Err(AppError::Unauthorized)));
        assert!(matches!(unknown_user, Err(AppError::Unauthorized)));
    }
}
