use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto};
use crate::features::auth::password::verify_password_blocking;
use crate::features::auth::services::TokenService;
use crate::features::users::services::UserService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Unknown email and wrong password produce the same error
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let valid = verify_password_blocking(dto.password, user.password.clone()).await?;
        if !valid {
            tracing::debug!("Failed login attempt for user {}", user.user_id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let issued = self.tokens.issue(user.user_id, &user.user_name, user.role)?;
        tracing::info!("User logged in: id={}", user.user_id);

        Ok(AuthResponseDto {
            access_token: issued.access_token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
            user: user.into(),
        })
    }
}
