use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::model::{AuthenticatedUser, UserRole};
use crate::core::error::AppError;

/// Claims carried by the access tokens this service issues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per RFC 7519
    pub sub: String,
    pub role: UserRole,
    pub username: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str, issuer: &str, leeway: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Auth("Invalid subject claim".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}
