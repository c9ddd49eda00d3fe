use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::UserRole;
use crate::features::auth::validator::Claims;

/// A freshly signed access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Signs HS256 access tokens with the shared secret
pub struct TokenService {
    encoding_key: EncodingKey,
    issuer: String,
    expires_in: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            expires_in: config.token_expiry.as_secs() as i64,
        }
    }

    pub fn issue(&self, user_id: i64, username: &str, role: UserRole) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            username: username.to_string(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now + self.expires_in,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            access_token,
            expires_in: self.expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::JwtValidator;
    use std::time::Duration;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

    fn config(expiry_secs: u64) -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            issuer: "golf-scorekeeper".to_string(),
            token_expiry: Duration::from_secs(expiry_secs),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    #[test]
    fn test_issued_token_validates() {
        let tokens = TokenService::new(&config(3600));
        let issued = tokens.issue(42, "tiger", UserRole::User).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let validator = JwtValidator::new(SECRET, "golf-scorekeeper", Duration::from_secs(0));
        let user = validator.validate_token(&issued.access_token).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.username, "tiger");
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let tokens = TokenService::new(&config(3600));
        let issued = tokens.issue(1, "admin", UserRole::Admin).unwrap();

        let validator = JwtValidator::new(
            "another-secret-that-is-also-32-bytes-long!",
            "golf-scorekeeper",
            Duration::from_secs(0),
        );
        assert!(validator.validate_token(&issued.access_token).is_err());
    }

    #[test]
    fn test_rejects_wrong_issuer() {
        let tokens = TokenService::new(&config(3600));
        let issued = tokens.issue(1, "admin", UserRole::Admin).unwrap();

        let validator = JwtValidator::new(SECRET, "someone-else", Duration::from_secs(0));
        assert!(validator.validate_token(&issued.access_token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "5".to_string(),
            role: UserRole::User,
            username: "late".to_string(),
            iss: "golf-scorekeeper".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let validator = JwtValidator::new(SECRET, "golf-scorekeeper", Duration::from_secs(60));
        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let validator = JwtValidator::new(SECRET, "golf-scorekeeper", Duration::from_secs(0));
        assert!(validator.validate_token("not.a.token").is_err());
    }
}
