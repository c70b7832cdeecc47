use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::Config, ids::UserId};

/// JWT claims structure containing user information and token metadata.
///
/// The `sub` (subject) field carries the user ID; `exp` and `iat` are the
/// standard timing claims. Tokens are issued by the auth service and verified
/// here with the shared secret.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// The user the token was issued for, if `sub` is a well-formed id.
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

/// Generate a JWT token for the specified user.
///
/// Signed with HS256 using the configured secret, expiring after
/// `jwt.expiration_days`. Production tokens come from the auth service; this
/// is used by tests and local tooling that share the same secret.
///
/// # Errors
/// Returns `jsonwebtoken::errors::Error` if token encoding fails
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_token(
    config: &Config,
    user_id: UserId,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (config.jwt.expiration_days * 86400) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
    )
}

/// Verify and decode a JWT token.
///
/// Validates the token signature and expiration, then returns the decoded claims.
///
/// # Errors
/// Returns `jsonwebtoken::errors::Error` if token is invalid, expired, or malformed
pub fn verify_token(config: &Config, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt.secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, JwtConfig, ServerConfig, TracingConfig};

    fn config_with_secret(secret: &str) -> Config {
        Config {
            tracing: TracingConfig::default(),
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                pool_size: 1,
            },
            server: ServerConfig { port: 0 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_days: 1,
            },
        }
    }

    #[test]
    fn test_generated_token_verifies_to_same_user() {
        let config = config_with_secret("first-secret");
        let user_id = UserId::generate();

        let token = generate_token(&config, user_id).expect("token");
        let claims = verify_token(&config, &token).expect("valid token");

        assert_eq!(claims.user_id(), Some(user_id));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = generate_token(&config_with_secret("first-secret"), UserId::generate())
            .expect("token");

        assert!(verify_token(&config_with_secret("second-secret"), &token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_token(&config_with_secret("first-secret"), "not.a.token").is_err());
    }
}
