//! JWT access-token generation and validation.
//!
//! Tokens are HS256-signed with a symmetric key and must carry the configured
//! issuer and audience. Identity management is external: this module only
//! checks tokens and can mint them for operators and tests.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the caller's identity (e.g. a user name or e-mail).
    pub sub: String,
    /// Issuer, checked against [`JwtConfig::issuer`].
    pub iss: String,
    /// Audience, checked against [`JwtConfig::audience`].
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric HMAC-SHA256 key.
    pub key: String,
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Lifetime of issued tokens in minutes (default: 60).
    pub expiry_mins: i64,
}

/// Default issued-token lifetime in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var           | Required | Default          |
    /// |-------------------|----------|------------------|
    /// | `JWT_KEY`         | **yes**  | --               |
    /// | `JWT_ISSUER`      | no       | `catalog-api`    |
    /// | `JWT_AUDIENCE`    | no       | `catalog-client` |
    /// | `JWT_EXPIRY_MINS` | no       | `60`             |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let key = std::env::var("JWT_KEY").expect("JWT_KEY must be set in the environment");
        assert!(!key.is_empty(), "JWT_KEY must not be empty");

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "catalog-api".into());
        let audience = std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "catalog-client".into());

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            key,
            issuer,
            audience,
            expiry_mins,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation
    }
}

/// Generate an HS256 access token for `subject`.
pub fn generate_access_token(
    subject: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: subject.to_string(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        exp: now + config.expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.key.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks signature, expiration, issuer, and audience.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.key.as_bytes()),
        &config.validation(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use jsonwebtoken::errors::ErrorKind;

    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            key: "test-key-that-is-long-enough-for-hmac".to_string(),
            issuer: "catalog-api".to_string(),
            audience: "catalog-client".to_string(),
            expiry_mins: 15,
        }
    }

    fn sign(claims: &Claims, key: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    fn claims_for(config: &JwtConfig) -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: "ana@catalog.test".to_string(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            exp: now + 600,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token = generate_access_token("ana@catalog.test", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "ana@catalog.test");
        assert_eq!(claims.iss, "catalog-api");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        let mut claims = claims_for(&config);
        // Well beyond the default 60-second leeway.
        claims.exp = chrono::Utc::now().timestamp() - 300;

        let token = sign(&claims, &config.key);
        let err = validate_token(&token, &config).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::ExpiredSignature);
    }

    #[test]
    fn test_wrong_issuer_fails() {
        let config = test_config();
        let mut claims = claims_for(&config);
        claims.iss = "someone-else".to_string();

        let token = sign(&claims, &config.key);
        let err = validate_token(&token, &config).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::InvalidIssuer);
    }

    #[test]
    fn test_wrong_audience_fails() {
        let config = test_config();
        let mut claims = claims_for(&config);
        claims.aud = "another-client".to_string();

        let token = sign(&claims, &config.key);
        let err = validate_token(&token, &config).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::InvalidAudience);
    }

    #[test]
    fn test_different_keys_fail() {
        let config = test_config();
        let token = sign(&claims_for(&config), "a-completely-different-key");

        let err = validate_token(&token, &config).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::InvalidSignature);
    }
}
