//! Token Issuer
//!
//! Builds and signs bearer tokens asserting identity and role. Tokens are
//! stateless HS256 JWTs; downstream services verify them against the same
//! secret and there is no revocation before expiry.

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::models::TokenClaims;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

/// Issues signed bearer tokens.
///
/// Key length is enforced by [`AuthConfig::validate`] at startup, not here.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            ttl: Duration::days(config.token_ttl_days),
        }
    }

    /// Sign a token with claims `{name: subject, role, exp: now + ttl}`
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, AuthError> {
        let exp = Utc::now() + self.ttl;

        let claims = TokenClaims {
            name: subject.to_string(),
            role: role.to_string(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&AuthConfig::new(SECRET))
    }

    fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
    }

    #[test]
    fn test_issued_claims_round_trip() {
        let token = issuer().issue("alice", "admin").unwrap();
        let claims = decode_claims(&token, SECRET).unwrap();

        assert_eq!(claims.name, "alice");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_expiry_is_seven_days_out() {
        let token = issuer().issue("alice", "admin").unwrap();
        let claims = decode_claims(&token, SECRET).unwrap();

        let expected = (Utc::now() + Duration::days(7)).timestamp();
        assert!((claims.exp - expected).abs() <= 1);
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = issuer().issue("alice", "admin").unwrap();
        assert!(decode_claims(&token, "ffffffffffffffffffffffffffffffff").is_err());
    }

    #[test]
    fn test_configured_ttl_respected() {
        let mut config = AuthConfig::new(SECRET);
        config.token_ttl_days = 1;
        let token = TokenIssuer::new(&config).issue("alice", "admin").unwrap();
        let claims = decode_claims(&token, SECRET).unwrap();

        let expected = (Utc::now() + Duration::days(1)).timestamp();
        assert!((claims.exp - expected).abs() <= 1);
    }
}
