//! Bearer token validation for the scrape endpoint.
//!
//! Tokens are issued elsewhere; this module only verifies them and checks that the
//! caller holds the admin role.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Role a caller must hold to trigger scrapes.
pub const ADMIN_ROLE: &str = "admin";

/// Claims carried by an access token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the caller
    pub sub: String,
    pub role: String,
    /// Expiry as a unix timestamp
    pub exp: u64,
}

/// An authenticated caller allowed to run scrapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller {
    pub username: String,
}

/// Seam between the HTTP layer and whatever validates credentials.
pub trait CallerAuthenticator {
    /// Resolves the raw `Authorization` header value to an admin caller.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Token is valid and grants the admin role
    /// - `Err(AuthError::MissingToken)` - No header, or not a bearer token
    /// - `Err(AuthError::InvalidToken)` - Signature, expiry, or claims check failed
    /// - `Err(AuthError::Forbidden)` - Valid token without the admin role
    fn authenticate(&self, authorization: Option<&str>) -> Result<Caller, AuthError>;
}

/// HS256 bearer token authenticator.
#[derive(Clone)]
pub struct JwtAuthenticator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    /// Creates a new instance of [`JwtAuthenticator`]
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

impl CallerAuthenticator for JwtAuthenticator {
    fn authenticate(&self, authorization: Option<&str>) -> Result<Caller, AuthError> {
        let token = bearer_token(authorization).ok_or(AuthError::MissingToken)?;
        let claims = self.decode(token)?;

        if claims.sub.is_empty() {
            return Err(AuthError::InvalidToken("token has no subject".to_string()));
        }

        if claims.role != ADMIN_ROLE {
            return Err(AuthError::Forbidden(claims.sub));
        }

        Ok(Caller {
            username: claims.sub,
        })
    }
}

/// Token part of a `Bearer <token>` header value, scheme matched case-insensitively.
fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    let (scheme, token) = authorization?.trim().split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
