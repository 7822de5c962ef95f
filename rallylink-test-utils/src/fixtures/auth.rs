//! Bearer tokens signed with [`TEST_JWT_SECRET`].

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;

use crate::{
    constant::{TEST_ADMIN_USERNAME, TEST_JWT_SECRET},
    error::TestError,
};

/// Sign a token for `sub` with the given role, expiring `expires_in` seconds from now.
///
/// A negative `expires_in` yields an already expired token.
pub fn token(sub: &str, role: &str, expires_in: i64) -> Result<String, TestError> {
    let claims = json!({
        "sub": sub,
        "role": role,
        "exp": Utc::now().timestamp() + expires_in,
    });

    Ok(jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )?)
}

/// Valid 15 minute token for the admin user.
pub fn admin_token() -> Result<String, TestError> {
    token(TEST_ADMIN_USERNAME, "admin", 900)
}

/// `Authorization` header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
