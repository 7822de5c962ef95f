use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::auth::AuthError,
    model::app::AppState,
    service::auth::{Caller, CallerAuthenticator},
};

/// Admin caller resolved from the `Authorization` header.
///
/// Only reads the request head, so listing it before a body extractor rejects an
/// unauthenticated request before its body is parsed.
pub struct AdminCaller(pub Caller);

impl FromRequestParts<AppState> for AdminCaller {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        state.authenticator.authenticate(authorization).map(Self)
    }
}
