use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token in Authorization header")]
    MissingToken,
    #[error("Could not validate credentials: {0}")]
    InvalidToken(String),
    #[error("User {0:?} does not have permission to run scrapes")]
    Forbidden(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                let mut response =
                    error_response(StatusCode::UNAUTHORIZED, "Could not validate credentials");
                response.headers_mut().insert(
                    axum::http::header::WWW_AUTHENTICATE,
                    axum::http::HeaderValue::from_static("Bearer"),
                );
                response
            }
            Self::Forbidden(ref subject) => {
                tracing::debug!(subject = %subject, "{}", self);

                error_response(StatusCode::FORBIDDEN, "Not enough permissions")
            }
        }
    }
}
