use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A field the stage requires is absent or blank; raised before any network call.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// Stage number outside of 1 through 6.
    #[error("Invalid stage: {0}, expected a stage between 1 and 6")]
    InvalidStage(i64),
    /// The catalog responded with a non-success status.
    #[error("Upstream request to {url} failed with status {status}")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Transport level failure (DNS, timeout, refused connection, body read).
    #[error("Upstream request to {url} failed: {source}")]
    UpstreamFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// An extraction selector failed to parse, indicates a bug in a stage rule.
    #[error("Invalid extraction selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingField(_) | Self::InvalidStage(_) => {
                tracing::debug!("Rejected stage request: {}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UpstreamStatus { .. } | Self::UpstreamFetch { .. } => {
                tracing::warn!("{}", self);

                error_response(StatusCode::BAD_GATEWAY, self.to_string())
            }
            Self::Selector { .. } => InternalServerError(self).into_response(),
        }
    }
}
