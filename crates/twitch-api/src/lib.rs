//! Twitch REST API client library.
//!
//! Provides typed access to the legacy Kraken (v5) API and the Helix API
//! through one request pipeline: request building, status classification,
//! and a lenient JSON projection onto typed models.

pub mod client;
pub mod config;
pub mod decode;
pub mod form;
pub mod helix;
pub mod kraken;
pub mod request;

pub use client::Client;
pub use config::{Config, Dialect};
pub use helix::Helix;
pub use kraken::Kraken;
pub use request::RequestOptions;

use serde::{Deserialize, Serialize};

/// Unified error type for the twitch-api crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("{operation} requires {field}")]
    InvalidInput {
        operation: &'static str,
        field: &'static str,
    },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Authentication required: access token not specified")]
    AuthRequired,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Twitch API error (status {status}): {message}")]
    HttpStatus {
        status: u16,
        message: String,
        detail: Option<ErrorDetail>,
    },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Form encoding failed: {0}")]
    FormEncode(String),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

impl TwitchError {
    /// HTTP status code carried by an [`TwitchError::HttpStatus`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body returned by both API generations, e.g.
/// `{"error":"Not Found","status":404,"message":"..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub error: String,
    pub status: u16,
    pub message: String,
}
