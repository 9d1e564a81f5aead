//! REST API error types
//!
//! Every internal failure collapses to a generic 500 so vendor errors and
//! database details never leak to clients; the specific cause is logged.

use caddie_clients::ClientError;
use caddie_core::CoreError;
use caddie_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required credential or connection string is absent (500).
    /// The response message names the missing piece so operators can spot
    /// it from client-side reports alone.
    #[error("{what} not configured {location}")]
    NotConfigured {
        what: &'static str,
        location: ErrorLocation,
    },

    /// Internal server error (500), reported to clients with a fixed
    /// generic message.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_configured(what: &'static str) -> Self {
        ApiError::NotConfigured {
            what,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let message = match self {
            ApiError::NotConfigured { what, .. } => format!("{} not configured.", what),
            ApiError::Internal { .. } => "Error processing your request.".to_string(),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse { message }),
        )
            .into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Internal {
            message: format!("Database operation failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert vendor client errors to API errors
impl From<ClientError> for ApiError {
    #[track_caller]
    fn from(e: ClientError) -> Self {
        ApiError::Internal {
            message: format!("Vendor API call failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Internal {
            message: format!("Domain error: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
