use crate::application_port::ResolveError;
use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, body) = if let Some(err) = err.find::<ApiError>() {
        (err.status(), ErrorBody::from(err))
    } else if err.find::<reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            ErrorBody::message("Content-Length required"),
        )
    } else if err.find::<reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorBody::message("Payload too large"),
        )
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, ErrorBody::message("Not found"))
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorBody::message("Method not allowed"),
        )
    } else {
        warn!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::message(format!("Unhandled error: {:?}", err)),
        )
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
            details: None,
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        let details = match err {
            ApiError::VkApi(details) => Some(details.clone()),
            _ => None,
        };
        ErrorBody {
            error: err.to_string(),
            details,
        }
    }
}

/// Errors as the browser sees them. `Display` is the `error` field.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("user_id and access_token are required")]
    MissingCredentials,
    #[error("VK API Error")]
    VkApi(Value),
    #[error("User not found in VK API response")]
    UserNotFound,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiError {
        warn!("Internal error: {}", error);
        ApiError::Internal(error.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredentials => StatusCode::BAD_REQUEST,
            ApiError::VkApi(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiError {}

impl From<ResolveError> for ApiError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::MissingCredentials => ApiError::MissingCredentials,
            ResolveError::Upstream(details) => ApiError::VkApi(details),
            ResolveError::NotFound => ApiError::UserNotFound,
            e @ (ResolveError::VkApi(_) | ResolveError::Malformed(_)) => ApiError::internal(e),
        }
    }
}
