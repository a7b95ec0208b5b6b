//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  UI                          Rust                                       │
//! │  ──                          ────                                       │
//! │                                                                         │
//! │  update_cart_item('p1', 250)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Backend Error? ─── ClientError::Status { 403, .. } ──┐          │  │
//! │  │         │                                             │          │  │
//! │  │         ▼                                             ▼          │  │
//! │  │  Rule Error? ─── CoreError::QuantityTooLarge ──── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code   = "QUANTITY_LIMIT"                                            │
//! │  e.notice = { title: "Quantity Limit", ... }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error carries a ready-to-show [`Notice`].

use serde::Serialize;
use tracing::error;

use market_core::{CoreError, ValidationError};

use crate::api::ClientError;
use crate::notice::Notice;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "FORBIDDEN",
///   "message": "Role 'user' is not allowed to access /admin",
///   "notice": { "title": "Error", "description": "...", "variant": "destructive" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Developer-facing message
    pub message: String,

    /// What the user sees
    pub notice: Notice,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Cart quantity above the configured bound
    QuantityLimit,

    /// Login required
    Unauthenticated,

    /// Logged in with the wrong role
    Forbidden,

    /// Resource not found on the backend
    NotFound,

    /// Backend unreachable or timed out
    Network,

    /// Backend answered with a failure or an unreadable body
    Backend,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error with a generic notice.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError {
            code,
            notice: Notice::error(message.clone()),
            message,
        }
    }

    /// Replaces the user-facing notice.
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = notice;
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts core rule violations to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::QuantityTooLarge { max, .. } => {
                ApiError::new(ErrorCode::QuantityLimit, message)
                    .with_notice(Notice::quantity_limit(max))
            }
            CoreError::Unauthenticated => ApiError::new(ErrorCode::Unauthenticated, message)
                .with_notice(Notice::error("Please log in to continue.")),
            CoreError::Forbidden { .. } => ApiError::new(ErrorCode::Forbidden, message)
                .with_notice(Notice::error("You do not have access to this page.")),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts backend failures to API errors.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::Status { status, message } => {
                let code = match *status {
                    401 => ErrorCode::Unauthenticated,
                    403 => ErrorCode::Forbidden,
                    404 => ErrorCode::NotFound,
                    _ => ErrorCode::Backend,
                };
                ApiError::new(code, err.to_string()).with_notice(Notice::error(message.clone()))
            }
            ClientError::Timeout | ClientError::Http(_) if err.is_unreachable() => {
                ApiError::new(ErrorCode::Network, err.to_string())
                    .with_notice(Notice::error("Could not connect to server."))
            }
            ClientError::Decode(e) => {
                // Log the actual error but return a generic message
                error!("Backend response could not be decoded: {}", e);
                ApiError::new(ErrorCode::Backend, "Unexpected response from server")
            }
            ClientError::InvalidUrl(e) => {
                error!("Invalid backend URL: {}", e);
                ApiError::internal("Backend address is misconfigured")
            }
            ClientError::Timeout | ClientError::Http(_) => {
                error!("HTTP request failed: {}", err);
                ApiError::new(ErrorCode::Backend, "Request failed")
            }
        }
    }
}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeVariant;
    use market_core::Role;

    #[test]
    fn test_quantity_error_carries_limit_notice() {
        let err: ApiError = CoreError::QuantityTooLarge {
            requested: 250,
            max: 100,
        }
        .into();

        assert_eq!(err.code, ErrorCode::QuantityLimit);
        assert_eq!(err.notice.title, "Quantity Limit");
        assert_eq!(err.notice.description, "Maximum quantity is 100.");
        assert_eq!(err.notice.variant, NoticeVariant::Destructive);
    }

    #[test]
    fn test_access_errors() {
        let err: ApiError = CoreError::Unauthenticated.into();
        assert_eq!(err.code, ErrorCode::Unauthenticated);

        let err: ApiError = CoreError::Forbidden {
            role: Role::User,
            view: "/admin".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_backend_status_mapping() {
        let status = |status: u16, message: &str| ClientError::Status {
            status,
            message: message.into(),
        };

        assert_eq!(ApiError::from(status(401, "expired")).code, ErrorCode::Unauthenticated);
        assert_eq!(ApiError::from(status(403, "no")).code, ErrorCode::Forbidden);
        assert_eq!(ApiError::from(status(404, "gone")).code, ErrorCode::NotFound);

        let err = ApiError::from(status(400, "Price is required"));
        assert_eq!(err.code, ErrorCode::Backend);
        assert_eq!(err.notice.description, "Price is required");
    }

    #[test]
    fn test_timeout_is_network() {
        let err = ApiError::from(ClientError::Timeout);
        assert_eq!(err.code, ErrorCode::Network);
    }

    #[test]
    fn test_serialized_code() {
        let err = ApiError::validation("name is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["notice"]["title"], "Error");
    }
}
