//! Error types for the domain layer.

/// The closed set of failure categories the BFF can surface.
///
/// The HTTP boundary maps each kind to exactly one transport status;
/// the services here never inspect statuses themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad credentials or an invalid/expired upstream token. The caller
    /// must log in again; retrying with the same token is pointless.
    Authentication,
    /// Missing or malformed bearer token at the boundary.
    Authorization,
    /// The requested item does not exist.
    NotFound,
    /// Upstream unreachable or erroring. The caller may retry later.
    Unavailable,
    /// The request shape was malformed.
    Validation,
    /// An unexpected failure. Details stay server-side.
    Internal,
}

/// A domain error: a kind plus the (code, message, detail) triple the
/// boundary serializes to the caller.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct KonovoError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    pub detail: String,
}

impl KonovoError {
    fn new(kind: ErrorKind, code: &str, message: &str, detail: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.to_string(),
            message: message.to_string(),
            detail: detail.into(),
        }
    }

    pub fn authentication(code: &str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, code, "Not authenticated", detail)
    }

    pub fn authorization(code: &str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, code, "Not authenticated", detail)
    }

    pub fn not_found(code: &str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, "Product not found", detail)
    }

    pub fn unavailable() -> Self {
        Self::new(
            ErrorKind::Unavailable,
            "service_unavailable",
            "External service unavailable right now",
            "Please try again later",
        )
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation,
            "validation_error",
            "Invalid request",
            detail,
        )
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Internal,
            "internal_error",
            "An unexpected error occurred",
            detail,
        )
    }
}
