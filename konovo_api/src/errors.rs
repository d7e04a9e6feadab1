//! Error types for the upstream catalog client.

/// Errors that can occur when calling the upstream catalog service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or an unreadable
    /// or undecodable response body).
    #[error("Request failed")]
    RequestFailed,
    /// The upstream returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// Whether the upstream rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::HttpStatus { status: 401, .. })
    }
}
