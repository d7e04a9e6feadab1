//! Bearer-token extraction from the Authorization header.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use konovo_lib::KonovoError;

use crate::error::ApiError;

/// The opaque bearer token presented by the caller. Extracted before
/// any handler logic runs; a missing header or a non-Bearer scheme is
/// an authorization error, distinct from upstream rejecting the token.
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                invalid_auth_token("Missing or invalid auth token")
            })?;

        let (scheme, credentials) = header
            .split_once(' ')
            .map(|(s, c)| (s, c.trim()))
            .ok_or_else(|| invalid_auth_token("Missing or invalid auth token"))?;

        if !scheme.eq_ignore_ascii_case("bearer") || credentials.is_empty() {
            return Err(invalid_auth_token(
                "Invalid authorization scheme, expected Bearer <token>",
            ));
        }

        Ok(BearerToken(credentials.to_string()))
    }
}

fn invalid_auth_token(detail: &str) -> ApiError {
    ApiError(KonovoError::authorization("invalid_auth_token", detail))
}
