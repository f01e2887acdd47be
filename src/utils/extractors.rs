use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::error::AppError;

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION: &str = "default";
const MAX_SESSION_LENGTH: usize = 64;

/// JSON body extractor whose rejections become 400 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Shopper scope for cart, wishlist and order operations, taken from the
/// `X-Session-Id` header. Requests without the header share the default
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SESSION_HEADER) else {
            return Ok(SessionId(DEFAULT_SESSION.to_string()));
        };

        let session = value
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid session id".to_string()))?
            .trim();

        let well_formed = !session.is_empty()
            && session.len() <= MAX_SESSION_LENGTH
            && session
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !well_formed {
            return Err(AppError::BadRequest("Invalid session id".to_string()));
        }

        Ok(SessionId(session.to_string()))
    }
}
