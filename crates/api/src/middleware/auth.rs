//! # Authentication Module
//!
//! The service does not authenticate callers itself. It takes the caller's
//! bearer token and forwards it to the SIHRA API, which decides.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use sihra_core::{errors::SihraError, models::session::Credential};

use crate::middleware::error_handling::AppError;

/// Extractor for the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing or malformed.
#[derive(Debug, Clone)]
pub struct BearerCredential(pub Credential);

#[async_trait]
impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| SihraError::Authentication("Missing authorization header".to_string()))?
            .to_str()
            .map_err(|_| SihraError::Authentication("Authorization header is not valid text".to_string()))?;

        Ok(Self(Credential::from_authorization_header(value)?))
    }
}
