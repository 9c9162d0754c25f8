use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SihraError, SihraResult};
use crate::models::time_slot::RecordId;

/// Bearer token used against the SIHRA API.
///
/// Always handed to the client explicitly. `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> SihraResult<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(SihraError::Authentication("Empty bearer token".to_string()));
        }
        Ok(Self(token.to_string()))
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`.
    pub fn from_authorization_header(value: &str) -> SihraResult<Self> {
        let (scheme, token) = value
            .trim()
            .split_once(' ')
            .ok_or_else(|| SihraError::Authentication("Malformed authorization header".to_string()))?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(SihraError::Authentication(format!(
                "Unsupported authorization scheme: {}",
                scheme
            )));
        }

        Self::new(token)
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Role of a signed-in SIHRA user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Dean,
    Admin,
}

/// The signed-in user, as returned alongside the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    pub role: Role,
}

impl Profile {
    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}
