//! Wire types shared by the REST helpers and the streaming chat consumer,
//! plus the client-side error taxonomy.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by calls to the backing services.
///
/// Every failure surfaces to the user as plain text via
/// [`ApiError::user_message`]; nothing is retried and no structured code
/// reaches the view layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network-level failure).
    #[error("connection failed")]
    Connection,

    /// The service answered with a non-success status and an application
    /// error message, passed through verbatim.
    #[error("{0}")]
    Service(String),
}

/// Fixed message shown for network-level failures.
pub const CONNECTION_FAILED_TEXT: &str = "Connection failed.";

impl ApiError {
    /// The user-visible message for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection => CONNECTION_FAILED_TEXT.to_owned(),
            Self::Service(msg) => msg.clone(),
        }
    }
}

/// JSON error body shape used by both services: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

// =============================================================================
// ACCOUNT SERVICE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub new_password: &'a str,
}

/// Profile shape on the wire. The service may include extra fields (such as
/// the username) in its response; they are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileWire {
    pub allergens: String,
    pub calorie_limit: u32,
    pub cuisine_pref: String,
    pub cooking_time: u32,
}

// =============================================================================
// GENERATION SERVICE
// =============================================================================

/// One prior conversation turn as the generation service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnPayload {
    /// `"user"` or `"model"`.
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

/// Profile constraints derived from the preference profile for one
/// generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateProfile {
    pub calorie_limit: u32,
    pub allergens: Vec<String>,
    pub cuisine_pref: String,
}

/// Body of `POST /generate`.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub message: String,
    pub history: Vec<TurnPayload>,
    pub profile: GenerateProfile,
}

/// One JSON record decoded from one line of the generation service's
/// chunked NDJSON response. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamRecord {
    pub text: Option<String>,
    pub follow_up: Option<bool>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
