use serde::{Deserialize, Serialize};

use super::User;

/// Returned by every `/auth/*` route. `token` is empty after registration
/// until the email address is verified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: String,
}

impl LoginResponse {
    /// The token, if the server issued a non-empty one.
    pub fn token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }
}

/// `{"message": "..."}` acknowledgement. Also used for routes whose success
/// body is empty or plain text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Username may also be an email address; the server decides by the `@`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct GoogleLoginRequest<'a> {
    pub token: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyEmailRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}
