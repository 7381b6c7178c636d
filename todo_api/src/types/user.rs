use serde::{Deserialize, Serialize};

pub type UserID = String;

/// The authenticated user's profile. Secrets never leave the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: UserID,
    pub username: String,
    pub email: String,
    pub pending_email: String,
    pub is_verified: bool,
    pub oauth_provider: String,
    pub oauth_id: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateUsernameRequest<'a> {
    pub username: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdatePasswordRequest<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct CodeRequest<'a> {
    pub code: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct PasswordRequest<'a> {
    pub password: &'a str,
}
