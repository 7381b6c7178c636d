//! Client-side checks that mirror the server's binding rules.
//!
//! Failing early saves a round trip and produces the same copy the error
//! normalizer would show for the server's rejection.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use regex::Regex;

use crate::error::TodoAppError;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const VERIFICATION_CODE_LENGTH: usize = 6;
pub const MAX_TITLE_LENGTH: usize = 200;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("bad email regex: {e}"))
    })
}

/// Strip ASCII control characters (except space), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, TodoAppError> {
    if input.len() > max_len {
        return Err(TodoAppError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

fn require(input: &str) -> Result<&str, TodoAppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TodoAppError::InvalidInput(
            "Please fill in all required fields".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Usernames are trimmed and must be at least 3 characters.
pub fn validate_username(input: &str) -> Result<String, TodoAppError> {
    let trimmed = require(input)?;
    if trimmed.chars().count() < MIN_USERNAME_LENGTH {
        return Err(TodoAppError::InvalidInput(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

/// Passwords are not trimmed; whitespace is significant.
pub fn validate_password(input: &str) -> Result<(), TodoAppError> {
    if input.is_empty() {
        return Err(TodoAppError::InvalidInput(
            "Please fill in all required fields".to_string(),
        ));
    }
    if input.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(TodoAppError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_email(input: &str) -> Result<String, TodoAppError> {
    let trimmed = require(input)?;
    if !email_regex().is_match(trimmed) {
        return Err(TodoAppError::InvalidInput(
            "Enter a valid email address".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Verification codes are exactly 6 characters after trimming.
pub fn validate_code(input: &str) -> Result<String, TodoAppError> {
    let trimmed = require(input)?;
    if trimmed.chars().count() != VERIFICATION_CODE_LENGTH {
        return Err(TodoAppError::InvalidInput(format!(
            "Verification code must be exactly {} digits",
            VERIFICATION_CODE_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_title(input: &str) -> Result<String, TodoAppError> {
    let sanitized = sanitize_text(input, MAX_TITLE_LENGTH)?;
    if sanitized.is_empty() {
        return Err(TodoAppError::InvalidInput(
            "Please fill in all required fields".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Accepts `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp and returns
/// the RFC 3339 form the server parses.
pub fn validate_deadline(input: &str) -> Result<String, TodoAppError> {
    let trimmed = input.trim();
    let parsed = if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
    } else {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    };
    parsed
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .ok_or_else(|| {
            TodoAppError::InvalidInput(format!(
                "invalid deadline '{}'. Expected YYYY-MM-DD or an RFC 3339 timestamp",
                input
            ))
        })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
