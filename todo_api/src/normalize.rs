//! Maps raw backend error text to user-facing messages.
//!
//! The backend reports validation and database failures as free text
//! (validator tag messages, Postgres driver errors). The rules below turn
//! the ones we recognize into short UI copy. Matching is case-insensitive
//! substring search and the first matching rule wins, so the order of
//! [`RULES`] is the precedence.

/// Returned for empty or whitespace-only input.
pub const EMPTY_MESSAGE: &str = "Request failed. Please try again.";

/// How a rule's needles are combined.
enum Needles {
    /// Every needle must be present.
    All(&'static [&'static str]),
    /// At least one needle must be present.
    Any(&'static [&'static str]),
}

struct Rule {
    needles: Needles,
    message: &'static str,
}

impl Rule {
    fn matches(&self, lower: &str) -> bool {
        match self.needles {
            Needles::All(needles) => needles.iter().all(|n| lower.contains(n)),
            Needles::Any(needles) => needles.iter().any(|n| lower.contains(n)),
        }
    }
}

const RULES: &[Rule] = &[
    // Validator tags
    Rule {
        needles: Needles::All(&["failed on the 'required' tag"]),
        message: "Please fill in all required fields",
    },
    Rule {
        needles: Needles::All(&["registerinput.password", "failed on the 'min' tag"]),
        message: "Password must be at least 8 characters",
    },
    Rule {
        needles: Needles::All(&["registerinput.username", "failed on the 'min' tag"]),
        message: "Username must be at least 3 characters",
    },
    Rule {
        needles: Needles::All(&["verifyemailregisterinput.code", "failed on the 'len' tag"]),
        message: "Verification code must be exactly 6 digits",
    },
    Rule {
        needles: Needles::All(&["failed on the 'email' tag"]),
        message: "Enter a valid email address",
    },
    // Unique constraints
    Rule {
        needles: Needles::All(&["users_email_key"]),
        message: "Email is already in use",
    },
    Rule {
        needles: Needles::All(&["users_username_key"]),
        message: "Username is already in use",
    },
    Rule {
        needles: Needles::Any(&[
            "duplicate key value violates unique constraint",
            "unique constraint",
        ]),
        message: "This value is already in use",
    },
    // Other constraint and driver errors
    Rule {
        needles: Needles::All(&["violates foreign key constraint"]),
        message: "Related record was not found",
    },
    Rule {
        needles: Needles::All(&["violates not-null constraint"]),
        message: "Required field is missing",
    },
    Rule {
        needles: Needles::All(&["invalid input syntax"]),
        message: "Invalid input format",
    },
    Rule {
        needles: Needles::Any(&["pq:", "sqlstate", "sql:"]),
        message: "Database request failed. Please try again",
    },
];

/// Normalizes a raw error message. Unrecognized text is returned trimmed
/// but otherwise unchanged.
pub fn normalize(raw: &str) -> String {
    let msg = raw.trim();
    if msg.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let lower = msg.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.message.to_string())
        .unwrap_or_else(|| msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_generic_message() {
        assert_eq!(normalize(""), EMPTY_MESSAGE);
        assert_eq!(normalize("   \n\t"), EMPTY_MESSAGE);
    }

    #[test]
    fn required_tag() {
        assert_eq!(
            normalize("Key: '' failed on the 'required' tag"),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn password_min_tag() {
        let raw = "Key: 'RegisterInput.Password' Error:Field validation for 'Password' failed on the 'min' tag";
        assert_eq!(normalize(raw), "Password must be at least 8 characters");
    }

    #[test]
    fn username_min_tag() {
        let raw = "Key: 'RegisterInput.Username' Error:Field validation for 'Username' failed on the 'min' tag";
        assert_eq!(normalize(raw), "Username must be at least 3 characters");
    }

    #[test]
    fn min_tag_on_unknown_field_passes_through() {
        let raw = "Key: 'Other.Field' Error:Field validation for 'Field' failed on the 'min' tag";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn verification_code_len_tag() {
        let raw = "Key: 'VerifyEmailRegisterInput.Code' Error:Field validation for 'Code' failed on the 'len' tag";
        assert_eq!(normalize(raw), "Verification code must be exactly 6 digits");
    }

    #[test]
    fn email_tag() {
        let raw = "Key: 'RegisterInput.Email' Error:Field validation for 'Email' failed on the 'email' tag";
        assert_eq!(normalize(raw), "Enter a valid email address");
    }

    #[test]
    fn required_wins_over_min() {
        let raw = "RegisterInput.Password failed on the 'min' tag; Key: '' failed on the 'required' tag";
        assert_eq!(normalize(raw), "Please fill in all required fields");
    }

    #[test]
    fn known_unique_columns() {
        assert_eq!(
            normalize(r#"pq: duplicate key value violates unique constraint "users_email_key""#),
            "Email is already in use"
        );
        assert_eq!(
            normalize(r#"pq: duplicate key value violates unique constraint "users_username_key""#),
            "Username is already in use"
        );
    }

    #[test]
    fn unknown_unique_column_is_generic() {
        assert_eq!(
            normalize(r#"duplicate key value violates unique constraint "todos_pkey""#),
            "This value is already in use"
        );
        assert_eq!(
            normalize("UNIQUE CONSTRAINT failed"),
            "This value is already in use"
        );
    }

    #[test]
    fn foreign_key_not_null_and_syntax() {
        assert_eq!(
            normalize(r#"insert or update on table "todos" violates foreign key constraint "todos_user_id_fkey""#),
            "Related record was not found"
        );
        assert_eq!(
            normalize(r#"null value in column "title" violates not-null constraint"#),
            "Required field is missing"
        );
        assert_eq!(
            normalize(r#"invalid input syntax for type uuid: "abc""#),
            "Invalid input format"
        );
    }

    #[test]
    fn constraint_rules_take_precedence_over_driver_marker() {
        assert_eq!(
            normalize("pq: invalid input syntax for type uuid"),
            "Invalid input format"
        );
    }

    #[test]
    fn driver_markers() {
        let expected = "Database request failed. Please try again";
        assert_eq!(normalize("pq: connection refused"), expected);
        assert_eq!(normalize("ERROR (SQLSTATE 42P01)"), expected);
        assert_eq!(normalize("sql: no rows in result set"), expected);
    }

    #[test]
    fn unrecognized_text_is_returned_trimmed() {
        assert_eq!(
            normalize("some unrecognized server text"),
            "some unrecognized server text"
        );
        assert_eq!(normalize("  invalid credentials \n"), "invalid credentials");
    }

    #[test]
    fn matching_is_case_insensitive_but_pass_through_keeps_case() {
        assert_eq!(normalize("USERS_EMAIL_KEY"), "Email is already in use");
        assert_eq!(normalize("User Is Not Verified"), "User Is Not Verified");
    }
}
