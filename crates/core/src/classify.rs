//! Maps raw failures to the user-facing sentences the platform shows.
//!
//! The remote service returns no structured error codes, only message text,
//! so server-reported failures are classified by substring - a fragile but
//! load-bearing contract: the substrings below are the service's actual
//! error strings. Transport failures carry structure and are classified
//! directly. Unrecognized text passes through with the generic `Error:`
//! prefix stripped.

use crate::error::ApiError;

/// User-facing failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Could not reach the service at all.
    Connectivity,
    /// Wrong mobile/password pair.
    InvalidCredentials,
    /// The mobile number is already registered.
    MobileTaken,
    /// The email address is already registered.
    EmailTaken,
    /// The unit is sold or held by another active request.
    UnitUnavailable,
    /// Anything the known patterns do not cover.
    Other,
}

/// A classified failure: category plus the sentence to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: ErrorKind,
    pub message: String,
}

impl Classified {
    fn fixed(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for Classified {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Classifies a core failure into a user-facing category and sentence.
pub fn classify(err: &ApiError) -> Classified {
    match err {
        ApiError::Transport(_) => Classified::fixed(
            ErrorKind::Connectivity,
            "ارتباط با سرور برقرار نشد. لطفا اتصال شبکه یا وضعیت API را بررسی کنید.",
        ),
        ApiError::Api { message, .. } => classify_text(message),
        other => classify_text(&other.to_string()),
    }
}

/// Classifies raw server error text. Pure and deterministic: a fixed input
/// always yields the same category.
pub fn classify_text(raw: &str) -> Classified {
    if raw.contains("Invalid mobile or password") {
        Classified::fixed(
            ErrorKind::InvalidCredentials,
            "شماره موبایل یا رمز عبور اشتباه است.",
        )
    } else if raw.contains("Mobile already registered") {
        Classified::fixed(
            ErrorKind::MobileTaken,
            "این شماره موبایل قبلا ثبت شده است.",
        )
    } else if raw.contains("Email already registered") {
        Classified::fixed(ErrorKind::EmailTaken, "این ایمیل قبلا ثبت شده است.")
    } else if raw.contains("Unit already") {
        Classified::fixed(
            ErrorKind::UnitUnavailable,
            "این واحد در حال حاضر قابل رزرو نیست.",
        )
    } else {
        Classified {
            kind: ErrorKind::Other,
            message: strip_error_prefix(raw).to_string(),
        }
    }
}

/// Strips a leading case-insensitive `Error:` and surrounding whitespace.
fn strip_error_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("error:") => trimmed[6..].trim_start(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_server_messages_map_to_categories() {
        assert_eq!(
            classify_text(r#"{"detail":"Invalid mobile or password"}"#).kind,
            ErrorKind::InvalidCredentials
        );
        assert_eq!(
            classify_text(r#"{"detail":"Mobile already registered"}"#).kind,
            ErrorKind::MobileTaken
        );
        assert_eq!(
            classify_text(r#"{"detail":"Email already registered"}"#).kind,
            ErrorKind::EmailTaken
        );
        assert_eq!(
            classify_text(r#"{"detail":"Unit already sold"}"#).kind,
            ErrorKind::UnitUnavailable
        );
        assert_eq!(
            classify_text(r#"{"detail":"Unit already in another active request"}"#).kind,
            ErrorKind::UnitUnavailable
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let input = r#"{"detail":"Unit already sold"}"#;
        assert_eq!(classify_text(input), classify_text(input));
    }

    #[test]
    fn unrecognized_text_passes_through_with_prefix_stripped() {
        let classified = classify_text("Error: something odd happened");
        assert_eq!(classified.kind, ErrorKind::Other);
        assert_eq!(classified.message, "something odd happened");

        let classified = classify_text("error:   spaced");
        assert_eq!(classified.message, "spaced");

        let classified = classify_text("plain message");
        assert_eq!(classified.message, "plain message");
    }

    #[test]
    fn short_and_non_ascii_text_does_not_panic() {
        assert_eq!(classify_text("err").kind, ErrorKind::Other);
        assert_eq!(classify_text("خطای ناشناخته").message, "خطای ناشناخته");
        assert_eq!(classify_text("").message, "");
    }

    #[test]
    fn api_error_with_server_text_classifies_by_substring() {
        let err = ApiError::Api {
            status: 409,
            message: r#"{"detail":"Unit already sold"}"#.into(),
        };
        assert_eq!(classify(&err).kind, ErrorKind::UnitUnavailable);
    }
}
