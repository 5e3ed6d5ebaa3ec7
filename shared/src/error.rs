use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::i18n::{lookup, translate, Language};

/// Error codes the backend (or client-side validation) reports.
///
/// Codes the client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    RequiredField,
    PasswordMismatch,
    PasswordTooShort,
    InvalidEmail,
    SelectProgramType,
    SelectAgeGroup,
    FillAllRequired,
    DuplicateLicenseNumber,
    EmailExists,
    InternalError,
    ValidationError,
    InvalidCredentials,
    AccountDisabled,
    InvalidInvitation,
    InvitationExpired,
    InvalidToken,
    UserNotFound,
    WeakPassword,
    Other(String),
}

impl ErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "REQUIRED_FIELD" | "REQUIRED" => ErrorCode::RequiredField,
            "PASSWORD_MISMATCH" => ErrorCode::PasswordMismatch,
            "PASSWORD_TOO_SHORT" => ErrorCode::PasswordTooShort,
            "INVALID_EMAIL" => ErrorCode::InvalidEmail,
            "SELECT_PROGRAM_TYPE" => ErrorCode::SelectProgramType,
            "SELECT_AGE_GROUP" => ErrorCode::SelectAgeGroup,
            "FILL_ALL_REQUIRED" => ErrorCode::FillAllRequired,
            "DUPLICATE_LICENSE_NUMBER" => ErrorCode::DuplicateLicenseNumber,
            "EMAIL_EXISTS" => ErrorCode::EmailExists,
            "INTERNAL_ERROR" => ErrorCode::InternalError,
            "VALIDATION_ERROR" => ErrorCode::ValidationError,
            "INVALID_CREDENTIALS" => ErrorCode::InvalidCredentials,
            "ACCOUNT_DISABLED" => ErrorCode::AccountDisabled,
            "INVALID_INVITATION" => ErrorCode::InvalidInvitation,
            "INVITATION_EXPIRED" => ErrorCode::InvitationExpired,
            "INVALID_TOKEN" => ErrorCode::InvalidToken,
            "USER_NOT_FOUND" => ErrorCode::UserNotFound,
            "WEAK_PASSWORD" => ErrorCode::WeakPassword,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::RequiredField => "REQUIRED_FIELD",
            ErrorCode::PasswordMismatch => "PASSWORD_MISMATCH",
            ErrorCode::PasswordTooShort => "PASSWORD_TOO_SHORT",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::SelectProgramType => "SELECT_PROGRAM_TYPE",
            ErrorCode::SelectAgeGroup => "SELECT_AGE_GROUP",
            ErrorCode::FillAllRequired => "FILL_ALL_REQUIRED",
            ErrorCode::DuplicateLicenseNumber => "DUPLICATE_LICENSE_NUMBER",
            ErrorCode::EmailExists => "EMAIL_EXISTS",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::AccountDisabled => "ACCOUNT_DISABLED",
            ErrorCode::InvalidInvitation => "INVALID_INVITATION",
            ErrorCode::InvitationExpired => "INVITATION_EXPIRED",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::WeakPassword => "WEAK_PASSWORD",
            ErrorCode::Other(code) => code,
        }
    }

    /// Key of the localized message, `errors.<CODE>`
    pub fn message_key(&self) -> String {
        format!("errors.{}", self.as_str())
    }

    /// Localized message, `None` when the tables have no entry for the code
    pub fn localized(&self, lang: Language) -> Option<&'static str> {
        lookup(lang, &self.message_key())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every failure a REST call can surface to a view
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Validation {
        code: Option<ErrorCode>,
        message: String,
    },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a non-2xx status and the (possibly empty) body.
    ///
    /// The backend reports failures as `{success: false, error: {code, message}}`;
    /// some older routes send `{message}` or `{error: "text"}` instead.
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        match status {
            401 | 403 => return ApiError::Unauthorized,
            404 => return ApiError::NotFound,
            _ => {}
        }

        let error = body.and_then(|b| b.get("error"));
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .map(ErrorCode::parse);
        let message = error
            .and_then(|e| e.get("message").and_then(Value::as_str).or_else(|| e.as_str()))
            .or_else(|| body.and_then(|b| b.get("message")).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed ({})", status));

        ApiError::Validation { code, message }
    }

    pub fn validation(code: ErrorCode) -> Self {
        ApiError::Validation {
            message: code.to_string(),
            code: Some(code),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text shown in the transient notification
    pub fn user_message(&self, lang: Language) -> String {
        match self {
            ApiError::Network(_) => translate(lang, "errors.NETWORK").to_string(),
            ApiError::Validation { code, message } => code
                .as_ref()
                .and_then(|c| c.localized(lang))
                .map(str::to_string)
                .unwrap_or_else(|| message.clone()),
            ApiError::Unauthorized => translate(lang, "errors.UNAUTHORIZED").to_string(),
            ApiError::NotFound => translate(lang, "errors.NOT_FOUND").to_string(),
            ApiError::Decode(_) => translate(lang, "errors.INTERNAL_ERROR").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_response(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(403, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(404, None), ApiError::NotFound);
    }

    #[test]
    fn test_error_envelope() {
        let body = json!({"success": false, "error": {"code": "EMAIL_EXISTS", "message": "Email already registered"}});
        let err = ApiError::from_response(409, Some(&body));
        assert_eq!(
            err,
            ApiError::Validation {
                code: Some(ErrorCode::EmailExists),
                message: "Email already registered".to_string()
            }
        );
        assert_eq!(err.user_message(Language::En), "An account with that email already exists.");
        assert_eq!(err.user_message(Language::Fr), "Un compte avec ce courriel existe déjà.");
    }

    #[test]
    fn test_unknown_code_uses_backend_message() {
        let body = json!({"error": {"code": "QUOTA_REACHED", "message": "Too many children"}});
        let err = ApiError::from_response(400, Some(&body));
        assert_eq!(err.user_message(Language::En), "Too many children");
    }

    #[test]
    fn test_flat_message_bodies() {
        let err = ApiError::from_response(400, Some(&json!({"message": "Bad date"})));
        assert_eq!(err.to_string(), "Bad date");
        let err = ApiError::from_response(500, Some(&json!({"error": "boom"})));
        assert_eq!(err.to_string(), "boom");
        let err = ApiError::from_response(502, None);
        assert_eq!(err.to_string(), "Request failed (502)");
    }

    #[test]
    fn test_code_round_trip() {
        assert_eq!(ErrorCode::parse("REQUIRED"), ErrorCode::RequiredField);
        assert_eq!(ErrorCode::parse("NOPE").as_str(), "NOPE");
        assert_eq!(ErrorCode::DuplicateLicenseNumber.message_key(), "errors.DUPLICATE_LICENSE_NUMBER");
    }

    #[test]
    fn test_network_message_is_localized() {
        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.user_message(Language::En), "Network error. Please try again.");
    }
}
