//! 교차 필드 검증기
//!
//! 두 개 이상의 필드 사이의 관계를 확인합니다. I/O는 없습니다.

use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::models::FieldErrorSet;
use super::country_domains::email_matches_country;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords must match";
pub const EMAIL_COUNTRY_MISMATCH_MESSAGE: &str = "Email domain must match the selected country";

#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFieldValidator;

impl CrossFieldValidator {
    pub fn validate(&self, request: &RegistrationRequest) -> FieldErrorSet {
        let mut errors = FieldErrorSet::new();

        if request.password != request.confirm_password {
            errors.add("confirm_password", PASSWORD_MISMATCH_MESSAGE);
        }

        if !email_matches_country(&request.email, &request.country_iso) {
            errors.add("email", EMAIL_COUNTRY_MISMATCH_MESSAGE);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::valid_request;

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(CrossFieldValidator.validate(&valid_request()).is_empty());
    }

    #[test]
    fn test_password_mismatch_is_case_sensitive() {
        let mut request = valid_request();
        request.confirm_password = request.password.to_lowercase();

        let errors = CrossFieldValidator.validate(&request);
        assert_eq!(errors.get("confirm_password"), Some(PASSWORD_MISMATCH_MESSAGE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_country_rules() {
        let mut request = valid_request();
        request.country_iso = "GB".to_string();
        request.email = "jane@example.co.uk".to_string();
        assert!(CrossFieldValidator.validate(&request).is_empty());

        request.country_iso = "US".to_string();
        request.email = "jane@example.eg".to_string();
        assert_eq!(
            CrossFieldValidator.validate(&request).get("email"),
            Some(EMAIL_COUNTRY_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn test_empty_country_or_email_fails() {
        let mut request = valid_request();
        request.country_iso = "".to_string();
        assert!(CrossFieldValidator.validate(&request).contains("email"));

        let mut request = valid_request();
        request.email = "".to_string();
        assert!(CrossFieldValidator.validate(&request).contains("email"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut request = valid_request();
        request.confirm_password = "Other123!@#".to_string();
        request.email = "john@example.eg".to_string();

        let first = CrossFieldValidator.validate(&request);
        assert_eq!(first, CrossFieldValidator.validate(&request));
        assert_eq!(first.len(), 2);
    }
}
