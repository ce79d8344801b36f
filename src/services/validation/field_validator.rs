//! 필드 단위 검증기
//!
//! I/O 없이 각 필드의 형식과 필수 여부만 확인합니다.
//! 한 필드가 실패해도 나머지 필드를 모두 검사하므로 위반된 필드가 전부 보고됩니다.

use validator::Validate;
use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::models::FieldErrorSet;

pub const TERMS_NOT_ACCEPTED_MESSAGE: &str = "You must accept the terms and conditions";

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn validate(&self, request: &RegistrationRequest) -> FieldErrorSet {
        let mut errors = match request.validate() {
            Ok(()) => FieldErrorSet::new(),
            Err(validation_errors) => FieldErrorSet::from(validation_errors),
        };

        if !request.terms_accepted {
            errors.add("terms_accepted", TERMS_NOT_ACCEPTED_MESSAGE);
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
        assert!(FieldValidator.validate(&valid_request()).is_empty());
    }

    #[test]
    fn test_every_blank_required_field_is_reported() {
        let mut request = valid_request();
        request.first_name = " ".to_string();
        request.last_name = "".to_string();
        request.street = "\t".to_string();
        request.city = "".to_string();
        request.state = "  ".to_string();
        request.country = "".to_string();

        let errors = FieldValidator.validate(&request);

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("last_name"), Some("Last name is required"));
        assert_eq!(errors.get("street"), Some("Street address is required"));
        assert_eq!(errors.get("city"), Some("City is required"));
        assert_eq!(errors.get("state"), Some("State/Province is required"));
        assert_eq!(errors.get("country"), Some("Country is required"));
    }

    #[test]
    fn test_each_blank_field_alone_is_reported() {
        let setters: [fn(&mut RegistrationRequest); 6] = [
            |r| r.first_name = "   ".to_string(),
            |r| r.last_name = "   ".to_string(),
            |r| r.street = "   ".to_string(),
            |r| r.city = "   ".to_string(),
            |r| r.state = "   ".to_string(),
            |r| r.country = "   ".to_string(),
        ];
        let fields = ["first_name", "last_name", "street", "city", "state", "country"];

        for (set_blank, field) in setters.iter().zip(fields) {
            let mut request = valid_request();
            set_blank(&mut request);

            let errors = FieldValidator.validate(&request);
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn test_invalid_email() {
        for email in ["", "john.doe", "john@example", "john doe@example.us"] {
            let mut request = valid_request();
            request.email = email.to_string();

            let errors = FieldValidator.validate(&request);
            assert_eq!(errors.get("email"), Some("Invalid email address"), "email: {email:?}");
        }
    }

    #[test]
    fn test_phone_is_optional() {
        let mut request = valid_request();

        request.phone = None;
        assert!(FieldValidator.validate(&request).is_empty());

        request.phone = Some("".to_string());
        assert!(FieldValidator.validate(&request).is_empty());

        request.phone = Some("   ".to_string());
        assert!(FieldValidator.validate(&request).is_empty());
    }

    #[test]
    fn test_invalid_phone() {
        let mut request = valid_request();
        request.phone = Some("not-a-phone".to_string());

        let errors = FieldValidator.validate(&request);
        assert_eq!(errors.get("phone"), Some("Invalid phone number"));
    }

    #[test]
    fn test_short_username_is_not_trimmed() {
        let mut request = valid_request();

        request.username = "short".to_string();
        assert_eq!(
            FieldValidator.validate(&request).get("username"),
            Some("Username must be at least 6 characters")
        );

        request.username = "  abcd".to_string();
        assert!(!FieldValidator.validate(&request).contains("username"));
    }

    #[test]
    fn test_weak_passwords() {
        for password in ["test123!@#", "Test123456", "Te1!"] {
            let mut request = valid_request();
            request.password = password.to_string();
            request.confirm_password = password.to_string();

            let errors = FieldValidator.validate(&request);
            assert!(errors.contains("password"), "password: {password:?}");
        }
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut request = valid_request();
        request.terms_accepted = false;

        let errors = FieldValidator.validate(&request);
        assert_eq!(errors.get("terms_accepted"), Some(TERMS_NOT_ACCEPTED_MESSAGE));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut request = valid_request();
        request.email = "broken".to_string();
        request.terms_accepted = false;

        assert_eq!(FieldValidator.validate(&request), FieldValidator.validate(&request));
    }
}
