//! 필드 형식 규칙
//!
//! I/O 없는 순수 함수 모음입니다. `RegistrationRequest`의 `validator` derive 속성과
//! 교차 검증기가 이 함수들을 호출합니다.

use once_cell::sync::Lazy;
use phonenumber::{Mode, PhoneNumber};
use regex::Regex;
use crate::utils::string_utils::char_count;

/// `local@domain.tld` 형태. 각 부분은 `@`와 공백을 포함하지 않는 1자 이상
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const USERNAME_MIN_LENGTH: usize = 6;

/// 앞뒤 공백을 제거한 이메일이 `local@domain.tld` 형태인지 확인합니다.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// 공백 제거 후 `+`를 붙여 지역 코드 없이 파싱합니다.
fn parse_international(phone: &str) -> Option<PhoneNumber> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return None;
    }

    let international = if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{}", trimmed)
    };

    phonenumber::parse(None, &international).ok()
}

/// 국제 전화번호 형식 검증
///
/// 파싱된 번호는 감지된 국가의 번호 체계에서 유효해야 합니다.
/// 빈 값은 "없음"이므로 호출하는 쪽에서 걸러야 하며, 여기서는 유효하지 않은 것으로 봅니다.
pub fn is_valid_phone(phone: &str) -> bool {
    parse_international(phone)
        .map(|number| phonenumber::is_valid(&number))
        .unwrap_or(false)
}

/// 중복 조회와 저장에 쓰는 전화번호 표기 (E.164, 예: `+12015550123`)
///
/// 빈 값은 `None`. 파싱할 수 없는 값은 공백만 제거해 돌려줍니다.
pub fn normalize_phone(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = parse_international(trimmed)
        .map(|number| phonenumber::format(&number).mode(Mode::E164).to_string())
        .unwrap_or_else(|| trimmed.to_string());

    Some(normalized)
}

/// 중복 조회와 저장에 쓰는 이메일 표기 (공백 제거, 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 비밀번호 정책: 8자 이상, 대문자/소문자/숫자/특수문자 각 1개 이상
///
/// 숫자는 10진 숫자(`0`-`9`)만 인정하며,
/// 특수문자는 대문자, 소문자, 숫자가 아닌 모든 문자입니다.
pub fn is_strong_password(password: &str) -> bool {
    if char_count(password) < PASSWORD_MIN_LENGTH {
        return false;
    }

    let (mut upper, mut lower, mut digit, mut special) = (false, false, false, false);

    for c in password.chars() {
        if c.is_uppercase() {
            upper = true;
        } else if c.is_lowercase() {
            lower = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else {
            special = true;
        }
    }

    upper && lower && digit && special
}

/// 사용자명 최소 길이 (문자 단위, 공백 제거 없음)
pub fn meets_username_length(username: &str) -> bool {
    char_count(username) >= USERNAME_MIN_LENGTH
}
