//! 국가 코드별 최상위 도메인(TLD) 매핑
//!
//! 기본 규칙은 `.` + 소문자 ISO 코드입니다 (`US` → `.us`).
//! ISO 코드와 실제 TLD가 다른 국가만 아래 예외 표에 등록합니다.

use std::collections::HashMap;
use once_cell::sync::Lazy;

/// ISO 3166-1 alpha-2 코드 → TLD 예외 표
static TLD_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("GB", ".uk"),
    ])
});

/// 국가 코드에 해당하는 TLD를 반환합니다. 빈 코드는 `None`
pub fn expected_tld(country_iso: &str) -> Option<String> {
    let iso = country_iso.trim().to_uppercase();
    if iso.is_empty() {
        return None;
    }

    match TLD_EXCEPTIONS.get(iso.as_str()) {
        Some(tld) => Some(tld.to_string()),
        None => Some(format!(".{}", iso.to_lowercase())),
    }
}

/// 이메일이 국가 TLD로 끝나는지 확인합니다 (대소문자 무시).
///
/// 이메일이나 국가 코드가 비어 있으면 `false`
pub fn email_matches_country(email: &str, country_iso: &str) -> bool {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return false;
    }

    expected_tld(country_iso)
        .map(|tld| email.ends_with(&tld))
        .unwrap_or(false)
}
