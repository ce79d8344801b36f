//! # 문자열 유틸리티
//! 
//! 검증 단계들이 공통으로 사용하는 문자열 처리 함수들입니다.
//! 공백 제거 후 비어 있는지 판단하는 규칙을 한 곳에 모아
//! 필드 검증기와 비즈니스 검증기가 같은 기준을 사용하도록 합니다.

/// 공백을 제거한 뒤 값이 비어 있는지 확인합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(is_blank("   "));
/// assert!(!is_blank("  John  "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 바이트가 아닌 문자(char) 단위 길이를 반환합니다.
///
/// 사용자명 최소 길이 규칙은 한글 등 멀티바이트 문자도 한 글자로 셉니다.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}
