//! 필드 에러 집합
//!
//! 검증 단계마다 "필드 이름 → 사람이 읽을 수 있는 메시지" 형태로 에러를 누적합니다.
//! 키는 유일하며, 같은 필드에 두 번째 메시지가 들어오면 먼저 기록된 메시지를 유지합니다.
//! 그래서 필드 검증기의 `email` 형식 에러가 교차 검증기의 도메인 에러보다 우선합니다.
//!
//! 직렬화 시 일반 JSON 객체(`{"email": "Invalid email address"}`)로 표현되며,
//! `BTreeMap`을 사용하므로 키 순서가 항상 같습니다.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrorSet(BTreeMap<String, String>);

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드 에러를 추가합니다. 이미 같은 필드에 에러가 있으면 무시합니다.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// 다른 단계의 에러 집합을 합칩니다 (먼저 기록된 메시지 우선).
    pub fn merge(&mut self, other: FieldErrorSet) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrorSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FieldErrorSet::new();
        for (field, message) in iter {
            set.add(field, message);
        }
        set
    }
}

/// `validator` 크레이트의 에러를 필드별 단일 메시지로 변환합니다.
///
/// 한 필드에 여러 규칙이 실패하면 첫 번째 에러의 메시지만 사용하고,
/// 메시지가 없는 에러는 에러 코드를 대신 사용합니다.
impl From<ValidationErrors> for FieldErrorSet {
    fn from(errors: ValidationErrors) -> Self {
        let mut set = FieldErrorSet::new();

        for (field, field_errors) in errors.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                set.add(field.to_string(), message);
            }
        }

        set
    }
}
