//! # Input Validator
//!
//! 入力値の検証とパース（メールアドレス、電話番号、日付）

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::errors::{EmployeeError, Result};

/// 日付の入出力フォーマット（dd-MM-yyyy）
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// 日付が未登録であることを表すトークン
pub const NOT_AVAILABLE: &str = "N/A";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

// chrono の %d / %m は桁数を強制しないため、形だけ先に確認する。
// 0000-9999 以外の年は %Y が符号付き（例: +10000, -0001）で出力する
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-([0-9]{4}|[+-][0-9]{4,})$").expect("date pattern is valid")
});

/// 入力検証サービス
///
/// 状態を持たない純粋関数の集まり
pub struct InputValidator;

impl InputValidator {
    /// メールアドレスの形式を検証
    ///
    /// 空白のみの入力は `false`
    pub fn is_valid_email(email: &str) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        EMAIL_PATTERN.is_match(email)
    }

    /// 電話番号の形式を検証（ASCII数字ちょうど10桁）
    pub fn is_valid_phone(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// `dd-MM-yyyy` 形式の日付をパース
    ///
    /// # Errors
    ///
    /// 空白、形式違い、または実在しない日付（例: 31-02-2020）の場合に
    /// `InvalidInput` を返す
    pub fn parse_date(input: &str) -> Result<NaiveDate> {
        let input = input.trim();
        if input.is_empty() {
            return Err(EmployeeError::invalid_input("Date cannot be empty"));
        }

        if !DATE_SHAPE.is_match(input) {
            return Err(invalid_date_format(input));
        }

        NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid_date_format(input))
    }

    /// 省略可能な日付をパース
    ///
    /// 空白または `N/A`（大文字小文字を区別しない）は `None`。
    /// それ以外は [`InputValidator::parse_date`] に委譲し、エラーもそのまま返す
    pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
            return Ok(None);
        }
        Self::parse_date(trimmed).map(Some)
    }

    /// 日付を `dd-MM-yyyy` で整形。未登録なら `N/A`
    pub fn format_date(date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// 必須文字列が空白でないことを検証
    pub fn validate_not_empty(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(EmployeeError::invalid_input(format!(
                "{} cannot be empty",
                field_name
            )));
        }
        Ok(())
    }

    /// 数値が負でないことを検証（NaN も不可）
    pub fn validate_non_negative(value: f64, field_name: &str) -> Result<()> {
        if value.is_nan() || value < 0.0 {
            return Err(EmployeeError::invalid_input(format!(
                "{} cannot be negative",
                field_name
            )));
        }
        Ok(())
    }
}

fn invalid_date_format(input: &str) -> EmployeeError {
    EmployeeError::invalid_input(format!(
        "Invalid date '{}'. Please use dd-MM-yyyy format",
        input
    ))
}
