//! # Domain Errors
//!
//! 拒否された操作を表すドメインエラー

use thiserror::Error;

/// 従業員操作のエラー
///
/// いずれのエラーも操作が拒否されたことを示し、ストアの状態は変更されない
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    /// 入力値の形式エラー（メール、電話番号、日付、必須項目）
    #[error("{0}")]
    InvalidInput(String),

    /// 同じ名（大文字小文字を区別しない）の従業員が既に存在する
    #[error("{0}")]
    DuplicateEmployee(String),

    /// 該当する従業員が存在しない
    #[error("{0}")]
    NotFound(String),
}

impl EmployeeError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::DuplicateEmployee(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
