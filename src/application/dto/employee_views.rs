//! # Employee Projection DTOs
//!
//! 従業員の一部フィールドだけを公開するビュー

use crate::domain::entities::employee::Employee;

/// 名と電話番号のビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstNameAndPhone {
    pub first_name: String,
    pub phone_number: String,
}

impl From<&Employee> for FirstNameAndPhone {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name().to_string(),
            phone_number: employee.phone_number().to_string(),
        }
    }
}

/// 名とメールアドレスのビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstNameAndEmail {
    pub first_name: String,
    pub email: String,
}

impl From<&Employee> for FirstNameAndEmail {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name().to_string(),
            email: employee.email().to_string(),
        }
    }
}
