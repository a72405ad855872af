//! # Employee Form DTO
//!
//! 呼び出し側が収集した生の入力値

use crate::domain::entities::employee::Employee;
use crate::domain::errors::Result;
use crate::domain::services::input_validator::InputValidator;

/// 従業員登録フォーム
///
/// 日付は `dd-MM-yyyy` 形式の文字列のまま保持する。
/// メールアドレスと電話番号の形式チェックはサービス層で行う
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub address: String,
    pub email: String,
    pub phone_number: String,
    /// 生年月日（dd-MM-yyyy）
    pub date_of_birth: String,
    /// 結婚記念日（dd-MM-yyyy、空または "N/A" で未登録）
    pub wedding_date: String,
    pub salary: f64,
}

impl EmployeeForm {
    /// 日付をパースして従業員エンティティに変換
    ///
    /// # Errors
    ///
    /// 日付のパース、またはエンティティの検証に失敗した場合に `InvalidInput` を返す
    pub fn into_employee(self) -> Result<Employee> {
        let date_of_birth = InputValidator::parse_date(&self.date_of_birth)?;
        let wedding_date = InputValidator::parse_optional_date(&self.wedding_date)?;

        Employee::new(
            self.first_name,
            self.last_name,
            self.department,
            self.address,
            self.email,
            self.phone_number,
            date_of_birth,
            wedding_date,
            self.salary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::EmployeeError;
    use chrono::NaiveDate;

    fn create_test_form() -> EmployeeForm {
        EmployeeForm {
            first_name: "Vikram".to_string(),
            last_name: "Singh".to_string(),
            department: "Operations".to_string(),
            address: "654 Connaught Place, Delhi".to_string(),
            email: "vikram.singh@company.com".to_string(),
            phone_number: "9876543214".to_string(),
            date_of_birth: "14-02-1985".to_string(),
            wedding_date: "20-08-2010".to_string(),
            salary: 95000.0,
        }
    }

    #[test]
    fn test_into_employee() {
        let employee = create_test_form().into_employee().unwrap();

        assert_eq!(employee.full_name(), "Vikram Singh");
        assert_eq!(
            employee.date_of_birth(),
            NaiveDate::from_ymd_opt(1985, 2, 14).unwrap()
        );
        assert_eq!(employee.wedding_date(), NaiveDate::from_ymd_opt(2010, 8, 20));
        assert_eq!(employee.salary(), 95000.0);
    }

    #[test]
    fn test_into_employee_without_wedding_date() {
        let form = EmployeeForm {
            wedding_date: String::new(),
            ..create_test_form()
        };
        assert_eq!(form.into_employee().unwrap().wedding_date(), None);

        let form = EmployeeForm {
            wedding_date: "N/A".to_string(),
            ..create_test_form()
        };
        assert_eq!(form.into_employee().unwrap().wedding_date(), None);
    }

    #[test]
    fn test_into_employee_invalid_dates() {
        let form = EmployeeForm {
            date_of_birth: "1985-02-14".to_string(),
            ..create_test_form()
        };
        assert!(matches!(
            form.into_employee(),
            Err(EmployeeError::InvalidInput(_))
        ));

        let form = EmployeeForm {
            wedding_date: "31-02-2010".to_string(),
            ..create_test_form()
        };
        assert!(matches!(
            form.into_employee(),
            Err(EmployeeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_into_employee_blank_name() {
        let form = EmployeeForm {
            first_name: "  ".to_string(),
            ..create_test_form()
        };
        let err = form.into_employee().unwrap_err();
        assert_eq!(err.to_string(), "First name cannot be empty");
    }
}
