//! # Employee Entity
//!
//! 従業員のドメインエンティティ

use std::fmt;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::services::input_validator::InputValidator;

/// 従業員の内部識別子
///
/// 検索キーには使わない。更新（レコード置き換え）後も同じ値を保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 従業員のドメインエンティティ
///
/// 不変の値オブジェクトとして扱う。フィールドを直接変更する手段はなく、
/// 更新は [`Employee::with_contact`] で新しい値を作って置き換える
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    department: String,
    address: String,
    email: String,
    phone_number: String,
    date_of_birth: NaiveDate,
    wedding_date: Option<NaiveDate>,
    salary: f64,
}

impl Employee {
    /// 新しい従業員を作成
    ///
    /// # Arguments
    ///
    /// * `first_name` - 名（検索キー）
    /// * `last_name` - 姓
    /// * `department` - 部署
    /// * `address` - 住所（検証なし）
    /// * `email` - メールアドレス
    /// * `phone_number` - 電話番号
    /// * `date_of_birth` - 生年月日
    /// * `wedding_date` - 結婚記念日（未登録の場合は `None`）
    /// * `salary` - 給与
    ///
    /// # Errors
    ///
    /// 必須項目が空白の場合、または給与が負の値の場合に `InvalidInput` を返す
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        date_of_birth: NaiveDate,
        wedding_date: Option<NaiveDate>,
        salary: f64,
    ) -> Result<Self> {
        let employee = Self {
            id: EmployeeId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            address: address.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            date_of_birth,
            wedding_date,
            // -0.0 は 0.0 として保持する
            salary: salary + 0.0,
        };
        employee.check_invariants()?;
        Ok(employee)
    }

    fn check_invariants(&self) -> Result<()> {
        InputValidator::validate_not_empty(&self.first_name, "First name")?;
        InputValidator::validate_not_empty(&self.last_name, "Last name")?;
        InputValidator::validate_not_empty(&self.department, "Department")?;
        InputValidator::validate_not_empty(&self.email, "Email")?;
        InputValidator::validate_not_empty(&self.phone_number, "Phone number")?;
        InputValidator::validate_non_negative(self.salary, "Salary")
    }

    /// メールアドレスと電話番号だけを差し替えた新しい値を返す
    ///
    /// 識別子を含むその他のフィールドはそのまま引き継ぐ
    ///
    /// # Errors
    ///
    /// 差し替え後の値が不変条件を満たさない場合に `InvalidInput` を返す
    pub fn with_contact(&self, email: &str, phone_number: &str) -> Result<Self> {
        let updated = Self {
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            ..self.clone()
        };
        updated.check_invariants()?;
        Ok(updated)
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn wedding_date(&self) -> Option<NaiveDate> {
        self.wedding_date
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// 氏名（"名 姓"）
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 名が一致するか（大文字小文字を区別しない）
    ///
    /// 文字単位で小文字化して比較する。文脈依存の変換（語末のシグマなど）は行わない
    pub fn has_first_name(&self, first_name: &str) -> bool {
        self.first_name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(first_name.chars().flat_map(char::to_lowercase))
    }

    /// 指定日が誕生日か（年は無視し、月日のみ比較）
    pub fn has_birthday_on(&self, date: NaiveDate) -> bool {
        same_month_and_day(self.date_of_birth, date)
    }

    /// 指定日が結婚記念日か（年は無視）。結婚記念日が未登録なら常に `false`
    pub fn has_anniversary_on(&self, date: NaiveDate) -> bool {
        self.wedding_date
            .is_some_and(|wedding| same_month_and_day(wedding, date))
    }
}

fn same_month_and_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee::new(
            "Priya",
            "Sharma",
            "HR",
            "456 Park Street, Mumbai",
            "priya.sharma@company.com",
            "9876543211",
            date(1990, 3, 20),
            Some(date(2015, 6, 15)),
            65000.0,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_blank_required_fields() {
        let dob = date(1990, 1, 1);

        let err = Employee::new(" ", "L", "D", "", "a@b.co", "9876543210", dob, None, 1.0)
            .unwrap_err();
        assert!(err.to_string().contains("First name"));

        let err = Employee::new("F", "", "D", "", "a@b.co", "9876543210", dob, None, 1.0)
            .unwrap_err();
        assert!(err.to_string().contains("Last name"));

        let err = Employee::new("F", "L", "\t", "", "a@b.co", "9876543210", dob, None, 1.0)
            .unwrap_err();
        assert!(err.to_string().contains("Department"));

        let err =
            Employee::new("F", "L", "D", "", "", "9876543210", dob, None, 1.0).unwrap_err();
        assert!(err.to_string().contains("Email"));

        let err = Employee::new("F", "L", "D", "", "a@b.co", "", dob, None, 1.0).unwrap_err();
        assert!(err.to_string().contains("Phone number"));
    }

    #[test]
    fn test_new_allows_blank_address() {
        let result = Employee::new(
            "F",
            "L",
            "D",
            "",
            "a@b.co",
            "9876543210",
            date(1990, 1, 1),
            None,
            0.0,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_rejects_negative_salary() {
        let result = Employee::new(
            "F",
            "L",
            "D",
            "",
            "a@b.co",
            "9876543210",
            date(1990, 1, 1),
            None,
            -0.01,
        );
        assert!(result.unwrap_err().to_string().contains("Salary"));
    }

    #[test]
    fn test_new_normalizes_negative_zero_salary() {
        let employee = Employee::new(
            "F",
            "L",
            "D",
            "",
            "a@b.co",
            "9876543210",
            date(1990, 1, 1),
            None,
            -0.0,
        )
        .unwrap();

        assert_eq!(employee.salary(), 0.0);
        assert!(employee.salary().is_sign_positive());
    }

    #[test]
    fn test_has_birthday_on_ignores_year() {
        let employee = create_test_employee();

        assert!(employee.has_birthday_on(date(2030, 3, 20)));
        assert!(!employee.has_birthday_on(date(2030, 3, 21)));
        assert!(!employee.has_birthday_on(date(2030, 4, 20)));
    }

    #[test]
    fn test_has_anniversary_on() {
        let employee = create_test_employee();

        assert!(employee.has_anniversary_on(date(2024, 6, 15)));
        assert!(!employee.has_anniversary_on(date(2024, 6, 16)));
    }

    #[test]
    fn test_has_anniversary_on_without_wedding_date() {
        let employee = Employee::new(
            "Sneha",
            "Reddy",
            "IT",
            "",
            "sneha.reddy@company.com",
            "9876543213",
            date(1995, 11, 25),
            None,
            72000.0,
        )
        .unwrap();

        assert!(!employee.has_anniversary_on(date(1995, 11, 25)));
    }

    #[test]
    fn test_has_first_name_is_case_insensitive() {
        let employee = create_test_employee();

        assert!(employee.has_first_name("priya"));
        assert!(employee.has_first_name("PRIYA"));
        assert!(!employee.has_first_name("Priyanka"));
        assert!(!employee.has_first_name("Priy"));
    }

    #[test]
    fn test_has_first_name_compares_per_character() {
        let employee = Employee::new(
            "ΣΑΣ",
            "Papadopoulos",
            "IT",
            "",
            "sas@company.com",
            "9876543210",
            date(1990, 1, 1),
            None,
            1.0,
        )
        .unwrap();

        assert!(employee.has_first_name("σασ"));
        assert!(employee.has_first_name("Σασ"));
        assert!(!employee.has_first_name("σα"));
    }

    #[test]
    fn test_with_contact_replaces_only_contact_fields() {
        let original = create_test_employee();
        let updated = original
            .with_contact("new.mail@company.com", "9000000000")
            .unwrap();

        assert_eq!(updated.email(), "new.mail@company.com");
        assert_eq!(updated.phone_number(), "9000000000");
        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.first_name(), original.first_name());
        assert_eq!(updated.last_name(), original.last_name());
        assert_eq!(updated.department(), original.department());
        assert_eq!(updated.address(), original.address());
        assert_eq!(updated.date_of_birth(), original.date_of_birth());
        assert_eq!(updated.wedding_date(), original.wedding_date());
        assert_eq!(updated.salary(), original.salary());

        // 元の値は変更されない
        assert_eq!(original.email(), "priya.sharma@company.com");
    }

    #[test]
    fn test_with_contact_rejects_blank_values() {
        let original = create_test_employee();
        assert!(original.with_contact("", "9000000000").is_err());
        assert!(original.with_contact("a@b.co", " ").is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(create_test_employee().full_name(), "Priya Sharma");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(create_test_employee().id(), create_test_employee().id());
    }

    #[test]
    fn test_id_display_is_hyphenated_uuid() {
        let id = create_test_employee().id().to_string();
        assert_eq!(Uuid::parse_str(&id).unwrap().to_string(), id);
        assert_eq!(id.len(), 36);
    }
}
