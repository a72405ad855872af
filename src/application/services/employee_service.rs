//! # Employee Service
//!
//! 入力検証と業務ルールを適用し、リポジトリを操作するサービス

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::{info, warn};

use crate::application::dto::employee_views::{FirstNameAndEmail, FirstNameAndPhone};
use crate::domain::entities::employee::Employee;
use crate::domain::errors::{EmployeeError, Result};
use crate::domain::repositories::employee_repository::EmployeeRepository;
use crate::domain::services::input_validator::InputValidator;

/// 上位何名を「高給与」として返すか
const TOP_PAID_LIMIT: usize = 3;

/// 従業員サービス
///
/// 業務ルール違反（形式エラー、重複、該当なし）を返す唯一の層
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// 新しいサービスを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - 従業員リポジトリ
    pub fn new(repository: Arc<R>) -> Self {
        info!("EmployeeService initialized");
        Self { repository }
    }

    /// 従業員を登録する
    ///
    /// # Errors
    ///
    /// - メールアドレスまたは電話番号の形式が不正な場合に `InvalidInput`
    /// - 同じ名（大文字小文字を区別しない）の従業員が既に存在する場合に `DuplicateEmployee`
    pub fn add_employee(&self, employee: Employee) -> Result<()> {
        info!("Adding employee: {}", employee.full_name());

        validate_contact(employee.email(), employee.phone_number())?;

        let full_name = employee.full_name();
        let first_name = employee.first_name().to_string();

        // 存在確認と追加はリポジトリ側で原子的に行う
        if !self.repository.save_if_absent(employee) {
            return Err(reject(EmployeeError::duplicate(format!(
                "Employee with firstName '{}' already exists",
                first_name
            ))));
        }

        info!("Employee added successfully: {}", full_name);
        Ok(())
    }

    /// 名で従業員を検索する（大文字小文字を区別しない）
    ///
    /// # Errors
    ///
    /// 該当者がいない場合に `NotFound`
    pub fn get_employees_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>> {
        info!("Getting employees by firstName: {}", first_name);

        let employees = self.repository.find_all_by_first_name(first_name);
        if employees.is_empty() {
            return Err(reject(EmployeeError::not_found(format!(
                "No employees found with firstName: {}",
                first_name
            ))));
        }

        info!(
            "Found {} employee(s) with firstName: {}",
            employees.len(),
            first_name
        );
        Ok(employees)
    }

    /// 全従業員の名と電話番号を登録順で返す
    pub fn get_first_name_and_phone(&self) -> Vec<FirstNameAndPhone> {
        info!("Getting firstName and phone for all employees");

        self.repository
            .find_all()
            .iter()
            .map(FirstNameAndPhone::from)
            .collect()
    }

    /// メールアドレスと電話番号を更新する
    ///
    /// # Errors
    ///
    /// - メールアドレスまたは電話番号の形式が不正な場合に `InvalidInput`
    /// - 該当者がいない場合に `NotFound`
    pub fn update_email_and_phone(
        &self,
        first_name: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<()> {
        info!("Updating email and phone for: {}", first_name);

        validate_contact(email, phone_number)?;

        if !self
            .repository
            .update_email_and_phone(first_name, email, phone_number)?
        {
            return Err(reject(EmployeeError::not_found(format!(
                "Employee not found with firstName: {}",
                first_name
            ))));
        }

        info!("Employee updated successfully: {}", first_name);
        Ok(())
    }

    /// 名が一致する全ての従業員を削除する
    ///
    /// # Errors
    ///
    /// 1件も削除されなかった場合に `NotFound`
    pub fn delete_by_first_name(&self, first_name: &str) -> Result<()> {
        info!("Deleting employee by firstName: {}", first_name);

        if !self.repository.delete_by_first_name(first_name) {
            return Err(reject(EmployeeError::not_found(format!(
                "Employee not found with firstName: {}",
                first_name
            ))));
        }

        info!("Employee deleted successfully: {}", first_name);
        Ok(())
    }

    /// 指定日が誕生日の従業員（名とメールアドレス）
    pub fn get_employees_with_birthday_on(&self, date: NaiveDate) -> Vec<FirstNameAndEmail> {
        info!("Finding employees with birthday on: {}", date);

        self.repository
            .find_all()
            .iter()
            .filter(|employee| employee.has_birthday_on(date))
            .map(FirstNameAndEmail::from)
            .collect()
    }

    /// 指定日が結婚記念日の従業員（名と電話番号）
    pub fn get_employees_with_anniversary_on(&self, date: NaiveDate) -> Vec<FirstNameAndPhone> {
        info!("Finding employees with anniversary on: {}", date);

        self.repository
            .find_all()
            .iter()
            .filter(|employee| employee.has_anniversary_on(date))
            .map(FirstNameAndPhone::from)
            .collect()
    }

    /// 登録件数
    pub fn get_employee_count(&self) -> usize {
        let count = self.repository.count();
        info!("Total employee count: {}", count);
        count
    }

    /// 部署ごとの平均給与
    ///
    /// 部署名は完全一致（大文字小文字を区別する）でグループ化し、部署名順で返す
    pub fn get_average_salary_by_department(&self) -> BTreeMap<String, f64> {
        info!("Calculating average salary by department");

        let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for employee in self.repository.find_all() {
            let entry = totals
                .entry(employee.department().to_string())
                .or_insert((0.0, 0));
            entry.0 += employee.salary();
            entry.1 += 1;
        }

        totals
            .into_iter()
            .map(|(department, (sum, count))| (department, sum / count as f64))
            .collect()
    }

    /// 給与上位3名を給与の降順で返す
    ///
    /// 同額の場合は登録順を保つ（安定ソート）
    pub fn get_top_three_highest_paid(&self) -> Vec<Employee> {
        info!("Finding top {} highest paid employees", TOP_PAID_LIMIT);

        let mut employees = self.repository.find_all();
        employees.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
        employees.truncate(TOP_PAID_LIMIT);
        employees
    }
}

/// メールアドレスと電話番号の形式を検証
fn validate_contact(email: &str, phone_number: &str) -> Result<()> {
    if !InputValidator::is_valid_email(email) {
        return Err(reject(EmployeeError::invalid_input(format!(
            "Invalid email format: {}",
            email
        ))));
    }

    if !InputValidator::is_valid_phone(phone_number) {
        return Err(reject(EmployeeError::invalid_input(format!(
            "Invalid phone number format: {}",
            phone_number
        ))));
    }

    Ok(())
}

fn reject(error: EmployeeError) -> EmployeeError {
    warn!("{}", error);
    error
}
