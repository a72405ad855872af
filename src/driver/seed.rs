//! Sample Data
//!
//! 起動時に登録するサンプル従業員

use chrono::NaiveDate;
use log::{info, warn};

use crate::application::dto::employee_form::EmployeeForm;
use crate::application::services::employee_service::EmployeeService;
use crate::domain::entities::employee::Employee;
use crate::domain::errors::Result;
use crate::domain::repositories::employee_repository::EmployeeRepository;
use crate::domain::services::input_validator::InputValidator;

/// サンプル従業員（名, 姓, 部署, 住所, メール, 電話番号, 生年月日, 結婚記念日, 給与）
///
/// 生年月日・結婚記念日の `None` は当日を表す
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    f64,
);

#[rustfmt::skip]
const SAMPLE_ROWS: [SampleRow; 7] = [
    ("Rajesh", "Kumar", "IT", "123 MG Road, Bangalore", "rajesh.kumar@company.com", "9876543210", None, Some("15-06-2015"), 75000.0),
    ("Priya", "Sharma", "HR", "456 Park Street, Mumbai", "priya.sharma@company.com", "9876543211", Some("20-03-1992"), None, 65000.0),
    ("Amit", "Patel", "Finance", "789 Anna Salai, Chennai", "amit.patel@company.com", "9876543212", Some("10-07-1988"), Some("05-12-2012"), 85000.0),
    ("Sneha", "Reddy", "IT", "321 Brigade Road, Bangalore", "sneha.reddy@company.com", "9876543213", Some("25-11-1995"), Some("N/A"), 72000.0),
    ("Vikram", "Singh", "Operations", "654 Connaught Place, Delhi", "vikram.singh@company.com", "9876543214", Some("14-02-1985"), Some("20-08-2010"), 95000.0),
    ("Ananya", "Iyer", "IT", "987 Banjara Hills, Hyderabad", "ananya.iyer@company.com", "9876543215", Some("05-09-1993"), Some("22-04-2018"), 78000.0),
    ("Arjun", "Mehta", "Finance", "147 Residency Road, Pune", "arjun.mehta@company.com", "9876543216", Some("30-12-1987"), Some("10-11-2013"), 88000.0),
];

/// サンプル従業員を作成
///
/// `today` を誕生日とする従業員（Rajesh）と、`today` を結婚記念日とする
/// 従業員（Priya）を1名ずつ含む
pub fn sample_employees(today: NaiveDate) -> Vec<Result<Employee>> {
    let today = InputValidator::format_date(Some(today));

    SAMPLE_ROWS
        .iter()
        .map(
            |&(first, last, department, address, email, phone, birth, wedding, salary)| {
                EmployeeForm {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    department: department.to_string(),
                    address: address.to_string(),
                    email: email.to_string(),
                    phone_number: phone.to_string(),
                    date_of_birth: birth.map_or_else(|| today.clone(), str::to_string),
                    wedding_date: wedding.map_or_else(|| today.clone(), str::to_string),
                    salary,
                }
                .into_employee()
            },
        )
        .collect()
}

/// サンプル従業員をサービス経由で登録する
///
/// 登録に失敗したレコードは警告を出して読み飛ばす
///
/// # Returns
///
/// 登録できた件数
pub fn seed_sample_data<R: EmployeeRepository>(
    service: &EmployeeService<R>,
    today: NaiveDate,
) -> usize {
    info!("Initializing sample data");

    let mut added = 0;
    for candidate in sample_employees(today) {
        match candidate.and_then(|employee| service.add_employee(employee)) {
            Ok(()) => added += 1,
            Err(e) => warn!("Failed to add sample employee: {}", e),
        }
    }

    info!("Sample data initialized: {} employee(s)", added);
    added
}
