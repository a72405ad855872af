//! Interactive Menu
//!
//! テキストメニューによる対話ループ

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::application::dto::employee_form::EmployeeForm;
use crate::application::services::employee_service::EmployeeService;
use crate::domain::entities::employee::Employee;
use crate::domain::errors::EmployeeError;
use crate::domain::repositories::employee_repository::EmployeeRepository;
use crate::domain::services::input_validator::InputValidator;

/// メニュー操作のエラー
///
/// 入力終了はエラーではなく終了の合図として扱う
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("input closed")]
    EndOfInput,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type MenuResult<T> = std::result::Result<T, MenuError>;

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    FindByFirstName,
    ListFirstNameAndPhone,
    UpdateEmailAndPhone,
    DeleteEmployee,
    BirthdaysOn,
    AnniversariesOn,
    EmployeeCount,
    AverageSalaryByDepartment,
    TopThreeHighestPaid,
    Exit,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::AddEmployee,
            2 => Self::FindByFirstName,
            3 => Self::ListFirstNameAndPhone,
            4 => Self::UpdateEmailAndPhone,
            5 => Self::DeleteEmployee,
            6 => Self::BirthdaysOn,
            7 => Self::AnniversariesOn,
            8 => Self::EmployeeCount,
            9 => Self::AverageSalaryByDepartment,
            10 => Self::TopThreeHighestPaid,
            11 => Self::Exit,
            other => return Err(other),
        })
    }
}

const MENU: &str = "
┌────────────────── MAIN MENU ──────────────────────┐
│  1.  Add Employee                                 │
│  2.  Get Employees by First Name                  │
│  3.  Get All Employees (First Name & Phone)       │
│  4.  Update Email & Phone                         │
│  5.  Delete Employee                              │
│  6.  Find Employees with Birthday on Date         │
│  7.  Find Employees with Anniversary on Date      │
│  8.  Get Employee Count                           │
│  9.  Get Average Salary by Department             │
│  10. Get Top 3 Highest Paid Employees             │
│  11. Exit                                         │
└───────────────────────────────────────────────────┘";

/// 対話メニュー
///
/// 入出力は任意の `BufRead` / `Write` に差し替えられる
pub struct Menu<'a, R: EmployeeRepository, I: BufRead, O: Write> {
    service: &'a EmployeeService<R>,
    input: I,
    output: O,
    currency_symbol: &'a str,
}

impl<'a, R: EmployeeRepository, I: BufRead, O: Write> Menu<'a, R, I, O> {
    pub fn new(
        service: &'a EmployeeService<R>,
        input: I,
        output: O,
        currency_symbol: &'a str,
    ) -> Self {
        Self {
            service,
            input,
            output,
            currency_symbol,
        }
    }

    /// 「Exit」が選ばれるか入力が終わるまでメニューを繰り返す
    ///
    /// # Errors
    ///
    /// 端末への入出力に失敗した場合のみエラーを返す。
    /// 業務エラーはメッセージを表示してループを続ける
    pub fn run(&mut self) -> MenuResult<()> {
        loop {
            match self.run_once() {
                Ok(true) => continue,
                Ok(false) | Err(MenuError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(
            self.output,
            "\nThank you for using Employee Management System!"
        )?;
        Ok(())
    }

    /// メニューを1回表示して選択された操作を実行する。続行する場合に `true`
    fn run_once(&mut self) -> MenuResult<bool> {
        writeln!(self.output, "{}", MENU)?;
        let choice = self.read_number::<i32>("Enter your choice: ")?;
        writeln!(self.output)?;

        let Ok(choice) = MenuChoice::try_from(choice) else {
            writeln!(
                self.output,
                "Invalid choice! Please enter a number between 1 and 11."
            )?;
            return Ok(true);
        };

        match choice {
            MenuChoice::AddEmployee => self.add_employee()?,
            MenuChoice::FindByFirstName => self.find_by_first_name()?,
            MenuChoice::ListFirstNameAndPhone => self.list_first_name_and_phone()?,
            MenuChoice::UpdateEmailAndPhone => self.update_email_and_phone()?,
            MenuChoice::DeleteEmployee => self.delete_employee()?,
            MenuChoice::BirthdaysOn => self.birthdays_on()?,
            MenuChoice::AnniversariesOn => self.anniversaries_on()?,
            MenuChoice::EmployeeCount => self.employee_count()?,
            MenuChoice::AverageSalaryByDepartment => self.average_salary_by_department()?,
            MenuChoice::TopThreeHighestPaid => self.top_three_highest_paid()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn add_employee(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Add New Employee ═══\n")?;

        let form = EmployeeForm {
            first_name: self.read_string("First Name: ")?,
            last_name: self.read_string("Last Name: ")?,
            department: self.read_string("Department: ")?,
            address: self.read_string("Address: ")?,
            email: self.read_string("Email: ")?,
            phone_number: self.read_string("Phone Number (10 digits): ")?,
            date_of_birth: self.read_string("Date of Birth (dd-MM-yyyy): ")?,
            wedding_date: self
                .read_string("Wedding Date (dd-MM-yyyy) [Press Enter if N/A]: ")?,
            salary: self.read_number::<f64>("Salary: ")?,
        };

        let service = self.service;
        match form
            .into_employee()
            .and_then(|employee| service.add_employee(employee))
        {
            Ok(()) => writeln!(self.output, "\n✓ Employee added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn find_by_first_name(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Get Employees by First Name ═══\n")?;

        let first_name = self.read_string("Enter First Name: ")?;
        match self.service.get_employees_by_first_name(&first_name) {
            Ok(employees) => {
                writeln!(self.output, "\nFound {} employee(s):\n", employees.len())?;
                for employee in &employees {
                    writeln!(
                        self.output,
                        "{}",
                        format_employee(employee, self.currency_symbol)
                    )?;
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn list_first_name_and_phone(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ All Employees (First Name & Phone) ═══\n")?;

        let views = self.service.get_first_name_and_phone();
        if views.is_empty() {
            writeln!(self.output, "No employees found.")?;
            return Ok(());
        }

        writeln!(self.output, "{:<20} {:<15}", "First Name", "Phone Number")?;
        writeln!(self.output, "{}", "─".repeat(35))?;
        for view in &views {
            writeln!(
                self.output,
                "{:<20} {:<15}",
                view.first_name, view.phone_number
            )?;
        }
        writeln!(self.output, "\nTotal: {} employee(s)", views.len())?;
        Ok(())
    }

    fn update_email_and_phone(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Update Email & Phone ═══\n")?;

        let first_name = self.read_string("Enter First Name: ")?;
        let email = self.read_string("New Email: ")?;
        let phone_number = self.read_string("New Phone Number (10 digits): ")?;

        match self
            .service
            .update_email_and_phone(&first_name, &email, &phone_number)
        {
            Ok(()) => writeln!(self.output, "\n✓ Employee updated successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete_employee(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Delete Employee ═══\n")?;

        let first_name = self.read_string("Enter First Name to Delete: ")?;
        let confirm = self.read_string(&format!(
            "Are you sure you want to delete '{}'? (yes/no): ",
            first_name
        ))?;

        if !confirm.eq_ignore_ascii_case("yes") {
            writeln!(self.output, "\n✗ Deletion cancelled.")?;
            return Ok(());
        }

        match self.service.delete_by_first_name(&first_name) {
            Ok(()) => writeln!(self.output, "\n✓ Employee deleted successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn birthdays_on(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Find Employees with Birthday ═══\n")?;

        let date_str = self.read_string("Enter Date (dd-MM-yyyy): ")?;
        let date = match InputValidator::parse_date(&date_str) {
            Ok(date) => date,
            Err(e) => return self.report(&e),
        };

        let matches = self.service.get_employees_with_birthday_on(date);
        if matches.is_empty() {
            writeln!(
                self.output,
                "\nNo employees found with birthday on {}",
                date_str
            )?;
            return Ok(());
        }

        writeln!(self.output, "\nEmployees with birthday on {}:\n", date_str)?;
        writeln!(self.output, "{:<20} {:<30}", "First Name", "Email")?;
        writeln!(self.output, "{}", "─".repeat(50))?;
        for view in &matches {
            writeln!(self.output, "{:<20} {:<30}", view.first_name, view.email)?;
        }
        writeln!(self.output, "\nTotal: {} employee(s)", matches.len())?;
        Ok(())
    }

    fn anniversaries_on(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Find Employees with Anniversary ═══\n")?;

        let date_str = self.read_string("Enter Date (dd-MM-yyyy): ")?;
        let date = match InputValidator::parse_date(&date_str) {
            Ok(date) => date,
            Err(e) => return self.report(&e),
        };

        let matches = self.service.get_employees_with_anniversary_on(date);
        if matches.is_empty() {
            writeln!(
                self.output,
                "\nNo employees found with anniversary on {}",
                date_str
            )?;
            return Ok(());
        }

        writeln!(self.output, "\nEmployees with anniversary on {}:\n", date_str)?;
        writeln!(self.output, "{:<20} {:<15}", "First Name", "Phone Number")?;
        writeln!(self.output, "{}", "─".repeat(35))?;
        for view in &matches {
            writeln!(
                self.output,
                "{:<20} {:<15}",
                view.first_name, view.phone_number
            )?;
        }
        writeln!(self.output, "\nTotal: {} employee(s)", matches.len())?;
        Ok(())
    }

    fn employee_count(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Employee Count ═══\n")?;
        writeln!(
            self.output,
            "Total number of employees: {}",
            self.service.get_employee_count()
        )?;
        Ok(())
    }

    fn average_salary_by_department(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Average Salary by Department ═══\n")?;

        let averages = self.service.get_average_salary_by_department();
        if averages.is_empty() {
            writeln!(self.output, "No employees found.")?;
            return Ok(());
        }

        writeln!(self.output, "{:<20} {:<20}", "Department", "Average Salary")?;
        writeln!(self.output, "{}", "─".repeat(40))?;
        for (department, average) in &averages {
            writeln!(
                self.output,
                "{:<20} {}{:.2}",
                department, self.currency_symbol, average
            )?;
        }
        Ok(())
    }

    fn top_three_highest_paid(&mut self) -> MenuResult<()> {
        writeln!(self.output, "═══ Top 3 Highest Paid Employees ═══\n")?;

        let top = self.service.get_top_three_highest_paid();
        if top.is_empty() {
            writeln!(self.output, "No employees found.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "{:<5} {:<25} {:<20} {:<15}",
            "Rank", "Name", "Department", "Salary"
        )?;
        writeln!(self.output, "{}", "─".repeat(65))?;
        for (rank, employee) in top.iter().enumerate() {
            writeln!(
                self.output,
                "{:<5} {:<25} {:<20} {}{:.2}",
                rank + 1,
                employee.full_name(),
                employee.department(),
                self.currency_symbol,
                employee.salary()
            )?;
        }
        Ok(())
    }

    fn report(&mut self, error: &EmployeeError) -> MenuResult<()> {
        writeln!(self.output, "✗ Error: {}", error)?;
        Ok(())
    }

    /// プロンプトを表示して1行読み込む（前後の空白は除去）
    fn read_string(&mut self, prompt: &str) -> MenuResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// 数値が入力されるまで繰り返し読み込む
    fn read_number<T: std::str::FromStr>(&mut self, prompt: &str) -> MenuResult<T> {
        loop {
            let line = self.read_string(prompt)?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a valid number.")?,
            }
        }
    }
}

/// 従業員の詳細表示
pub fn format_employee(employee: &Employee, currency_symbol: &str) -> String {
    let rule = "-".repeat(40);
    format!(
        "{rule}\n\
         Name: {}\n\
         Department: {}\n\
         Address: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Date of Birth: {}\n\
         Wedding Date: {}\n\
         Salary: {}{:.2}\n\
         {rule}",
        employee.full_name(),
        employee.department(),
        employee.address(),
        employee.email(),
        employee.phone_number(),
        InputValidator::format_date(Some(employee.date_of_birth())),
        InputValidator::format_date(employee.wedding_date()),
        currency_symbol,
        employee.salary(),
    )
}
