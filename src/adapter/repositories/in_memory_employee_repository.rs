//! In-Memory Employee Repository Implementation
//!
//! EmployeeRepositoryのインメモリ実装（Mutexで保護したVec）

use log::{info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::employee::Employee;
use crate::domain::errors::Result;
use crate::domain::repositories::employee_repository::EmployeeRepository;

/// インメモリの従業員リポジトリ
///
/// 登録順を保持する。全操作は単一のロックで直列化される
pub struct InMemoryEmployeeRepository {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        info!("InMemoryEmployeeRepository initialized");
        Self {
            employees: Mutex::new(Vec::new()),
        }
    }

    // Vec は途中状態を持たないので、ポイズンされても中身はそのまま使える
    fn lock(&self) -> MutexGuard<'_, Vec<Employee>> {
        self.employees.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn save(&self, employee: Employee) {
        info!("Employee saved: {} (id: {})", employee.full_name(), employee.id());
        self.lock().push(employee);
    }

    fn save_if_absent(&self, employee: Employee) -> bool {
        let mut employees = self.lock();
        if employees
            .iter()
            .any(|existing| existing.has_first_name(employee.first_name()))
        {
            warn!(
                "Employee with firstName '{}' already stored, skipping",
                employee.first_name()
            );
            return false;
        }

        info!("Employee saved: {} (id: {})", employee.full_name(), employee.id());
        employees.push(employee);
        true
    }

    fn find_by_first_name(&self, first_name: &str) -> Option<Employee> {
        info!("Searching for employee with firstName: {}", first_name);
        self.lock()
            .iter()
            .find(|employee| employee.has_first_name(first_name))
            .cloned()
    }

    fn find_all_by_first_name(&self, first_name: &str) -> Vec<Employee> {
        info!("Searching for all employees with firstName: {}", first_name);
        self.lock()
            .iter()
            .filter(|employee| employee.has_first_name(first_name))
            .cloned()
            .collect()
    }

    fn find_all(&self) -> Vec<Employee> {
        let employees = self.lock();
        info!("Retrieving all employees. Total count: {}", employees.len());
        employees.clone()
    }

    fn update_email_and_phone(
        &self,
        first_name: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<bool> {
        info!("Attempting to update email and phone for: {}", first_name);

        let mut employees = self.lock();
        let Some(slot) = employees
            .iter_mut()
            .find(|employee| employee.has_first_name(first_name))
        else {
            warn!("Employee not found for update: {}", first_name);
            return Ok(false);
        };

        *slot = slot.with_contact(email, phone_number)?;
        info!(
            "Employee updated successfully: {} (id: {})",
            first_name,
            slot.id()
        );
        Ok(true)
    }

    fn delete_by_first_name(&self, first_name: &str) -> bool {
        info!("Attempting to delete employee: {}", first_name);

        let mut employees = self.lock();
        let before = employees.len();
        employees.retain(|employee| {
            let matched = employee.has_first_name(first_name);
            if matched {
                info!("Removing employee id: {}", employee.id());
            }
            !matched
        });
        let removed = before - employees.len();

        if removed > 0 {
            info!("Deleted {} employee(s) with firstName: {}", removed, first_name);
        } else {
            warn!("Employee not found for deletion: {}", first_name);
        }

        removed > 0
    }

    fn exists_by_first_name(&self, first_name: &str) -> bool {
        self.lock()
            .iter()
            .any(|employee| employee.has_first_name(first_name))
    }

    fn count(&self) -> usize {
        self.lock().len()
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}
