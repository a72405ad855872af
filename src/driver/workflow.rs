//! Workflow Orchestration
//!
//! 依存関係の組み立てと対話セッションの実行

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::info;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::in_memory_employee_repository::InMemoryEmployeeRepository;
use crate::application::services::employee_service::EmployeeService;
use crate::domain::repositories::employee_repository::EmployeeRepository;

use super::menu::Menu;
use super::seed::seed_sample_data;

const WELCOME: &str = "\
╔════════════════════════════════════════════════════════╗
║          EMPLOYEE MANAGEMENT SYSTEM                    ║
║              In-Memory Data Store                      ║
╚════════════════════════════════════════════════════════╝";

/// Employee Management Workflow
///
/// リポジトリとサービスを生成して保持する。ストアの寿命はこの値と同じ
pub struct EmployeeManagementWorkflow {
    config: Config,
    repository: Arc<InMemoryEmployeeRepository>,
    service: EmployeeService<InMemoryEmployeeRepository>,
}

impl EmployeeManagementWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        info!("Starting Employee Management System");

        let repository = Arc::new(InMemoryEmployeeRepository::new());
        let service = EmployeeService::new(repository.clone());

        Self {
            config,
            repository,
            service,
        }
    }

    pub fn service(&self) -> &EmployeeService<InMemoryEmployeeRepository> {
        &self.service
    }

    /// Run the interactive session, seeding with today's date
    pub fn execute<I: BufRead, O: Write>(&self, input: I, output: O) -> Result<()> {
        self.execute_on(Local::now().date_naive(), input, output)
    }

    /// Run the interactive session with an explicit "today"
    pub fn execute_on<I: BufRead, O: Write>(
        &self,
        today: NaiveDate,
        input: I,
        mut output: O,
    ) -> Result<()> {
        if self.config.seed_sample_data {
            let added = seed_sample_data(&self.service, today);
            writeln!(output, "✓ Sample data loaded ({} employees)\n", added)?;
        }

        writeln!(output, "{}", WELCOME)?;

        Menu::new(&self.service, input, output, &self.config.currency_symbol)
            .run()
            .context("Interactive menu failed")?;

        Ok(())
    }

    /// Tear down the store; every record is discarded
    pub fn shutdown(self) {
        info!(
            "Employee Management System terminated ({} record(s) discarded)",
            self.repository.count()
        );
    }
}
