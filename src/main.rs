//! Employee Store - In-Memory Employee Records
//!
//! 対話メニューで従業員レコードを管理

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io;

use anyhow::Result;
use clap::Parser;

use employee_store::adapter::config::Config;
use employee_store::driver::{Args, EmployeeManagementWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;
    if args.no_seed {
        config.seed_sample_data = false;
    }

    // Create workflow with injected dependencies
    let workflow = EmployeeManagementWorkflow::new(config);

    workflow.execute(io::stdin().lock(), io::stdout().lock())?;
    workflow.shutdown();

    Ok(())
}
