//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// インメモリ従業員管理CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "employee-store")]
#[command(about = "In-memory employee record store with an interactive menu", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./employee-store.json")]
    pub config: String,

    /// Start with an empty store instead of the sample employees
    #[arg(long)]
    pub no_seed: bool,
}
