//! # Driver Layer (Presentation)
//!
//! CLIと対話メニューを提供
//!
//! ## 特徴
//!
//! - サービスを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **menu**: 対話メニュー
//! - **seed**: サンプルデータ
//! - **workflow**: 組み立てとセッション全体のオーケストレーション

pub mod cli;
pub mod menu;
pub mod seed;
pub mod workflow;

pub use cli::Args;
pub use workflow::EmployeeManagementWorkflow;
