//! Adapter Layer
//!
//! 外部（設定ファイル、保存先）との統合

pub mod config;
pub mod repositories;
