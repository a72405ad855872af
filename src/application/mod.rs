//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 入出力の詳細（メニュー、端末）は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **services**: アプリケーションサービス

pub mod dto;
pub mod services;
