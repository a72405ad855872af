//! # Domain Services
//!
//! エンティティに属さないドメインロジック
//!
//! - **InputValidator**: 入力値の検証とパース

pub mod input_validator;
