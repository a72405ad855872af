//! # Application Services
//!
//! ドメインのエンティティとリポジトリを組み合わせたビジネスフロー
//!
//! - **EmployeeService**: 従業員の登録・検索・更新・削除と集計

pub mod employee_service;
