//! # Data Transfer Objects
//!
//! - **EmployeeForm**: 生の入力値から従業員を組み立てるフォーム
//! - **employee_views**: 一部フィールドのみのビュー

pub mod employee_form;
pub mod employee_views;
