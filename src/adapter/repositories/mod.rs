//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod in_memory_employee_repository;
