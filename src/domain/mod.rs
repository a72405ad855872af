//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - 保存先（インメモリ等）について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Employee）
//! - **errors**: ドメインエラー（InvalidInput, DuplicateEmployee, NotFound）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（入力検証）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
