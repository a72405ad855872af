//! # Employee Repository Trait
//!
//! 従業員レコードの保存と検索を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::employee::Employee;
use crate::domain::errors::Result;

/// 従業員リポジトリ
///
/// 名（大文字小文字を区別しない）をキーとして従業員を保存・検索する。
/// 業務ルール（重複禁止など）は検証せず、保存の仕組みだけを担当する。
/// 各操作は外部から見て原子的に実行されること
#[cfg_attr(test, automock)]
pub trait EmployeeRepository: Send + Sync {
    /// 従業員を無条件に末尾へ追加する
    fn save(&self, employee: Employee);

    /// 同じ名の従業員が存在しない場合のみ追加する
    ///
    /// 存在確認と追加は同じロックの中で行う
    ///
    /// # Returns
    ///
    /// 追加した場合に `true`
    fn save_if_absent(&self, employee: Employee) -> bool;

    /// 名が一致する最初の従業員を返す
    fn find_by_first_name(&self, first_name: &str) -> Option<Employee>;

    /// 名が一致する全ての従業員を登録順で返す
    fn find_all_by_first_name(&self, first_name: &str) -> Vec<Employee>;

    /// 全従業員のコピーを登録順で返す
    ///
    /// 返されたベクターを変更してもストアには影響しない
    fn find_all(&self) -> Vec<Employee>;

    /// 名が一致する最初の従業員のメールアドレスと電話番号を更新する
    ///
    /// レコードは同じ位置で新しい値に置き換える
    ///
    /// # Returns
    ///
    /// 更新した場合に `true`、該当者がいない場合に `false`
    ///
    /// # Errors
    ///
    /// 置き換え後の値がエンティティの不変条件を満たさない場合
    fn update_email_and_phone(
        &self,
        first_name: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<bool>;

    /// 名が一致する全ての従業員を削除する
    ///
    /// # Returns
    ///
    /// 1件以上削除した場合に `true`
    fn delete_by_first_name(&self, first_name: &str) -> bool;

    /// 名が一致する従業員が存在するか
    fn exists_by_first_name(&self, first_name: &str) -> bool;

    /// 登録件数
    fn count(&self) -> usize;
}
