use crate::domain::{BookId, CustomerName, LedgerEntry};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出履歴ポート
///
/// 貸出・返却の履歴は追記専用ログに保存される不変の事実。
/// このポートには更新・削除の操作を持たせない。
#[async_trait]
pub trait Ledger: Send + Sync {
    /// 履歴レコードを追記する
    async fn append(&self, entry: LedgerEntry) -> Result<()>;

    /// 書籍の履歴を追記順に取得する
    async fn find_by_book_id(&self, book_id: BookId) -> Result<Vec<LedgerEntry>>;

    /// 利用者の履歴を追記順に取得する
    async fn find_by_customer(&self, customer_name: &CustomerName) -> Result<Vec<LedgerEntry>>;
}
