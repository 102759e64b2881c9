use thiserror::Error;

use crate::domain::{BookAction, BookId, CustomerNameError};

/// 在庫管理アプリケーション層のエラー
///
/// `OutOfStock`・`NotFound`・`Conflict`は業務上の結果（`Outcome`）であり、ここには含まれない。
#[derive(Debug, Error)]
pub enum StockApplicationError {
    /// 利用者名が不正
    #[error("Invalid customer name: {0}")]
    InvalidCustomerName(#[from] CustomerNameError),

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),

    /// 呼び出し元によるキャンセル
    #[error("Operation cancelled")]
    Cancelled,

    /// StockRepositoryのエラー
    #[error("Stock repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Ledgerの読み取りエラー
    #[error("Ledger error")]
    LedgerError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 在庫の書き込みは確定したが履歴の追記に失敗した（部分失敗）
    ///
    /// 在庫は巻き戻さない。履歴と在庫の突き合わせは運用側で行う。
    #[error("Stock for book {book_id} was updated but the {} ledger entry could not be appended", .action.as_str())]
    LedgerAppendFailed {
        book_id: BookId,
        action: BookAction,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, StockApplicationError>;
