use crate::domain::{self, BookId, RowVersion};

use super::errors::{Result, StockApplicationError};
use super::stock_service::ServiceDependencies;

/// 在庫と貸出履歴の突き合わせ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAudit {
    pub book_id: BookId,
    pub provisioned_total: u32,
    pub actual_quantity: u32,
    pub row_version: RowVersion,
    /// 未返却の貸出数
    pub outstanding_borrows: u64,
    /// 履歴から導いた在庫数（負になりうる）
    pub expected_quantity: i64,
}

impl StockAudit {
    pub fn is_consistent(&self) -> bool {
        self.expected_quantity == i64::from(self.actual_quantity)
    }

    /// 実在庫 - 期待値（正なら履歴が多すぎる、負なら履歴が足りない）
    pub fn drift(&self) -> i64 {
        i64::from(self.actual_quantity) - self.expected_quantity
    }
}

/// 在庫監査
///
/// `actual_quantity = 登録冊数 - 未返却の貸出数`が成り立っているかを確認する。
/// 在庫調整の中核はこの不変条件を強制しない（登録冊数を知らない）ため、
/// 履歴追記の部分失敗などで生じたずれを運用側が検出するために使う。
///
/// 処理中も貸出・返却は並行して進むため、静止状態でない場合の結果は参考値。
///
/// # 戻り値
/// 書籍が存在しない場合は`None`
pub async fn audit_stock(
    deps: &ServiceDependencies,
    book_id: BookId,
    provisioned_total: u32,
) -> Result<Option<StockAudit>> {
    let book = match deps
        .stock_repository
        .read_for_update(book_id)
        .await
        .map_err(StockApplicationError::RepositoryError)?
    {
        Some(book) => book,
        None => return Ok(None),
    };

    let entries = deps
        .ledger
        .find_by_book_id(book_id)
        .await
        .map_err(StockApplicationError::LedgerError)?;

    let outstanding_borrows = domain::outstanding_borrows(&entries);
    let expected_quantity = i64::from(provisioned_total) - outstanding_borrows as i64;

    let audit = StockAudit {
        book_id,
        provisioned_total,
        actual_quantity: book.actual_quantity,
        row_version: book.row_version,
        outstanding_borrows,
        expected_quantity,
    };

    if !audit.is_consistent() {
        tracing::warn!(
            book_id = %book_id,
            actual_quantity = audit.actual_quantity,
            expected_quantity = audit.expected_quantity,
            drift = audit.drift(),
            "stock does not match ledger"
        );
    }

    Ok(Some(audit))
}
