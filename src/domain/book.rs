use super::{BookAction, BookId, RowVersion, StockError};

/// 書籍の在庫レコード
///
/// `actual_quantity`と`row_version`の組が唯一の共有可変リソース。
/// 書き換えはストレージ層の条件付き書き込み（`StockRepository::write_if_version_matches`）
/// からのみ行われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: BookId,

    // 書誌情報（在庫調整では触らない）
    pub name: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,

    /// 現在貸出可能な冊数
    pub actual_quantity: u32,
    pub row_version: RowVersion,
}

impl BookRecord {
    /// 新しい在庫レコード（バージョン0）
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i32,
        actual_quantity: u32,
    ) -> Self {
        Self {
            id: BookId::new(),
            name: name.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
            actual_quantity,
            row_version: RowVersion::initial(),
        }
    }
}

/// 在庫操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockOperation {
    Borrow,
    Return,
}

impl StockOperation {
    /// 履歴に記録するアクション
    pub fn ledger_action(self) -> BookAction {
        match self {
            StockOperation::Borrow => BookAction::Borrowed,
            StockOperation::Return => BookAction::Returned,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockOperation::Borrow => "borrow",
            StockOperation::Return => "return",
        }
    }

    /// 純粋関数：現在の在庫数に操作を適用した後の在庫数
    ///
    /// ビジネスルール：
    /// - 在庫0冊の貸出は不可
    /// - 返却には上限を設けない（上限チェックは在庫登録側の責務）
    pub fn apply(self, actual_quantity: u32) -> Result<u32, StockError> {
        match self {
            StockOperation::Borrow => actual_quantity
                .checked_sub(1)
                .ok_or(StockError::OutOfStock),
            StockOperation::Return => actual_quantity
                .checked_add(1)
                .ok_or(StockError::QuantityOverflow),
        }
    }
}

/// 適用済みの在庫遷移
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub book_id: BookId,
    pub operation: StockOperation,
    pub previous_quantity: u32,
    pub new_quantity: u32,
    pub previous_version: RowVersion,
    pub new_version: RowVersion,
}
