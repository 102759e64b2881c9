use thiserror::Error;

/// 在庫数の遷移エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StockError {
    /// 在庫がないため貸出不可
    #[error("book is out of stock")]
    OutOfStock,
    /// 返却による在庫数の桁あふれ
    #[error("stock quantity overflow")]
    QuantityOverflow,
}

/// 利用者名のエラー（値は実際の文字数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CustomerNameError {
    #[error("customer name must be at least 2 characters (got {0})")]
    TooShort(usize),
    #[error("customer name must be at most 1000 characters (got {0})")]
    TooLong(usize),
    /// NULなどの制御文字を含む
    #[error("customer name must not contain control characters")]
    ControlCharacter,
}

/// 貸出履歴レコードのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerEntryError {
    /// 日時が未来になっている
    #[error("ledger entry date is in the future")]
    DateInFuture,
}
