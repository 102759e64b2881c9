use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::{BookId, CustomerName, LedgerEntryError, RecordId};

/// 貸出履歴のアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookAction {
    /// 貸出
    Borrowed,
    /// 返却
    Returned,
}

impl BookAction {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookAction::Borrowed => "borrowed",
            BookAction::Returned => "returned",
        }
    }
}

impl std::str::FromStr for BookAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "borrowed" => Ok(BookAction::Borrowed),
            "returned" => Ok(BookAction::Returned),
            _ => Err(format!("Invalid book action: {}", s)),
        }
    }
}

/// 貸出履歴レコード（追記専用）
///
/// 貸出・返却が成功するたびにちょうど1件作成され、以後変更も削除もされない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub record_id: RecordId,
    pub book_id: BookId,
    pub customer_name: CustomerName,
    pub action: BookAction,
    pub date: DateTime<Utc>,
}

impl LedgerEntry {
    /// 純粋関数：履歴レコードを作成する
    ///
    /// ビジネスルール：日時は`now`より未来であってはならない。
    pub fn record(
        book_id: BookId,
        customer_name: CustomerName,
        action: BookAction,
        date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, LedgerEntryError> {
        if date > now {
            return Err(LedgerEntryError::DateInFuture);
        }

        Ok(Self {
            record_id: RecordId::new(),
            book_id,
            customer_name,
            action,
            date,
        })
    }
}

/// 未返却の貸出数を数える
///
/// 利用者ごとに「貸出数 - 返却数」を求め、負の値（貸出記録のない返却）は0として合算する。
pub fn outstanding_borrows(entries: &[LedgerEntry]) -> u64 {
    let mut balance: HashMap<&CustomerName, i64> = HashMap::new();

    for entry in entries {
        let count = balance.entry(&entry.customer_name).or_default();
        match entry.action {
            BookAction::Borrowed => *count += 1,
            BookAction::Returned => *count -= 1,
        }
    }

    balance.values().map(|count| (*count).max(0) as u64).sum()
}
