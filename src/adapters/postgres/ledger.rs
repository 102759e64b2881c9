use crate::domain::{BookAction, BookId, CustomerName, LedgerEntry, RecordId};
use crate::ports::ledger::{Ledger as LedgerTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをLedgerEntryに変換する
///
/// 利用者名とアクションは値オブジェクトの検証を通して復元する。
fn map_row_to_ledger_entry(row: &PgRow) -> Result<LedgerEntry> {
    let customer_name_str: String = row.get("customer_name");
    let customer_name = CustomerName::new(customer_name_str)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let action_str: &str = row.get("action");
    let action = BookAction::from_str(action_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(LedgerEntry {
        record_id: RecordId::from_uuid(row.get("record_id")),
        book_id: BookId::from_uuid(row.get("book_id")),
        customer_name,
        action,
        date: row.get("date"),
    })
}

/// LedgerのPostgreSQL実装
///
/// borrow_book_recordsテーブルは追記専用（UPDATE/DELETEはトリガーで拒否される）。
/// 追記順はsequence_numberで保持する。
pub struct Ledger {
    pool: PgPool,
}

impl Ledger {
    /// PostgreSQLコネクションプールから新しいLedgerを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerTrait for Ledger {
    async fn append(&self, entry: LedgerEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO borrow_book_records (
                record_id,
                book_id,
                customer_name,
                action,
                date
            )
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.record_id.value())
        .bind(entry.book_id.value())
        .bind(entry.customer_name.as_str())
        .bind(entry.action.as_str())
        .bind(entry.date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 書籍の履歴を取得（(book_id, sequence_number)のインデックスを使用）
    async fn find_by_book_id(&self, book_id: BookId) -> Result<Vec<LedgerEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT
                record_id,
                book_id,
                customer_name,
                action,
                date
            FROM borrow_book_records
            WHERE book_id = $1
            ORDER BY sequence_number ASC
            "#,
        )
        .bind(book_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_ledger_entry).collect()
    }

    async fn find_by_customer(&self, customer_name: &CustomerName) -> Result<Vec<LedgerEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT
                record_id,
                book_id,
                customer_name,
                action,
                date
            FROM borrow_book_records
            WHERE customer_name = $1
            ORDER BY sequence_number ASC
            "#,
        )
        .bind(customer_name.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_ledger_entry).collect()
    }
}
