use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::LedgerEntry;

/// 貸出・返却リクエスト（POST /books/:id/borrow, POST /books/:id/return）
#[derive(Debug, Deserialize)]
pub struct StockOperationRequest {
    pub customer_name: String,
}

/// 貸出履歴レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerEntryResponse {
    pub record_id: Uuid,
    pub book_id: Uuid,
    pub customer_name: String,
    pub action: String,
    pub date: DateTime<Utc>,
}

impl From<LedgerEntry> for LedgerEntryResponse {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            record_id: entry.record_id.value(),
            book_id: entry.book_id.value(),
            customer_name: entry.customer_name.into(),
            action: entry.action.as_str().to_string(),
            date: entry.date,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
