use crate::application::stock::StockApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// 業務上の結果（在庫切れ・未登録・競合）はエラーではなく、ハンドラー側で変換する。
#[derive(Debug)]
pub struct ApiError(StockApplicationError);

impl From<StockApplicationError> for ApiError {
    fn from(err: StockApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 422 Unprocessable Entity - 入力値の不正
            StockApplicationError::InvalidCustomerName(ref e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_CUSTOMER_NAME",
                e.to_string(),
            ),
            StockApplicationError::DomainError(ref msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOMAIN_ERROR",
                msg.clone(),
            ),

            // 503 - 呼び出し元によるキャンセル
            StockApplicationError::Cancelled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CANCELLED",
                "Operation was cancelled".to_string(),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            StockApplicationError::RepositoryError(ref e) => {
                tracing::error!("Stock repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STOCK_REPOSITORY_ERROR",
                    "Failed to access stock".to_string(),
                )
            }
            StockApplicationError::LedgerError(ref e) => {
                tracing::error!("Ledger error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LEDGER_ERROR",
                    "Failed to access borrow history".to_string(),
                )
            }
            StockApplicationError::LedgerAppendFailed { ref source, .. } => {
                // 在庫は更新済み。詳細はアプリケーション層でログ済み
                tracing::error!("Partial failure: {}: {}", self.0, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LEDGER_APPEND_FAILED",
                    "Stock was updated but the history record could not be saved".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
