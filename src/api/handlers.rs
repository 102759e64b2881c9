use crate::application::stock::{
    CancellationHandle, ServiceDependencies, book_history as execute_book_history,
    borrow_book as execute_borrow_book, customer_history as execute_customer_history,
    return_book as execute_return_book,
};
use crate::domain::{
    BookId, LedgerEntry, Outcome,
    commands::{BorrowBook, ReturnBook},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{ErrorResponse, LedgerEntryResponse, StockOperationRequest},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// 在庫操作の結果をHTTPレスポンスに変換する
///
/// - Success: 201 Created（作成された履歴レコード）
/// - OutOfStock: 422 Unprocessable Entity
/// - NotFound: 404 Not Found
/// - Conflict: 409 Conflict（呼び出し元は操作全体を再試行してよい）
fn outcome_response(outcome: Outcome<LedgerEntry>) -> Response {
    let (status, error_type, message) = match outcome {
        Outcome::Success(entry) => {
            return (StatusCode::CREATED, Json(LedgerEntryResponse::from(entry))).into_response();
        }
        Outcome::OutOfStock => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "OUT_OF_STOCK",
            "No copies of this book are available",
        ),
        Outcome::NotFound => (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", "Book not found"),
        Outcome::Conflict => (
            StatusCode::CONFLICT,
            "CONCURRENCY_CONFLICT",
            "The book was modified concurrently; retry the request",
        ),
    };

    (status, Json(ErrorResponse::new(error_type, message))).into_response()
}

/// POST /books/:id/borrow - 書籍を貸し出す
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
    Json(req): Json<StockOperationRequest>,
) -> Result<Response, ApiError> {
    let cmd = BorrowBook {
        book_id: BookId::from_uuid(book_id),
        customer_name: req.customer_name,
    };

    let outcome =
        execute_borrow_book(&state.service_deps, cmd, &CancellationHandle::new()).await?;

    Ok(outcome_response(outcome))
}

/// POST /books/:id/return - 書籍を返却する
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
    Json(req): Json<StockOperationRequest>,
) -> Result<Response, ApiError> {
    let cmd = ReturnBook {
        book_id: BookId::from_uuid(book_id),
        customer_name: req.customer_name,
    };

    let outcome =
        execute_return_book(&state.service_deps, cmd, &CancellationHandle::new()).await?;

    Ok(outcome_response(outcome))
}

/// GET /books/:id/records - 書籍の貸出履歴を取得
///
/// 追記順に返す。履歴がない書籍（未登録を含む）は空配列。
pub async fn list_book_records(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Vec<LedgerEntryResponse>>, ApiError> {
    let entries = execute_book_history(&state.service_deps, BookId::from_uuid(book_id)).await?;

    Ok(Json(
        entries.into_iter().map(LedgerEntryResponse::from).collect(),
    ))
}

/// GET /customers/:name/records - 利用者の貸出履歴を取得
pub async fn list_customer_records(
    State(state): State<Arc<AppState>>,
    Path(customer_name): Path<String>,
) -> Result<Json<Vec<LedgerEntryResponse>>, ApiError> {
    let entries = execute_customer_history(&state.service_deps, &customer_name).await?;

    Ok(Json(
        entries.into_iter().map(LedgerEntryResponse::from).collect(),
    ))
}
