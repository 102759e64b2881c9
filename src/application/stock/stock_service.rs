use crate::domain::{
    BookId, CustomerName, LedgerEntry, Outcome, StockOperation,
    commands::{BorrowBook, ReturnBook},
};
use crate::ports::{Clock, Ledger, StockRepository};
use std::sync::Arc;

use super::cancellation::CancellationHandle;
use super::coordinator::adjust_stock;
use super::errors::{Result, StockApplicationError};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、各関数に明示的に渡す。
/// リポジトリはプロセス全体のシングルトンではなく、ここから受け取ったハンドルのみを使う。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub stock_repository: Arc<dyn StockRepository>,
    pub ledger: Arc<dyn Ledger>,
    pub clock: Arc<dyn Clock>,
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 利用者名が2文字以上1000文字以下であること
/// - 書籍が存在すること
/// - 在庫が1冊以上あること
///
/// 成功時は`Borrowed`の履歴レコードを1件追記し、それを返す。
///
/// # 一貫性保証
///
/// 在庫の書き込みと履歴の追記は別々の書き込みであり、単一トランザクションではない。
/// 履歴の追記が失敗した場合、在庫は減ったまま`LedgerAppendFailed`を返す。
pub async fn borrow_book(
    deps: &ServiceDependencies,
    cmd: BorrowBook,
    cancellation: &CancellationHandle,
) -> Result<Outcome<LedgerEntry>> {
    execute(
        deps,
        cmd.book_id,
        &cmd.customer_name,
        StockOperation::Borrow,
        cancellation,
    )
    .await
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 利用者名が2文字以上1000文字以下であること
/// - 書籍が存在すること
/// - 在庫の上限は確認しない
///
/// 一貫性保証は`borrow_book()`を参照。
pub async fn return_book(
    deps: &ServiceDependencies,
    cmd: ReturnBook,
    cancellation: &CancellationHandle,
) -> Result<Outcome<LedgerEntry>> {
    execute(
        deps,
        cmd.book_id,
        &cmd.customer_name,
        StockOperation::Return,
        cancellation,
    )
    .await
}

/// 書籍の貸出履歴を取得する
pub async fn book_history(deps: &ServiceDependencies, book_id: BookId) -> Result<Vec<LedgerEntry>> {
    deps.ledger
        .find_by_book_id(book_id)
        .await
        .map_err(StockApplicationError::LedgerError)
}

/// 利用者の貸出履歴を取得する
///
/// 利用者名は貸出・返却と同じ規則で検証する。履歴がなければ空。
pub async fn customer_history(
    deps: &ServiceDependencies,
    customer_name: &str,
) -> Result<Vec<LedgerEntry>> {
    let customer_name = CustomerName::new(customer_name)?;

    deps.ledger
        .find_by_customer(&customer_name)
        .await
        .map_err(StockApplicationError::LedgerError)
}

async fn execute(
    deps: &ServiceDependencies,
    book_id: BookId,
    customer_name: &str,
    operation: StockOperation,
    cancellation: &CancellationHandle,
) -> Result<Outcome<LedgerEntry>> {
    // 1. 在庫に触る前に利用者名を検証
    let customer_name = CustomerName::new(customer_name)?;

    // 2. 在庫調整
    let outcome = adjust_stock(
        deps.stock_repository.as_ref(),
        book_id,
        operation,
        cancellation,
    )
    .await?;

    if !outcome.is_success() {
        tracing::info!(
            book_id = %book_id,
            operation = operation.as_str(),
            outcome = outcome.as_str(),
            "stock was not adjusted"
        );
    }

    let change = match outcome {
        Outcome::Success(change) => change,
        Outcome::OutOfStock => return Ok(Outcome::OutOfStock),
        Outcome::NotFound => return Ok(Outcome::NotFound),
        Outcome::Conflict => return Ok(Outcome::Conflict),
    };

    // 3. 在庫の書き込み確定後に履歴を作成
    let now = deps.clock.now();
    let action = operation.ledger_action();
    let entry = LedgerEntry::record(book_id, customer_name, action, now, now)
        .map_err(|e| StockApplicationError::DomainError(e.to_string()))?;

    // 4. 履歴を追記（失敗しても在庫は巻き戻さない）
    if let Err(source) = deps.ledger.append(entry.clone()).await {
        tracing::error!(
            book_id = %book_id,
            action = action.as_str(),
            customer_name = %entry.customer_name,
            new_quantity = change.new_quantity,
            new_version = %change.new_version,
            error = %source,
            "stock updated without a ledger entry; manual reconciliation required"
        );
        return Err(StockApplicationError::LedgerAppendFailed {
            book_id,
            action,
            source,
        });
    }

    tracing::info!(
        book_id = %book_id,
        action = action.as_str(),
        new_quantity = change.new_quantity,
        new_version = %change.new_version,
        "stock adjusted"
    );

    Ok(Outcome::Success(entry))
}
