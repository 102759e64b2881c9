use crate::domain::{BookId, Outcome, StockChange, StockError, StockOperation};
use crate::ports::StockRepository;

use super::cancellation::CancellationHandle;
use super::errors::{Result, StockApplicationError};

/// 条件付き書き込みの最大試行回数
///
/// バージョン競合がこの回数続いた場合は`Conflict`を返す。
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// 在庫を1冊分調整する（楽観的排他制御）
///
/// 処理フロー：
/// 1. 在庫レコードをバージョン付きで読み取る（存在しなければ`NotFound`）
/// 2. 読み取った最新の在庫数に操作を適用する（在庫0冊の貸出は`OutOfStock`）
/// 3. 読み取ったバージョンを条件に書き込む
/// 4. バージョン不一致なら1からやり直す。`MAX_WRITE_ATTEMPTS`回失敗したら`Conflict`
///
/// 業務ルールの失敗はリトライしない。プロセス内ロックは持たず、
/// 直列化はすべてリポジトリの条件付き書き込みに任せる。
///
/// # エラー
/// - RepositoryError: リポジトリのI/O失敗（リトライしない）
/// - Cancelled: リポジトリ呼び出しの前にキャンセルされていた
/// - DomainError: 返却による在庫数の桁あふれ、または行バージョンの上限到達
pub async fn adjust_stock(
    stock_repository: &dyn StockRepository,
    book_id: BookId,
    operation: StockOperation,
    cancellation: &CancellationHandle,
) -> Result<Outcome<StockChange>> {
    let mut attempts = 0;

    loop {
        cancellation.check()?;

        // 1. 毎回最新の値を読み直す
        let book = match stock_repository
            .read_for_update(book_id)
            .await
            .map_err(StockApplicationError::RepositoryError)?
        {
            Some(book) => book,
            None => return Ok(Outcome::NotFound),
        };

        // 2. 在庫判定
        let new_quantity = match operation.apply(book.actual_quantity) {
            Ok(quantity) => quantity,
            Err(StockError::OutOfStock) => return Ok(Outcome::OutOfStock),
            Err(e) => return Err(StockApplicationError::DomainError(e.to_string())),
        };

        let new_version = book.row_version.next().ok_or_else(|| {
            StockApplicationError::DomainError(format!(
                "row version exhausted for book {}",
                book_id
            ))
        })?;

        cancellation.check()?;

        // 3. バージョン条件付き書き込み
        let applied = stock_repository
            .write_if_version_matches(book_id, book.row_version, new_quantity)
            .await
            .map_err(StockApplicationError::RepositoryError)?;

        if applied {
            return Ok(Outcome::Success(StockChange {
                book_id,
                operation,
                previous_quantity: book.actual_quantity,
                new_quantity,
                previous_version: book.row_version,
                new_version,
            }));
        }

        attempts += 1;
        tracing::debug!(
            book_id = %book_id,
            operation = operation.as_str(),
            expected_version = %book.row_version,
            attempt = attempts,
            "row version conflict"
        );

        if attempts >= MAX_WRITE_ATTEMPTS {
            tracing::warn!(
                book_id = %book_id,
                operation = operation.as_str(),
                attempts,
                "giving up after repeated row version conflicts"
            );
            return Ok(Outcome::Conflict);
        }
    }
}
