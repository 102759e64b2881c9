use crate::domain::{BookId, BookRecord, RowVersion};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 在庫リポジトリポート
///
/// 書籍在庫レコードのバージョン付き読み取りと条件付き書き込みを抽象化する。
/// 在庫数の書き換えはこのポートの`write_if_version_matches`からのみ行う。
/// 接続やタイムアウトなどのインフラ障害は`Err`で返し、業務上の結果とは区別する。
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// 書籍の現在の在庫レコードをバージョンとともに読み取る
    ///
    /// 呼び出し元へ確定済みの書き込みより古い値を返してはならない（read committed以上）。
    /// 書籍が存在しない場合は`None`。
    async fn read_for_update(&self, book_id: BookId) -> Result<Option<BookRecord>>;

    /// 保存済みバージョンが`expected_version`と一致する場合のみ在庫数を書き換える
    ///
    /// 一致すれば`actual_quantity = new_quantity`、`row_version = expected_version + 1`
    /// を他の書き込みに対してアトミックに適用し`true`を返す。
    /// 不一致なら行を一切変更せず`false`を返す。
    async fn write_if_version_matches(
        &self,
        book_id: BookId,
        expected_version: RowVersion,
        new_quantity: u32,
    ) -> Result<bool>;
}
