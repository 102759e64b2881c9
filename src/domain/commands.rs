use super::BookId;

/// コマンド：書籍を貸し出す
///
/// 利用者名は未検証の文字列で受け取り、アプリケーション層で`CustomerName`に変換する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowBook {
    pub book_id: BookId,
    pub customer_name: String,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub customer_name: String,
}
