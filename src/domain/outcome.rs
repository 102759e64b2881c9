/// 在庫操作の結果
///
/// 閉じた4値。1回の呼び出しにつき必ずいずれか1つが返る。
/// `Success`のみ結果の値を持つ（調整処理では`StockChange`、コマンドでは作成された履歴レコード）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    /// 在庫0冊での貸出
    OutOfStock,
    /// 書籍が存在しない
    NotFound,
    /// バージョン競合でリトライ上限に達した
    Conflict,
}

impl<T> Outcome<T> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::OutOfStock => "out_of_stock",
            Outcome::NotFound => "not_found",
            Outcome::Conflict => "conflict",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }
}
