use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::errors::{Result, StockApplicationError};

/// 在庫調整ループのキャンセルハンドル
///
/// クローンは同じフラグを共有する。キャンセルはリポジトリ呼び出しの間でのみ反映され、
/// 実行中の条件付き書き込みを途中で中断することはない。
#[derive(Debug, Clone, Default)]
pub struct CancellationHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancellationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// キャンセル済みなら`Cancelled`を返す
    pub(super) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(StockApplicationError::Cancelled);
        }
        Ok(())
    }
}
