use chrono::{DateTime, Utc};

/// 時刻ポート
///
/// 履歴レコードの日時はこのポートから取得する。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
