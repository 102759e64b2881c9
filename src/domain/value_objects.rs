use uuid::Uuid;

use super::CustomerNameError;

/// 書籍ID - 在庫管理の集約ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 貸出履歴レコードID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// 行バージョン（楽観的排他制御用）
///
/// 書き込みが適用されるたびに1つ進む。値そのものに意味はなく、
/// 「最後に読んだ版を書き換えている」ことの証明にのみ使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowVersion(i64);

impl RowVersion {
    /// 新規作成時のバージョン
    pub fn initial() -> Self {
        Self(0)
    }

    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 条件付き書き込みが成功した後のバージョン
    ///
    /// `i64::MAX`の次はない（PostgreSQLの`row_version + 1`も同じ点でエラーになる）。
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for RowVersion {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for RowVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 利用者名
///
/// 不変条件：
/// - 2文字以上1000文字以下（文字数で数える）
/// - 制御文字（NULを含む）を含まない
///
/// 型で保証するため、生成は`CustomerName::new`経由のみ。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerName(String);

impl CustomerName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 1000;

    pub fn new(name: impl Into<String>) -> Result<Self, CustomerNameError> {
        let name = name.into();
        let length = name.chars().count();

        if length < Self::MIN_LENGTH {
            return Err(CustomerNameError::TooShort(length));
        }
        if length > Self::MAX_LENGTH {
            return Err(CustomerNameError::TooLong(length));
        }
        if name.chars().any(char::is_control) {
            return Err(CustomerNameError::ControlCharacter);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}

impl std::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
