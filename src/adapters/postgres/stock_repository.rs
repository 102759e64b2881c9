use crate::domain::{BookId, BookRecord, RowVersion};
use crate::ports::stock_repository::{Result, StockRepository as StockRepositoryTrait};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Convert a `books` row into a BookRecord
///
/// actual_quantity is stored as INTEGER with a CHECK (>= 0) constraint;
/// a negative value here means the constraint was bypassed and is reported
/// as invalid data rather than clamped.
fn map_row_to_book_record(row: &PgRow) -> Result<BookRecord> {
    let actual_quantity_i32: i32 = row.get("actual_quantity");
    let actual_quantity: u32 = actual_quantity_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("actual_quantity out of range: {}", actual_quantity_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(BookRecord {
        id: BookId::from_uuid(row.get("id")),
        name: row.get("name"),
        author: row.get("author"),
        isbn: row.get("isbn"),
        year: row.get("year"),
        actual_quantity,
        row_version: RowVersion::from_value(row.get("row_version")),
    })
}

fn quantity_to_i32(quantity: u32) -> Result<i32> {
    i32::try_from(quantity).map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("actual_quantity does not fit the books table: {}", quantity),
        )) as Box<dyn std::error::Error + Send + Sync>
    })
}

/// PostgreSQL implementation of StockRepository
///
/// Optimistic concurrency is a conditional UPDATE on the row_version column.
/// Each call acquires a connection from the pool and returns it on every exit path.
pub struct StockRepository {
    pool: PgPool,
}

impl StockRepository {
    /// Create a new StockRepository with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Provision a book (inventory management, outside the stock workflow)
    pub async fn insert_book(&self, book: &BookRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO books (
                id,
                name,
                author,
                isbn,
                year,
                actual_quantity,
                row_version
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(book.id.value())
        .bind(&book.name)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.year)
        .bind(quantity_to_i32(book.actual_quantity)?)
        .bind(book.row_version.value())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    async fn read_for_update(&self, book_id: BookId) -> Result<Option<BookRecord>> {
        let row = sqlx::query(
            r#"
            SELECT
                id,
                name,
                author,
                isbn,
                year,
                actual_quantity,
                row_version
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book_record).transpose()
    }

    /// Conditional write
    ///
    /// The WHERE clause on row_version makes the check and the update a single
    /// statement. Zero affected rows means another writer got there first
    /// (or the book does not exist); the row is left untouched.
    async fn write_if_version_matches(
        &self,
        book_id: BookId,
        expected_version: RowVersion,
        new_quantity: u32,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET actual_quantity = $1,
                row_version = row_version + 1
            WHERE id = $2 AND row_version = $3
            "#,
        )
        .bind(quantity_to_i32(new_quantity)?)
        .bind(book_id.value())
        .bind(expected_version.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
