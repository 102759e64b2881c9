use crate::domain::{BookId, BookRecord, RowVersion};
use crate::ports::stock_repository::{Result, StockRepository as StockRepositoryTrait};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory implementation of StockRepository
///
/// The version check and the write happen under a single lock acquisition,
/// which gives the same atomicity as the conditional UPDATE in PostgreSQL.
pub struct StockRepository {
    books: Mutex<HashMap<BookId, BookRecord>>,
}

impl StockRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// Provision a book (inventory management, outside the stock workflow)
    pub fn insert_book(&self, book: BookRecord) -> Result<()> {
        let mut books = self.books.lock().map_err(|_| "stock lock poisoned")?;
        books.insert(book.id, book);
        Ok(())
    }
}

impl Default for StockRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    async fn read_for_update(&self, book_id: BookId) -> Result<Option<BookRecord>> {
        let books = self.books.lock().map_err(|_| "stock lock poisoned")?;
        Ok(books.get(&book_id).cloned())
    }

    async fn write_if_version_matches(
        &self,
        book_id: BookId,
        expected_version: RowVersion,
        new_quantity: u32,
    ) -> Result<bool> {
        let mut books = self.books.lock().map_err(|_| "stock lock poisoned")?;

        match books.get_mut(&book_id) {
            Some(book) if book.row_version == expected_version => {
                book.row_version = expected_version.next().ok_or("row version exhausted")?;
                book.actual_quantity = new_quantity;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
