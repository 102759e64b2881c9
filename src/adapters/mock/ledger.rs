use crate::domain::{BookId, CustomerName, LedgerEntry};
use crate::ports::ledger::{Ledger as LedgerTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory implementation of Ledger
///
/// Entries are kept in append order and never modified.
pub struct Ledger {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// All entries in append order
    pub fn entries(&self) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.lock().map_err(|_| "ledger lock poisoned")?;
        Ok(entries.clone())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerTrait for Ledger {
    async fn append(&self, entry: LedgerEntry) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| "ledger lock poisoned")?;
        entries.push(entry);
        Ok(())
    }

    async fn find_by_book_id(&self, book_id: BookId) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.lock().map_err(|_| "ledger lock poisoned")?;
        Ok(entries
            .iter()
            .filter(|e| e.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn find_by_customer(&self, customer_name: &CustomerName) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.lock().map_err(|_| "ledger lock poisoned")?;
        Ok(entries
            .iter()
            .filter(|e| &e.customer_name == customer_name)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookAction;
    use chrono::Utc;

    fn entry(book_id: BookId, customer: &str, action: BookAction) -> LedgerEntry {
        let now = Utc::now();
        LedgerEntry::record(book_id, CustomerName::new(customer).unwrap(), action, now, now)
            .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_book_id_keeps_append_order() {
        let ledger = Ledger::new();
        let book_id = BookId::new();

        let first = entry(book_id, "Alice", BookAction::Borrowed);
        let other = entry(BookId::new(), "Alice", BookAction::Borrowed);
        let second = entry(book_id, "Alice", BookAction::Returned);

        ledger.append(first.clone()).await.unwrap();
        ledger.append(other).await.unwrap();
        ledger.append(second.clone()).await.unwrap();

        let found = ledger.find_by_book_id(book_id).await.unwrap();
        assert_eq!(found, vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_by_customer() {
        let ledger = Ledger::new();

        let alice = entry(BookId::new(), "Alice", BookAction::Borrowed);
        let bob = entry(BookId::new(), "Bob", BookAction::Borrowed);

        ledger.append(alice.clone()).await.unwrap();
        ledger.append(bob).await.unwrap();

        let customer = CustomerName::new("Alice").unwrap();
        let found = ledger.find_by_customer(&customer).await.unwrap();
        assert_eq!(found, vec![alice]);
        assert_eq!(ledger.entries().unwrap().len(), 2);
    }
}
