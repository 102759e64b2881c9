mod cancellation;
mod coordinator;
mod errors;
mod stock_audit;
mod stock_service;

pub use cancellation::CancellationHandle;
pub use coordinator::{MAX_WRITE_ATTEMPTS, adjust_stock};
pub use errors::{Result, StockApplicationError};
pub use stock_audit::{StockAudit, audit_stock};
pub use stock_service::{
    ServiceDependencies, book_history, borrow_book, customer_history, return_book,
};
