pub mod clock;
pub mod ledger;
pub mod stock_repository;

pub use clock::*;
pub use ledger::Ledger;
pub use stock_repository::StockRepository;
