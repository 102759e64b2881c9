pub mod ledger;
pub mod stock_repository;

// パブリックに型を再エクスポート
pub use ledger::Ledger as PostgresLedger;
pub use stock_repository::StockRepository as PostgresStockRepository;
