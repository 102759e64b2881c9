pub mod book;
pub mod commands;
pub mod errors;
pub mod ledger;
pub mod outcome;
pub mod value_objects;

pub use book::*;
pub use errors::*;
pub use ledger::*;
pub use outcome::*;
pub use value_objects::*;
