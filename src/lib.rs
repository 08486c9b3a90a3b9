pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod statement;

pub use domain::{Account, Date, Error, LedgerError};
pub use engine::Engine;
