/// Rejection kinds surfaced by the account ledger itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("card is disabled")]
    Disabled,

    #[error("date precedes the last recorded date")]
    StaleDate,

    #[error("purchase pattern flagged as fraud, card disabled")]
    Fraud,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ingestion failed with: {0}")]
    Ingestion(String),

    #[error("operation rejected: {0}")]
    Ledger(#[from] LedgerError),
}
