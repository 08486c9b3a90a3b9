pub mod account;
pub mod date;
pub mod error;
pub mod interest;
pub mod operation;
pub mod traits;

pub use account::Account;
pub use date::Date;
pub use error::{Error, LedgerError};
pub use operation::{Operation, OperationKind};
pub use traits::{DeadLetterQueue, OperationStream, StatementOutput};
