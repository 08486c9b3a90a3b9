use futures::Stream;
use rust_decimal::Decimal;

use crate::domain::{Account, Date, Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait StatementOutput {
    /// Called for every successful balance query.
    fn report_owed(&mut self, date: Date, total: Decimal);

    /// Called once at the end of the run with the final account state.
    fn flush(&mut self, account: &Account);
}
