use crate::domain::{
    Account, Error, Operation, OperationKind,
    traits::{DeadLetterQueue, OperationStream, StatementOutput},
};

use futures::StreamExt;

/// Drives a stream of card operations into the single account. Rejected
/// operations go to the dead-letter queue; balance queries and the final
/// account state go to the statement output.
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: StatementOutput,
    D: DeadLetterQueue,
{
    ingestion: I,
    statement: O,
    dlq: D,
    account: Account,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: StatementOutput,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, statement: O, dlq: D) -> Self {
        Self {
            ingestion,
            statement,
            dlq,
            account: Account::new(),
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => match self.apply_operation(op) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        tracing::debug!(%op, "applying operation");

        match op.kind {
            OperationKind::Purchase { amount, country } => {
                self.account.purchase(amount, op.date, &country)?;
            }
            OperationKind::Payment { amount } => {
                self.account.pay_bill(amount, op.date)?;
            }
            OperationKind::Balance => {
                let total = self.account.amount_owed(op.date)?;
                self.statement.report_owed(op.date, total);
            }
        }

        Ok(())
    }

    pub fn flush(&mut self) {
        self.statement.flush(&self.account);
    }
}
