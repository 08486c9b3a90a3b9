use rust_decimal::Decimal;

use crate::domain::date::Date;

#[derive(Debug, Clone)]
pub enum OperationKind {
    Purchase { amount: Decimal, country: String },
    Payment { amount: Decimal },
    Balance,
}

#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,
    pub date: Date,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            OperationKind::Purchase { amount, country } => {
                write!(
                    f,
                    "purchase,date={},amount={},country={}",
                    self.date, amount, country
                )
            }
            OperationKind::Payment { amount } => {
                write!(f, "payment,date={},amount={}", self.date, amount)
            }
            OperationKind::Balance => write!(f, "balance,date={}", self.date),
        }
    }
}
