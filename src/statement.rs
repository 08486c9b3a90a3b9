use rust_decimal::Decimal;

use crate::domain::{Account, Date, StatementOutput};

/// Writes balance queries and the final account summary to stdout as CSV.
/// Amounts are rounded to cents for display only; the account keeps full
/// precision internally.
#[derive(Default, Debug)]
pub struct StdOutStatement {}

impl StdOutStatement {
    pub fn new() -> Self {
        Self {}
    }
}

impl StatementOutput for StdOutStatement {
    fn report_owed(&mut self, date: Date, total: Decimal) {
        println!("owed,{},{},{:.2}", date.month, date.day, total);
    }

    fn flush(&mut self, account: &Account) {
        let total = account.interest_owing() + account.current_month();
        println!("interest_owing,current_month,total,disabled");
        println!(
            "{:.2},{:.2},{:.2},{}",
            account.interest_owing(),
            account.current_month(),
            total,
            account.is_disabled()
        );
    }
}
