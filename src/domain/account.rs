use rust_decimal::Decimal;

use crate::domain::date::Date;
use crate::domain::error::LedgerError;
use crate::domain::interest;

/// A single credit card account: the two-bucket balance, the last date an
/// operation was accepted at, the last two purchase countries, and the
/// disabled flag.
#[derive(Debug)]
pub struct Account {
    interest_owing: Decimal, // has compounded at least once, keeps accruing
    current_month: Decimal,  // charges since the last rollover, not yet interest-bearing
    last_update: Date,
    last_country: Option<String>,
    prior_country: Option<String>,
    disabled: bool,
    monthly_rate: Decimal,
}

impl Account {
    pub fn new() -> Self {
        Self {
            interest_owing: Decimal::ZERO,
            current_month: Decimal::ZERO,
            last_update: Date::default(),
            last_country: None,
            prior_country: None,
            disabled: false,
            monthly_rate: interest::monthly_rate(),
        }
    }

    pub fn interest_owing(&self) -> Decimal {
        self.interest_owing
    }

    pub fn current_month(&self) -> Decimal {
        self.current_month
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Charge `amount` to the card on `date` in `country`.
    ///
    /// Checked in order: the disabled flag, then the country pattern, then
    /// the date. A purchase rejected for its date still shifts the country
    /// history; a purchase flagged as fraud shifts it too and permanently
    /// disables the card.
    pub fn purchase(
        &mut self,
        amount: Decimal,
        date: Date,
        country: &str,
    ) -> Result<(), LedgerError> {
        if self.disabled {
            return Err(LedgerError::Disabled);
        }
        if self.countries_all_distinct(country) {
            self.push_country(country);
            self.disabled = true;
            tracing::debug!(country, "three distinct countries in a row, disabling card");
            return Err(LedgerError::Fraud);
        }
        if !date.same_or_later(self.last_update) {
            self.push_country(country);
            return Err(LedgerError::StaleDate);
        }
        if date.month > self.last_update.month {
            self.roll_over(date.month);
        }
        self.current_month += amount;
        self.last_update = date;
        self.push_country(country);
        Ok(())
    }

    /// Total owed as of `date`. Rolls balances over if the month advanced
    /// and records `date` as the last update, so a repeated query for the
    /// same date returns the same value.
    pub fn amount_owed(&mut self, date: Date) -> Result<Decimal, LedgerError> {
        if !date.same_or_later(self.last_update) {
            return Err(LedgerError::StaleDate);
        }
        Ok(self.settle(date))
    }

    /// Pay `amount` toward the balance on `date`. The payment goes to the
    /// interest-owing bucket first; whatever is left comes off the
    /// current-month bucket.
    pub fn pay_bill(&mut self, amount: Decimal, date: Date) -> Result<(), LedgerError> {
        if !date.same_or_later(self.last_update) {
            return Err(LedgerError::StaleDate);
        }
        let total = self.settle(date);
        if amount >= total {
            self.interest_owing = Decimal::ZERO;
            self.current_month = Decimal::ZERO;
        } else if amount < self.interest_owing {
            self.interest_owing -= amount;
        } else {
            let remainder = amount - self.interest_owing;
            self.interest_owing = Decimal::ZERO;
            self.current_month -= remainder;
        }
        Ok(())
    }

    /// Rolls over if the month advanced, records the date, and returns the
    /// total owed. The date must already have passed the staleness check.
    fn settle(&mut self, date: Date) -> Decimal {
        if date.month > self.last_update.month {
            self.roll_over(date.month);
        }
        self.last_update = date;
        self.interest_owing + self.current_month
    }

    /// Month rollover. The interest bucket compounds for the whole gap;
    /// the current-month bucket only started accruing a month later, so it
    /// compounds for one month less before folding in.
    fn roll_over(&mut self, new_month: u8) {
        let gap = new_month - self.last_update.month;
        tracing::debug!(gap = %gap, "rolling current-month charges into the interest bucket");
        self.interest_owing = interest::compound(self.interest_owing, self.monthly_rate, gap);
        self.current_month = interest::compound(self.current_month, self.monthly_rate, gap - 1);
        self.interest_owing += self.current_month;
        self.current_month = Decimal::ZERO;
    }

    /// The fraud pattern: the new country and the last two are pairwise
    /// distinct, and the oldest slot is occupied. The first two purchases
    /// can never trip this because `prior_country` is still unset.
    fn countries_all_distinct(&self, country: &str) -> bool {
        match (&self.last_country, &self.prior_country) {
            (Some(last), Some(prior)) => country != last && last != prior && country != prior,
            _ => false,
        }
    }

    fn push_country(&mut self, country: &str) {
        self.prior_country = self.last_country.take();
        self.last_country = Some(country.to_owned());
    }
}
