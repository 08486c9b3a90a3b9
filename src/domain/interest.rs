use rust_decimal::Decimal;

/// Fixed monthly interest rate applied at each month rollover.
pub fn monthly_rate() -> Decimal {
    Decimal::new(5, 2) // 0.05
}

/// `balance * (1 + rate)^months`, by repeated multiplication.
pub fn compound(balance: Decimal, rate: Decimal, months: u8) -> Decimal {
    let factor = Decimal::ONE + rate;
    (0..months).fold(balance, |b, _| b * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn zero_months_is_identity() {
        assert_eq!(compound(d("123.45"), monthly_rate(), 0), d("123.45"));
    }

    #[test]
    fn one_month_at_five_percent() {
        assert_eq!(compound(d("100"), monthly_rate(), 1), d("105"));
    }

    #[test]
    fn compounds_rather_than_adds() {
        // 100 * 1.05^2 = 110.25, not 110
        assert_eq!(compound(d("100"), monthly_rate(), 2), d("110.25"));
        assert_eq!(compound(d("100"), monthly_rate(), 3), d("115.7625"));
    }
}
