use std::fmt;

/// A (month, day) pair within a single fixed year. No year field, no
/// leap handling; ordering is lexicographic on (month, day).
///
/// The default (0, 0) sorts before every valid calendar date, so a fresh
/// account accepts any first operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub fn new(day: u8, month: u8) -> Self {
        Self { month, day }
    }

    /// True iff `self` is the same date as `other` or falls after it.
    pub fn same_or_later(self, other: Self) -> bool {
        self >= other
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::Date;

    #[test]
    fn ordering_is_month_then_day() {
        assert!(Date::new(15, 3).same_or_later(Date::new(20, 2)));
        assert!(Date::new(1, 3).same_or_later(Date::new(31, 2)));
        assert!(!Date::new(31, 2).same_or_later(Date::new(1, 3)));
        assert!(Date::new(10, 5).same_or_later(Date::new(9, 5)));
        assert!(!Date::new(9, 5).same_or_later(Date::new(10, 5)));
    }

    #[test]
    fn same_date_counts_as_later() {
        let d = Date::new(12, 7);
        assert!(d.same_or_later(d));
    }

    #[test]
    fn default_precedes_every_valid_date() {
        assert!(Date::new(1, 1).same_or_later(Date::default()));
        assert!(!Date::default().same_or_later(Date::new(1, 1)));
    }
}
