use anyhow::{Result, bail};
use serde::{Serialize, Serializer};

/// Month abbreviations for human-readable labels
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days elapsed before the first of each month in a non-leap year
const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Calendar date at day precision, timezone-free.
///
/// Activity bucketing works on calendar days only, so time-of-day is
/// deliberately not represented. Two posts published at different hours of
/// the same day compare equal here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    pub fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    pub fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Day of week, 0 = Sunday ... 6 = Saturday.
    ///
    /// Zeller's congruence; Zeller numbers days from Saturday, so the raw
    /// result is rotated to the Sunday-first convention the grid uses.
    #[inline]
    pub fn weekday(self) -> u8 {
        let (y, m) = if self.month < 3 {
            (self.year as i32 - 1, self.month as i32 + 12)
        } else {
            (self.year as i32, self.month as i32)
        };
        let d = self.day as i32;
        let zeller = (d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7;
        ((zeller + 6) % 7) as u8
    }

    /// 1-based day of year (Jan 1 = 1, Dec 31 = 365 or 366).
    #[inline]
    pub fn ordinal(self) -> u16 {
        let mut ordinal = CUMULATIVE_DAYS[(self.month - 1) as usize] + self.day as u16;
        if self.month > 2 && Self::is_leap_year(self.year) {
            ordinal += 1;
        }
        ordinal
    }

    /// Stable bucketing key in `YYYY-MM-DD` form.
    pub fn key(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Human-readable label: `"Mar 5, 2024"`.
    pub fn format_display(self) -> String {
        format!(
            "{} {}, {}",
            MONTH_ABBREVS[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}

/// Dates serialize as their `YYYY-MM-DD` key, matching what templates read.
impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_new() {
        let date = Date::new(2024, 6, 15);
        assert_eq!(date.year, 2024);
        assert_eq!(date.month, 6);
        assert_eq!(date.day, 15);
    }

    #[test]
    fn test_validate_valid() {
        assert!(Date::new(2024, 6, 15).validate().is_ok());
        assert!(Date::new(2024, 1, 1).validate().is_ok());
        assert!(Date::new(2024, 12, 31).validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_month() {
        assert!(Date::new(2024, 0, 15).validate().is_err());
        assert!(Date::new(2024, 13, 15).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_day() {
        assert!(Date::new(2024, 6, 0).validate().is_err());

        // Day 32 in a 31-day month
        assert!(Date::new(2024, 1, 32).validate().is_err());

        // Day 31 in a 30-day month
        assert!(Date::new(2024, 4, 31).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(Date::new(2024, 2, 29).validate().is_ok());
        assert!(Date::new(2000, 2, 29).validate().is_ok()); // divisible by 400

        assert!(Date::new(2023, 2, 29).validate().is_err());
        assert!(Date::new(1900, 2, 29).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Date::days_in_month(2024, 1), 31);
        assert_eq!(Date::days_in_month(2024, 2), 29);
        assert_eq!(Date::days_in_month(2023, 2), 28);
        assert_eq!(Date::days_in_month(2024, 4), 30);
        assert_eq!(Date::days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_weekday_known_dates() {
        // 2024-01-01 was a Monday
        assert_eq!(Date::new(2024, 1, 1).weekday(), 1);

        // 2024-03-05 was a Tuesday
        assert_eq!(Date::new(2024, 3, 5).weekday(), 2);

        // 2024-02-01 was a Thursday
        assert_eq!(Date::new(2024, 2, 1).weekday(), 4);

        // 2023-01-01 was a Sunday
        assert_eq!(Date::new(2023, 1, 1).weekday(), 0);

        // 2024-12-31 was a Tuesday
        assert_eq!(Date::new(2024, 12, 31).weekday(), 2);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(Date::new(2024, 1, 1).ordinal(), 1);
        assert_eq!(Date::new(2024, 2, 29).ordinal(), 60);
        assert_eq!(Date::new(2024, 3, 1).ordinal(), 61);
        assert_eq!(Date::new(2024, 12, 31).ordinal(), 366);
        assert_eq!(Date::new(2023, 3, 1).ordinal(), 60);
        assert_eq!(Date::new(2023, 12, 31).ordinal(), 365);
    }

    #[test]
    fn test_key_format() {
        assert_eq!(Date::new(2024, 3, 5).key(), "2024-03-05");
        assert_eq!(Date::new(987, 1, 1).key(), "0987-01-01");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(Date::new(2024, 3, 5).format_display(), "Mar 5, 2024");
        assert_eq!(Date::new(2023, 12, 31).format_display(), "Dec 31, 2023");
        assert_eq!(Date::new(2024, 1, 1).format_display(), "Jan 1, 2024");
    }

    #[test]
    fn test_ordering() {
        assert!(Date::new(2023, 12, 31) < Date::new(2024, 1, 1));
        assert!(Date::new(2024, 3, 5) < Date::new(2024, 3, 6));
        assert_eq!(Date::new(2024, 3, 5), Date::new(2024, 3, 5));
    }

    #[test]
    fn test_serialize_as_key() {
        let json = serde_json::to_string(&Date::new(2024, 3, 5)).unwrap();
        assert_eq!(json, "\"2024-03-05\"");
    }
}
