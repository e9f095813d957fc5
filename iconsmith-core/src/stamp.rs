//! Generation timestamps.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// The moment a batch was generated.
///
/// Stamped into component doc comments (date only) and the index header
/// (date and time). Tests pin it with [`Stamp::at`] so output is byte-stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(NaiveDateTime);

impl Stamp {
    /// The current local time.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// A fixed point in time.
    pub fn at(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Midnight of the given calendar day, or `None` for an invalid date.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }

    /// `YYYY-MM-DD`
    pub fn date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn datetime(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Default for Stamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let stamp = Stamp::at(
            NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(14, 5, 7)
                .unwrap(),
        );
        assert_eq!(stamp.date(), "2024-03-09");
        assert_eq!(stamp.datetime(), "2024-03-09 14:05:07");
    }

    #[test]
    fn test_on_rejects_invalid_dates() {
        assert!(Stamp::on(2024, 2, 30).is_none());
        assert_eq!(Stamp::on(2024, 2, 29).unwrap().datetime(), "2024-02-29 00:00:00");
    }
}
