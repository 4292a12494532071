use chrono::{Local, NaiveDate, TimeDelta};
use std::fmt;
use tracing::warn;

const FORMAT: &str = "%d/%m/%Y";

/// Departure date as typed by the user (`DD/MM/YYYY`). Not validated on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelDate(String);

impl TravelDate {
    pub fn new(text: impl Into<String>) -> Self {
        TravelDate(text.into())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        TravelDate(date.format(FORMAT).to_string())
    }

    pub fn tomorrow() -> Self {
        let today = Local::now().date_naive();
        Self::from_date(today.succ_opt().unwrap_or(today))
    }

    pub fn parse(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), FORMAT).ok()
    }

    /// Reads day, month and year as numbers, letting an out-of-range day or
    /// month roll over into the next one (`31/02/2025` is 3 March).
    fn normalized(&self) -> Option<NaiveDate> {
        let mut parts = self.0.trim().split('/').map(|p| p.trim().parse::<i64>().ok());
        let (Some(Some(day)), Some(Some(month)), Some(Some(year)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
        let first = NaiveDate::from_ymd_opt(
            i32::try_from(months.div_euclid(12)).ok()?,
            u32::try_from(months.rem_euclid(12) + 1).ok()?,
            1,
        )?;
        first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
    }

    /// Moves the date by whole days. Text that is not three numbers is
    /// returned unchanged.
    pub fn shift(&self, days: i64) -> Self {
        match self
            .normalized()
            .and_then(|date| date.checked_add_signed(TimeDelta::try_days(days)?))
        {
            Some(date) => Self::from_date(date),
            None => {
                warn!(date = %self.0, days, "cannot shift malformed travel date");
                self.clone()
            }
        }
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_crosses_month_and_year() {
        assert_eq!(TravelDate::new("01/02/2025"), TravelDate::new("31/01/2025").shift(1));
        assert_eq!(TravelDate::new("31/12/2024"), TravelDate::new("01/01/2025").shift(-1));
        assert_eq!(TravelDate::new("29/02/2024"), TravelDate::new("28/02/2024").shift(1));
    }

    #[test]
    fn test_shift_rolls_over_out_of_range_dates() {
        assert_eq!(TravelDate::new("04/03/2025"), TravelDate::new("31/02/2025").shift(1));
        assert_eq!(TravelDate::new("01/01/2025"), TravelDate::new("00/01/2025").shift(1));
        assert_eq!(TravelDate::new("02/01/2026"), TravelDate::new("01/13/2025").shift(1));
        assert_eq!(None, TravelDate::new("31/02/2025").parse());
    }

    #[test]
    fn test_shift_keeps_malformed_text() {
        let date = TravelDate::new("next friday");
        assert_eq!(date, date.shift(1));
        assert_eq!(None, date.parse());
    }

    #[test]
    fn test_tomorrow_is_well_formed() {
        let tomorrow = TravelDate::tomorrow();
        let parsed = tomorrow.parse().expect("tomorrow parses");
        assert_eq!(tomorrow, TravelDate::from_date(parsed));
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace() {
        assert_eq!(NaiveDate::from_ymd_opt(2025, 3, 14), TravelDate::new(" 14/03/2025 ").parse());
    }
}
