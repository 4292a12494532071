use crate::error::FareError;
use serde::Deserialize;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Wall-clock time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(ClockTime(hour * 60 + minute))
    }

    pub fn from_minutes(minutes: u32) -> Self {
        ClockTime(minutes % MINUTES_PER_DAY)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FareError::InvalidClockTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = FareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Add<TripDuration> for ClockTime {
    type Output = Self;

    fn add(self, rhs: TripDuration) -> Self::Output {
        ClockTime::from_minutes(self.0 + rhs.0 % MINUTES_PER_DAY)
    }
}

/// Length of a trip in whole minutes. Displays as `2h` or `1h 35min`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct TripDuration(u32);

impl TripDuration {
    pub fn from_minutes(minutes: u32) -> Self {
        TripDuration(minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let mins = self.0 % 60;
        if mins > 0 {
            write!(f, "{}h {}min", hours, mins)
        } else {
            write!(f, "{}h", hours)
        }
    }
}

impl FromStr for TripDuration {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FareError::InvalidDuration(s.to_string());
        let mut total = None;
        for part in s.split_whitespace() {
            let (value, unit) = if let Some(v) = part.strip_suffix("min") {
                (v, 1)
            } else if let Some(v) = part.strip_suffix('h') {
                (v, 60)
            } else {
                return Err(invalid());
            };
            let value = value.parse::<u32>().map_err(|_| invalid())?;
            total = Some(total.unwrap_or(0u32).saturating_add(value.saturating_mul(unit)));
        }
        total.map(TripDuration).ok_or_else(invalid)
    }
}
