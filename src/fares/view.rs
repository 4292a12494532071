use crate::error::FareError;
use crate::fare_class::FareClass;
use crate::ticket::Ticket;
use crate::time::TripDuration;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Price,
    Departure,
    Duration,
}

impl SortKey {
    pub const NAMES: [&'static str; 3] = ["price", "departure", "duration"];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Price => "price",
            SortKey::Departure => "departure",
            SortKey::Duration => "duration",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "departure" => Ok(SortKey::Departure),
            "duration" => Ok(SortKey::Duration),
            _ => Err(FareError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Only(FareClass),
}

impl ClassFilter {
    pub const NAMES: [&'static str; 4] = ["all", "standard", "comfort", "first"];

    pub fn matches(self, class: FareClass) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Only(wanted) => wanted == class,
        }
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => f.write_str("all"),
            ClassFilter::Only(class) => write!(f, "{}", class),
        }
    }
}

impl FromStr for ClassFilter {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ClassFilter::All)
        } else {
            s.parse().map(ClassFilter::Only)
        }
    }
}

/// Sorts a view of `tickets` by `sort`, then keeps those passing `filter`.
/// The sort is stable, so equal keys keep generation order.
pub fn derive(tickets: &[Ticket], sort: SortKey, filter: ClassFilter) -> Vec<&Ticket> {
    let mut view: Vec<&Ticket> = tickets.iter().collect();
    match sort {
        SortKey::Price => view.sort_by_key(|t| t.price),
        // HH:MM is zero padded, so text order is chronological within a day
        SortKey::Departure => view.sort_by_cached_key(|t| t.departure.to_string()),
        SortKey::Duration => view.sort_by_cached_key(|t| displayed_minutes(t.duration)),
    }
    view.retain(|t| filter.matches(t.class));
    view
}

/// Total minutes as read back from the `1h 30min` form shown to the user.
fn displayed_minutes(duration: TripDuration) -> u32 {
    duration
        .to_string()
        .parse::<TripDuration>()
        .map(TripDuration::minutes)
        .unwrap_or(0)
}
