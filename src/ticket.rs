use crate::date::TravelDate;
use crate::fare_class::FareClass;
use crate::time::{ClockTime, TripDuration};
use std::fmt;
use std::sync::Arc;

pub type TicketId = Arc<str>;

/// One synthetic fare offer for a departure slot and fare class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    pub duration: TripDuration,
    pub price: u32,
    pub class: FareClass,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: TravelDate,
}

/// Every ticket produced by one search, with the query it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBatch {
    pub request: RequestId,
    pub query: SearchQuery,
    pub tickets: Vec<Ticket>,
}
