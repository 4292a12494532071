use crate::config::GeneratorConfig;
use crate::date::TravelDate;
use crate::fare_class::FareClass;
use crate::fares::generator::generate;
use crate::ticket::{RequestId, SearchQuery, Ticket, TicketBatch};
use crate::time::{ClockTime, TripDuration};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;
use std::sync::Arc;

pub fn query(origin: &str, destination: &str) -> SearchQuery {
    SearchQuery {
        origin: origin.to_string(),
        destination: destination.to_string(),
        date: TravelDate::new("14/03/2025"),
    }
}

/// Every draw from this source lands on the low end of its range.
pub fn zero_rng() -> StepRng {
    StepRng::new(0, 0)
}

pub fn seeded_batch(seed: u64) -> TicketBatch {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(
        &mut rng,
        &GeneratorConfig::default(),
        RequestId(seed),
        query("Paris", "Lyon"),
    )
}

pub fn clock(hhmm: &str) -> ClockTime {
    hhmm.parse().unwrap()
}

pub fn add_ticket(
    tickets: &mut Vec<Ticket>,
    ticket_id: &str,
    departure: &str,
    duration: u32,
    price: u32,
    class: FareClass,
    available: bool,
) {
    let departure = clock(departure);
    let duration = TripDuration::from_minutes(duration);
    tickets.push(Ticket {
        id: Arc::from(ticket_id),
        departure,
        arrival: departure + duration,
        duration,
        price,
        class,
        available,
    });
}

pub fn ids(view: &[&Ticket]) -> Vec<String> {
    view.iter().map(|t| t.id.to_string()).collect()
}

pub fn arb_class() -> impl Strategy<Value = FareClass> {
    prop_oneof![
        Just(FareClass::Standard),
        Just(FareClass::Comfort),
        Just(FareClass::First),
    ]
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (0..1440u32, 60..300u32, 10..200u32, arb_class(), 0..1000u32).prop_map(
        |(dep, dur, price, class, n)| {
            let departure = ClockTime::from_minutes(dep);
            let duration = TripDuration::from_minutes(dur);
            Ticket {
                id: Arc::from(format!("T_{}", n)),
                departure,
                arrival: departure + duration,
                duration,
                price,
                class,
                available: n % 10 != 0,
            }
        },
    )
}
