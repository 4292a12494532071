use crate::config::GeneratorConfig;
use crate::fare_class::FareClass;
use crate::ticket::{RequestId, SearchQuery, Ticket, TicketBatch};
use crate::time::{ClockTime, TripDuration};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Builds one batch of synthetic fares: one ticket per departure slot and
/// fare class. The query is echoed on the batch but does not influence it.
///
/// Draw order is fixed (base price, then per slot: duration, jitter, then per
/// class: id suffix, availability), so a seeded `rng` reproduces the batch.
pub fn generate<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
    request: RequestId,
    query: SearchQuery,
) -> TicketBatch {
    let base_price = rng.gen_range(config.base_price.0..config.base_price.1);
    let mut tickets = Vec::with_capacity(config.batch_size());

    for &departure in &config.departure_slots {
        let duration = TripDuration::from_minutes(
            rng.gen_range(config.duration_minutes.0..config.duration_minutes.1),
        );
        let arrival = departure + duration;
        let slot_price = base_price.saturating_add_signed(surcharge(rng, config, departure));

        for class in FareClass::ALL {
            let suffix = rng.gen_range(0..0x100_0000u32);
            tickets.push(Ticket {
                id: ticket_id(departure, class, suffix),
                departure,
                arrival,
                duration,
                price: slot_price.saturating_add(class.price_modifier()),
                class,
                available: rng.gen_bool(config.availability),
            });
        }
    }

    debug!(
        %request,
        origin = %query.origin,
        destination = %query.destination,
        base_price,
        tickets = tickets.len(),
        "generated ticket batch"
    );
    TicketBatch {
        request,
        query,
        tickets,
    }
}

fn surcharge<R: Rng>(rng: &mut R, config: &GeneratorConfig, departure: ClockTime) -> i32 {
    let peak: u32 = [&config.morning_peak, &config.evening_peak]
        .into_iter()
        .filter(|window| window.contains(departure))
        .map(|window| window.surcharge)
        .fold(0, u32::saturating_add);
    let peak = i32::try_from(peak).unwrap_or(i32::MAX);
    peak.saturating_add(rng.gen_range(config.jitter.0..config.jitter.1))
}

fn ticket_id(departure: ClockTime, class: FareClass, suffix: u32) -> Arc<str> {
    Arc::from(format!(
        "{:02}{:02}-{}-{:06x}",
        departure.hour(),
        departure.minute(),
        class.name().to_lowercase(),
        suffix
    ))
}
