use crate::search::{Phase, ViewState};
use crate::ticket::Ticket;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "")]
    action: String,
}

impl TicketRow {
    fn new(ticket: &Ticket) -> Self {
        let cells = [
            ticket.id.to_string(),
            ticket.departure.to_string(),
            ticket.arrival.to_string(),
            ticket.duration.to_string(),
            format!("{} €", ticket.price),
            ticket.class.to_string(),
        ];
        // sold out rows are greyed out
        let [id, departure, arrival, duration, price, class] = if ticket.available {
            cells
        } else {
            cells.map(|cell| cell.as_str().dimmed().to_string())
        };
        let action = if ticket.available {
            "Book".green().bold().to_string()
        } else {
            "Sold out".red().to_string()
        };
        TicketRow {
            id,
            departure,
            arrival,
            duration,
            price,
            class,
            action,
        }
    }
}

/// `Origin → Destination (date)` for the batch on screen.
pub fn header(state: &ViewState) -> String {
    match state.batch.as_deref() {
        Some(batch) => format!(
            "{} → {} ({})",
            batch.query.origin, batch.query.destination, batch.query.date
        ),
        None => format!("{} → {} ({})", state.origin, state.destination, state.date),
    }
}

pub const SEARCH_HINT: &str =
    "Enter your route and date, then run 'search' to find the best fares.";
pub const NO_MATCH: &str = "No tickets match your criteria.";

/// The results panel and the number of ticket rows in it.
pub fn results(state: &ViewState) -> (String, usize) {
    if state.batch.is_none() {
        return (SEARCH_HINT.to_string(), 0);
    }
    let tickets = state.displayed();
    let body = if tickets.is_empty() {
        NO_MATCH.to_string()
    } else {
        tickets_table(&tickets)
    };
    (format!("{}\n{}", header(state), body), tickets.len())
}

pub fn tickets_table(tickets: &[&Ticket]) -> String {
    let rows: Vec<TicketRow> = tickets.iter().map(|t| TicketRow::new(t)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn status(state: &ViewState) -> String {
    let phase = match state.phase {
        Phase::Idle => "idle".to_string(),
        Phase::Searching { request } => format!("searching {}", request),
        Phase::Ready => "ready".to_string(),
    };
    format!(
        "From:   {}\nTo:     {}\nDate:   {}\nSort:   {}\nClass:  {}\nStatus: {}",
        state.origin, state.destination, state.date, state.sort, state.filter, phase
    )
}
