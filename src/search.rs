use crate::config::GeneratorConfig;
use crate::date::TravelDate;
use crate::fares::generator::generate;
use crate::fares::view::{ClassFilter, SortKey, derive};
use crate::ticket::{RequestId, SearchQuery, Ticket, TicketBatch};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching { request: RequestId },
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub query: SearchQuery,
}

pub enum Reservation<'a> {
    Confirmed(&'a Ticket),
    SoldOut(&'a Ticket),
    NotFound,
}

/// Everything the console shows. Transitions consume the state and return
/// the next one; the ticket batch itself is never modified.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub origin: String,
    pub destination: String,
    pub date: TravelDate,
    pub batch: Option<Arc<TicketBatch>>,
    pub sort: SortKey,
    pub filter: ClassFilter,
    pub phase: Phase,
    next_request: u64,
}

impl ViewState {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, date: TravelDate) -> Self {
        ViewState {
            origin: origin.into(),
            destination: destination.into(),
            date,
            batch: None,
            sort: SortKey::default(),
            filter: ClassFilter::default(),
            phase: Phase::Idle,
            next_request: 1,
        }
    }

    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        ViewState {
            origin: origin.into(),
            ..self
        }
    }

    pub fn with_destination(self, destination: impl Into<String>) -> Self {
        ViewState {
            destination: destination.into(),
            ..self
        }
    }

    pub fn with_date(self, date: TravelDate) -> Self {
        ViewState { date, ..self }
    }

    pub fn shift_date(self, days: i64) -> Self {
        let date = self.date.shift(days);
        ViewState { date, ..self }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        ViewState { sort, ..self }
    }

    pub fn with_filter(self, filter: ClassFilter) -> Self {
        ViewState { filter, ..self }
    }

    pub fn swap_cities(self) -> Self {
        ViewState {
            origin: self.destination,
            destination: self.origin,
            ..self
        }
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            date: self.date.clone(),
        }
    }

    /// Enters `Searching` under a fresh request id. Any pending request is
    /// superseded and its result will be refused.
    pub fn begin_search(self) -> (Self, SearchRequest) {
        let request = SearchRequest {
            id: RequestId(self.next_request),
            query: self.query(),
        };
        info!(
            request = %request.id,
            origin = %request.query.origin,
            destination = %request.query.destination,
            date = %request.query.date,
            "search started"
        );
        let state = ViewState {
            phase: Phase::Searching {
                request: request.id,
            },
            next_request: self.next_request + 1,
            ..self
        };
        (state, request)
    }

    /// Installs `batch` if it answers the pending request, replacing the
    /// previous batch. Anything else is dropped.
    pub fn complete_search(self, batch: TicketBatch) -> Self {
        match self.phase {
            Phase::Searching { request } if request == batch.request => {
                info!(%request, tickets = batch.tickets.len(), "search finished");
                ViewState {
                    batch: Some(Arc::new(batch)),
                    phase: Phase::Ready,
                    ..self
                }
            }
            _ => {
                warn!(stale = %batch.request, phase = ?self.phase, "dropping stale search result");
                self
            }
        }
    }

    /// Leaves `Searching` without a result, keeping whatever batch was shown.
    pub fn abandon_search(self) -> Self {
        let phase = if self.batch.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        };
        ViewState { phase, ..self }
    }

    pub fn displayed(&self) -> Vec<&Ticket> {
        self.batch
            .as_deref()
            .map(|batch| derive(&batch.tickets, self.sort, self.filter))
            .unwrap_or_default()
    }

    /// Looks `ticket_id` up among the displayed tickets.
    pub fn reserve(&self, ticket_id: &str) -> Reservation<'_> {
        match self.displayed().into_iter().find(|t| &*t.id == ticket_id) {
            Some(ticket) if ticket.available => Reservation::Confirmed(ticket),
            Some(ticket) => Reservation::SoldOut(ticket),
            None => Reservation::NotFound,
        }
    }
}

/// Runs searches on the tokio runtime, one at a time. Starting a search
/// aborts the one still in flight.
pub struct Searcher {
    rng: StdRng,
    config: Arc<GeneratorConfig>,
    pending: Option<(RequestId, JoinHandle<TicketBatch>)>,
}

impl Searcher {
    pub fn new(config: GeneratorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Searcher {
            rng,
            config: Arc::new(config),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, request: SearchRequest) {
        if let Some((superseded, handle)) = self.pending.take() {
            debug!(%superseded, by = %request.id, "aborting superseded search");
            handle.abort();
        }

        let mut rng = StdRng::seed_from_u64(self.rng.next_u64());
        let config = Arc::clone(&self.config);
        let id = request.id;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(config.search_delay()).await;
            generate(&mut rng, &config, request.id, request.query)
        });
        self.pending = Some((id, handle));
    }

    /// Waits for the search in flight. `None` when nothing is pending or the
    /// task did not run to completion.
    pub async fn finish(&mut self) -> Option<TicketBatch> {
        let (request, handle) = self.pending.take()?;
        match handle.await {
            Ok(batch) => Some(batch),
            Err(err) => {
                warn!(%request, %err, "search task did not complete");
                None
            }
        }
    }
}
