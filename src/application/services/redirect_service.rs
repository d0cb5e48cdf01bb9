//! Drives redirect flows against the shared registry.
//!
//! Two drivers exist:
//!
//! - **Visit tickets** for the web page. `begin` resolves the alias and parks a
//!   [`RedirectFlow`] under a random ticket; the page's own timer (or the
//!   visitor's "Continue now" click) later calls `complete`, which takes the
//!   flow's single click intent and returns the target.
//! - **`run_countdown`** for terminals. Ticks the flow with tokio timers and
//!   reports every state change to a callback.

use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::application::services::LinkService;
use crate::domain::entities::ShortLinkRecord;
use crate::domain::redirect_flow::{ClickIntent, RedirectFlow, RedirectState};
use crate::error::AppError;
use crate::utils::alias::generate_id;

/// Default bound on visits waiting for completion.
pub const DEFAULT_MAX_OPEN_TICKETS: usize = 10_000;

/// Countdown and ticket timing.
#[derive(Debug, Clone, Copy)]
pub struct RedirectSettings {
    pub countdown_seconds: u32,
    pub redirect_delay: Duration,
    pub ticket_ttl: Duration,
    /// When full, opening a visit evicts the oldest one.
    pub max_open_tickets: usize,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self {
            countdown_seconds: 5,
            redirect_delay: Duration::from_millis(500),
            ticket_ttl: Duration::from_secs(600),
            max_open_tickets: DEFAULT_MAX_OPEN_TICKETS,
        }
    }
}

struct VisitTicket {
    flow: RedirectFlow,
    opened_at: Instant,
}

/// A visit in progress, as needed to render the countdown page.
#[derive(Debug, Clone)]
pub struct Visit {
    pub ticket: String,
    pub record: ShortLinkRecord,
    pub countdown_seconds: u32,
    pub redirect_delay: Duration,
}

pub struct RedirectService {
    links: Arc<LinkService>,
    settings: RedirectSettings,
    tickets: Mutex<HashMap<String, VisitTicket>>,
}

impl RedirectService {
    pub fn new(links: Arc<LinkService>, settings: RedirectSettings) -> Self {
        Self {
            links,
            settings,
            tickets: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> RedirectSettings {
        self.settings
    }

    /// Starts a visit for `alias`.
    ///
    /// Returns `None` when the alias does not resolve. With a countdown of 0
    /// the click is counted here, since the flow redirects immediately.
    pub fn begin(&self, alias: &str) -> Option<Visit> {
        self.sweep_expired();

        let record = self.links.resolve(alias);
        let mut flow = RedirectFlow::new(self.settings.countdown_seconds);
        let immediate = flow.resolved(record.as_ref());

        let Some(record) = record else {
            debug!(alias, "Visit for unknown alias");
            return None;
        };

        if let Some(intent) = immediate {
            self.count(&intent);
        }

        let ticket = self.open_ticket(flow);
        debug!(alias, ticket = %ticket, "Visit started");

        Some(Visit {
            ticket,
            record,
            countdown_seconds: self.settings.countdown_seconds,
            redirect_delay: self.settings.redirect_delay,
        })
    }

    /// Finishes a visit and returns the target URL.
    ///
    /// The first call counts the click. Later calls with the same ticket still
    /// return the target but count nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown or expired ticket.
    pub fn complete(&self, ticket: &str) -> Result<String, AppError> {
        self.sweep_expired();

        let (intent, target) = {
            let mut tickets = self.tickets.lock();
            let visit = tickets.get_mut(ticket).ok_or_else(|| {
                AppError::not_found("Visit not found or expired", json!({ "ticket": ticket }))
            })?;
            let intent = visit.flow.continue_now();
            let target = visit.flow.target_url().map(str::to_string);
            (intent, target)
        };

        if let Some(intent) = &intent {
            self.count(intent);
        }

        target.ok_or_else(|| {
            AppError::not_found("Visit has no target", json!({ "ticket": ticket }))
        })
    }

    /// Runs a full countdown for `alias` on tokio timers.
    ///
    /// `on_state` sees `Countdown(n)` for n = start..1, then `Redirecting`
    /// (or only `NotFound`). When `skip` completes first the countdown is cut
    /// short. The click is counted once when `Redirecting` is reached, then the
    /// redirect delay elapses and the target URL is returned.
    ///
    /// Dropping the returned future cancels every pending timer.
    pub async fn run_countdown<S, F>(&self, alias: &str, skip: S, mut on_state: F) -> Option<String>
    where
        S: Future<Output = ()>,
        F: FnMut(RedirectState),
    {
        let record = self.links.resolve(alias);
        let mut flow = RedirectFlow::new(self.settings.countdown_seconds);
        let mut intent = flow.resolved(record.as_ref());
        on_state(flow.state());

        if flow.state() == RedirectState::NotFound {
            return None;
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        tokio::pin!(skip);
        let mut skipped = false;

        while !flow.state().is_terminal() {
            let next = tokio::select! {
                _ = ticker.tick() => flow.tick(),
                _ = &mut skip, if !skipped => {
                    skipped = true;
                    flow.continue_now()
                }
            };
            on_state(flow.state());
            if next.is_some() {
                intent = next;
            }
        }

        if let Some(intent) = &intent {
            self.count(intent);
        }

        tokio::time::sleep(self.settings.redirect_delay).await;
        flow.target_url().map(str::to_string)
    }

    fn count(&self, intent: &ClickIntent) {
        match self.links.record_click(&intent.id) {
            Ok(()) => info!(id = %intent.id, url = %intent.url, "Redirecting visitor"),
            Err(e) => warn!(id = %intent.id, error = %e, "Link vanished before its click was counted"),
        }
    }

    fn open_ticket(&self, flow: RedirectFlow) -> String {
        let mut tickets = self.tickets.lock();

        while tickets.len() >= self.settings.max_open_tickets.max(1) {
            let Some(oldest) = tickets
                .iter()
                .min_by_key(|(_, visit)| visit.opened_at)
                .map(|(ticket, _)| ticket.clone())
            else {
                break;
            };
            tickets.remove(&oldest);
            debug!(ticket = %oldest, "Visit ticket evicted, too many open visits");
        }

        let mut ticket = generate_id();
        while tickets.contains_key(&ticket) {
            ticket = generate_id();
        }
        tickets.insert(
            ticket.clone(),
            VisitTicket {
                flow,
                opened_at: Instant::now(),
            },
        );
        ticket
    }

    fn sweep_expired(&self) {
        let ttl = self.settings.ticket_ttl;
        let mut tickets = self.tickets.lock();
        let before = tickets.len();
        tickets.retain(|_, visit| visit.opened_at.elapsed() < ttl);

        let expired = before - tickets.len();
        if expired > 0 {
            debug!(expired, "Expired visit tickets removed");
        }
    }

    /// Visits still waiting for completion.
    pub fn open_tickets(&self) -> usize {
        self.tickets.lock().len()
    }
}
