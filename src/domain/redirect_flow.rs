//! Countdown state machine for visiting a short link.
//!
//! The flow is pure: it knows nothing about clocks or the registry. A driver
//! calls [`RedirectFlow::tick`] once per second (or [`RedirectFlow::continue_now`]
//! when the visitor skips the wait) and performs the [`ClickIntent`] it gets
//! back. An intent is handed out at most once per flow, so a driver that
//! records every intent it receives counts exactly one click per visit.

use serde::Serialize;

use crate::domain::entities::ShortLinkRecord;

/// Default countdown start in seconds.
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "remaining", rename_all = "snake_case")]
pub enum RedirectState {
    Resolving,
    Countdown(u32),
    Redirecting,
    NotFound,
}

impl RedirectState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Redirecting | Self::NotFound)
    }
}

/// The one click a completed flow asks its driver to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickIntent {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct RedirectFlow {
    start: u32,
    state: RedirectState,
    target: Option<ClickIntent>,
    intent_taken: bool,
}

impl RedirectFlow {
    pub fn new(countdown_seconds: u32) -> Self {
        Self {
            start: countdown_seconds,
            state: RedirectState::Resolving,
            target: None,
            intent_taken: false,
        }
    }

    /// Feeds the lookup result into a flow still in `Resolving`.
    ///
    /// A countdown of 0 goes straight to `Redirecting` and returns the intent.
    /// Calls in any other state are ignored.
    pub fn resolved(&mut self, record: Option<&ShortLinkRecord>) -> Option<ClickIntent> {
        if self.state != RedirectState::Resolving {
            return None;
        }

        let Some(record) = record else {
            self.state = RedirectState::NotFound;
            return None;
        };

        self.target = Some(ClickIntent {
            id: record.id.clone(),
            url: record.original_url.clone(),
        });

        if self.start == 0 {
            self.redirect()
        } else {
            self.state = RedirectState::Countdown(self.start);
            None
        }
    }

    /// One second has passed.
    pub fn tick(&mut self) -> Option<ClickIntent> {
        match self.state {
            RedirectState::Countdown(n) if n > 1 => {
                self.state = RedirectState::Countdown(n - 1);
                None
            }
            RedirectState::Countdown(_) => self.redirect(),
            _ => None,
        }
    }

    /// Skips the rest of the countdown.
    pub fn continue_now(&mut self) -> Option<ClickIntent> {
        match self.state {
            RedirectState::Countdown(_) => self.redirect(),
            _ => None,
        }
    }

    fn redirect(&mut self) -> Option<ClickIntent> {
        self.state = RedirectState::Redirecting;
        if self.intent_taken {
            return None;
        }
        self.intent_taken = true;
        self.target.clone()
    }

    pub fn state(&self) -> RedirectState {
        self.state
    }

    /// Seconds left, 0 once the countdown is over.
    pub fn remaining(&self) -> u32 {
        match self.state {
            RedirectState::Countdown(n) => n,
            _ => 0,
        }
    }

    /// Where the visitor is headed, once resolved.
    pub fn target_url(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.url.as_str())
    }

    pub fn record_id(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.id.as_str())
    }
}

impl Default for RedirectFlow {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timestamp::now_millis;

    fn record() -> ShortLinkRecord {
        ShortLinkRecord {
            id: "rec000000001".to_string(),
            original_url: "https://example.com/target".to_string(),
            short_url: "http://s.test/abc123".to_string(),
            custom_alias: None,
            alias: "abc123".to_string(),
            clicks: 0,
            created_at: now_millis(),
            seo_score: 70,
            clickbait_score: 20,
            last_clicked: None,
        }
    }

    #[test]
    fn test_unknown_alias_is_terminal_not_found() {
        let mut flow = RedirectFlow::default();

        assert!(flow.resolved(None).is_none());
        assert_eq!(flow.state(), RedirectState::NotFound);
        assert!(flow.tick().is_none());
        assert!(flow.continue_now().is_none());
        assert_eq!(flow.state(), RedirectState::NotFound);
    }

    #[test]
    fn test_countdown_emits_single_intent_at_zero() {
        let record = record();
        let mut flow = RedirectFlow::new(5);
        assert!(flow.resolved(Some(&record)).is_none());

        let mut seen = vec![flow.remaining()];
        let mut intents = Vec::new();
        for _ in 0..10 {
            if let Some(intent) = flow.tick() {
                intents.push(intent);
            }
            seen.push(flow.remaining());
        }

        assert_eq!(&seen[..6], &[5, 4, 3, 2, 1, 0]);
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].id, record.id);
        assert_eq!(intents[0].url, "https://example.com/target");
        assert_eq!(flow.state(), RedirectState::Redirecting);
    }

    #[test]
    fn test_continue_now_short_circuits_once() {
        let record = record();
        let mut flow = RedirectFlow::new(5);
        flow.resolved(Some(&record));
        flow.tick();

        assert!(flow.continue_now().is_some());
        assert!(flow.continue_now().is_none());
        assert!(flow.tick().is_none());
        assert_eq!(flow.state(), RedirectState::Redirecting);
    }

    #[test]
    fn test_continue_after_countdown_finished_yields_nothing() {
        let mut flow = RedirectFlow::new(1);
        flow.resolved(Some(&record()));

        assert!(flow.tick().is_some());
        assert!(flow.continue_now().is_none());
    }

    #[test]
    fn test_zero_countdown_redirects_immediately() {
        let mut flow = RedirectFlow::new(0);

        let intent = flow.resolved(Some(&record()));

        assert!(intent.is_some());
        assert_eq!(flow.state(), RedirectState::Redirecting);
        assert!(flow.continue_now().is_none());
    }

    #[test]
    fn test_resolved_is_ignored_after_first_call() {
        let mut flow = RedirectFlow::new(3);
        flow.resolved(None);

        assert!(flow.resolved(Some(&record())).is_none());
        assert_eq!(flow.state(), RedirectState::NotFound);
        assert!(flow.target_url().is_none());
    }

    #[test]
    fn test_tick_before_resolution_does_nothing() {
        let mut flow = RedirectFlow::new(3);

        assert!(flow.tick().is_none());
        assert_eq!(flow.state(), RedirectState::Resolving);
    }
}
