//! Application state and the reducer that updates it.
//!
//! All mutable UI state lives in [`AppState`]. It changes only through
//! [`reduce`], which takes the current state and an [`Action`] and returns the
//! next state plus at most one [`Effect`] for the caller to run. Nothing in
//! here touches the terminal, the network, or the clock.

use std::time::Duration;

use crate::catalog::seed_trips;
use crate::model::{Availability, AvailabilityFlag, CategoryFilter, FilterState, Trip};
use crate::summary::{FALLBACK_SUMMARY, SummaryError};

/// How long a rescan shows as running.
pub const RESCAN_DURATION: Duration = Duration::from_millis(800);

/// The three top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Explore,
    Schedule,
    Connect,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Explore, Self::Schedule, Self::Connect];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Explore => Self::Schedule,
            Self::Schedule => Self::Connect,
            Self::Connect => Self::Explore,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Explore => "Explore",
            Self::Schedule => "Schedule",
            Self::Connect => "Connect",
        }
    }
}

/// Identifies one opening of the job overlay.
///
/// Summary results carry the ticket they were requested under, so a result
/// for an overlay that has since closed or been replaced can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Where one summary fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryStatus {
    Pending,

    /// The provider answered.
    Ready(String),

    /// The fetch failed; the reason is kept for logs and tests only.
    Degraded { reason: String },
}

impl SummaryStatus {
    /// What the overlay shows. Every failure reads as the fallback.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Pending => "DECRYPTING INTEL...",
            Self::Ready(text) => text.trim(),
            Self::Degraded { .. } => FALLBACK_SUMMARY,
        }
    }
}

/// The job detail overlay: the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub job_id: String,
    pub ticket: Ticket,
    pub summary: SummaryStatus,
}

/// Everything the controller owns.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub search: String,
    pub category: CategoryFilter,
    pub tab: Tab,
    pub availability: Availability,
    pub trips: Vec<Trip>,

    /// Open overlay, if any. At most one job is selected at a time.
    pub overlay: Option<Overlay>,

    /// A rescan is running.
    pub refreshing: bool,
    next_ticket: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(seed_trips())
    }
}

impl AppState {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            tab: Tab::Explore,
            availability: Availability::default(),
            trips,
            overlay: None,
            refreshing: false,
            next_ticket: 0,
        }
    }

    /// The filter the explore view applies right now.
    ///
    /// Immediate-only follows the `immediate` availability flag. Trips play
    /// no part in it.
    pub fn filter(&self) -> FilterState {
        FilterState {
            query: self.search.clone(),
            category: self.category,
            immediate_only: self.availability.immediate,
        }
    }

    pub fn active_trip(&self) -> Option<&Trip> {
        Trip::active(&self.trips)
    }

    pub fn selected_job_id(&self) -> Option<&str> {
        self.overlay.as_ref().map(|o| o.job_id.as_str())
    }
}

/// Something that happened: a key press or a finished background job.
#[derive(Debug)]
pub enum Action {
    SetSearch(String),
    PushSearchChar(char),
    PopSearchChar,
    SetCategory(CategoryFilter),
    CycleCategory,
    SwitchTab(Tab),
    ToggleAvailability(AvailabilityFlag),
    ActivateTrip(String),

    /// Open the overlay on a job, replacing any open one.
    SelectJob(String),

    /// Close the overlay. Closing when nothing is open does nothing.
    ClearSelection,
    SummaryResolved {
        ticket: Ticket,
        outcome: Result<String, SummaryError>,
    },
    RefreshStarted,
    RefreshFinished,
}

/// Work the caller must run after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a summary and answer with [`Action::SummaryResolved`].
    FetchSummary { ticket: Ticket, job_id: String },

    /// Send [`Action::RefreshFinished`] after the delay.
    FinishRefreshAfter(Duration),
}

/// Apply `action` to `state`.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Option<Effect>) {
    let effect = match action {
        Action::SetSearch(query) => {
            state.search = query;
            None
        }
        Action::PushSearchChar(c) => {
            state.search.push(c);
            None
        }
        Action::PopSearchChar => {
            state.search.pop();
            None
        }
        Action::SetCategory(category) => {
            state.category = category;
            None
        }
        Action::CycleCategory => {
            state.category = state.category.next();
            None
        }
        Action::SwitchTab(tab) => {
            state.tab = tab;
            None
        }
        Action::ToggleAvailability(flag) => {
            state.availability.toggle(flag);
            None
        }
        Action::ActivateTrip(id) => {
            if !Trip::activate(&mut state.trips, &id) {
                tracing::warn!(trip = %id, "activation of unknown trip ignored");
            }
            state.tab = Tab::Explore;
            None
        }
        Action::SelectJob(job_id) => {
            let ticket = Ticket(state.next_ticket);
            state.next_ticket += 1;
            state.overlay = Some(Overlay {
                job_id: job_id.clone(),
                ticket,
                summary: SummaryStatus::Pending,
            });
            Some(Effect::FetchSummary { ticket, job_id })
        }
        Action::ClearSelection => {
            state.overlay = None;
            None
        }
        Action::SummaryResolved { ticket, outcome } => {
            match state.overlay.as_mut() {
                Some(overlay) if overlay.ticket == ticket => {
                    overlay.summary = match outcome {
                        Ok(text) => SummaryStatus::Ready(text),
                        Err(e) => SummaryStatus::Degraded {
                            reason: e.to_string(),
                        },
                    };
                }
                _ => tracing::debug!(?ticket, "dropping summary for closed overlay"),
            }
            None
        }
        Action::RefreshStarted => {
            if state.refreshing {
                None
            } else {
                tracing::debug!("rescan started");
                state.refreshing = true;
                Some(Effect::FinishRefreshAfter(RESCAN_DURATION))
            }
        }
        Action::RefreshFinished => {
            tracing::debug!("rescan finished");
            state.refreshing = false;
            None
        }
    };
    (state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Category;

    fn apply(state: AppState, action: Action) -> AppState {
        reduce(state, action).0
    }

    fn select(state: AppState, job_id: &str) -> (AppState, Ticket) {
        let (state, effect) = reduce(state, Action::SelectJob(job_id.into()));
        match effect {
            Some(Effect::FetchSummary { ticket, job_id: id }) => {
                assert_eq!(id, job_id);
                (state, ticket)
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn active_ids(state: &AppState) -> Vec<&str> {
        state
            .trips
            .iter()
            .filter(|t| t.is_active)
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn filter_follows_search_category_and_immediate_flag() {
        let mut state = AppState::default();
        state = apply(state, Action::SetSearch("cy".into()));
        state = apply(state, Action::PushSearchChar('b'));
        state = apply(state, Action::SetCategory(CategoryFilter::Only(Category::Service)));
        state = apply(state, Action::ToggleAvailability(AvailabilityFlag::Immediate));

        let filter = state.filter();
        assert_eq!(filter.query, "cyb");
        assert_eq!(filter.category, CategoryFilter::Only(Category::Service));
        assert!(!filter.immediate_only);

        state = apply(state, Action::PopSearchChar);
        assert_eq!(state.filter().query, "cy");
    }

    #[test]
    fn filter_ignores_active_trip() {
        let state = AppState::default();
        let before = state.filter();
        let state = apply(state, Action::ActivateTrip("t2".into()));
        assert_eq!(state.filter(), before);
    }

    #[test]
    fn activate_trip_switches_and_returns_to_explore() {
        let mut state = apply(AppState::default(), Action::SwitchTab(Tab::Schedule));
        state = apply(state, Action::ActivateTrip("t2".into()));
        assert!(!state.trips[0].is_active);
        assert!(state.trips[1].is_active);
        assert_eq!(state.tab, Tab::Explore);
        assert_eq!(state.active_trip().map(|t| t.id.as_str()), Some("t2"));
    }

    #[test]
    fn activate_unknown_trip_keeps_trips() {
        let state = apply(AppState::default(), Action::ActivateTrip("nope".into()));
        assert_eq!(active_ids(&state), vec!["t1"]);
    }

    #[test]
    fn activate_active_trip_is_idempotent() {
        let state = apply(AppState::default(), Action::ActivateTrip("t1".into()));
        let state = apply(state, Action::ActivateTrip("t1".into()));
        assert_eq!(active_ids(&state), vec!["t1"]);
    }

    #[test]
    fn toggle_availability_twice_restores() {
        let state = AppState::default();
        let original = state.availability;
        let state = apply(state, Action::ToggleAvailability(AvailabilityFlag::Night));
        assert!(state.availability.night);
        assert_eq!(state.availability.morning, original.morning);
        let state = apply(state, Action::ToggleAvailability(AvailabilityFlag::Night));
        assert_eq!(state.availability, original);
    }

    #[test]
    fn category_cycles() {
        let mut state = AppState::default();
        for _ in 0..5 {
            state = apply(state, Action::CycleCategory);
        }
        assert_eq!(state.category, CategoryFilter::All);
    }

    #[test]
    fn selecting_replaces_previous_selection() {
        let (state, first) = select(AppState::default(), "3");
        let (state, second) = select(state, "9");
        assert_ne!(first, second);
        assert_eq!(state.selected_job_id(), Some("9"));
        assert_eq!(
            state.overlay.as_ref().map(|o| &o.summary),
            Some(&SummaryStatus::Pending)
        );
    }

    #[test]
    fn clearing_selection_is_idempotent() {
        let (state, _) = select(AppState::default(), "3");
        let state = apply(state, Action::ClearSelection);
        assert!(state.overlay.is_none());
        let again = apply(state.clone(), Action::ClearSelection);
        assert_eq!(again, state);
    }

    #[test]
    fn resolved_summary_lands_on_its_overlay() {
        let (state, ticket) = select(AppState::default(), "3");
        let state = apply(
            state,
            Action::SummaryResolved {
                ticket,
                outcome: Ok("X".into()),
            },
        );
        let overlay = state.overlay.unwrap();
        assert_eq!(overlay.summary, SummaryStatus::Ready("X".into()));
        assert_eq!(overlay.summary.display_text(), "X");
    }

    #[test]
    fn ready_summary_is_trimmed_for_display() {
        let status = SummaryStatus::Ready("\n  Brew the future.  \n".into());
        assert_eq!(status.display_text(), "Brew the future.");
    }

    #[test]
    fn failed_summary_shows_fallback() {
        let (state, ticket) = select(AppState::default(), "3");
        let state = apply(
            state,
            Action::SummaryResolved {
                ticket,
                outcome: Err(SummaryError::MissingCredential),
            },
        );
        let summary = state.overlay.unwrap().summary;
        assert!(matches!(summary, SummaryStatus::Degraded { .. }));
        assert_eq!(summary.display_text(), FALLBACK_SUMMARY);
    }

    #[test]
    fn late_summary_after_close_is_dropped() {
        let (state, ticket) = select(AppState::default(), "3");
        let closed = apply(state, Action::ClearSelection);
        let after = apply(
            closed.clone(),
            Action::SummaryResolved {
                ticket,
                outcome: Ok("stale".into()),
            },
        );
        assert_eq!(after, closed);
    }

    #[test]
    fn late_summary_does_not_reach_later_overlay() {
        let (state, stale) = select(AppState::default(), "3");
        let state = apply(state, Action::ClearSelection);
        let (state, current) = select(state, "3");

        let state = apply(
            state,
            Action::SummaryResolved {
                ticket: stale,
                outcome: Ok("stale".into()),
            },
        );
        assert_eq!(
            state.overlay.as_ref().map(|o| &o.summary),
            Some(&SummaryStatus::Pending)
        );

        let state = apply(
            state,
            Action::SummaryResolved {
                ticket: current,
                outcome: Ok("fresh".into()),
            },
        );
        assert_eq!(
            state.overlay.map(|o| o.summary),
            Some(SummaryStatus::Ready("fresh".into()))
        );
    }

    #[test]
    fn rescan_runs_once_at_a_time() {
        let (state, effect) = reduce(AppState::default(), Action::RefreshStarted);
        assert!(state.refreshing);
        assert_eq!(effect, Some(Effect::FinishRefreshAfter(RESCAN_DURATION)));

        let (state, effect) = reduce(state, Action::RefreshStarted);
        assert!(effect.is_none());

        let state = apply(state, Action::RefreshFinished);
        assert!(!state.refreshing);
    }

    #[test]
    fn tabs_cycle() {
        let mut tab = Tab::Explore;
        for _ in 0..3 {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Explore);
    }
}
