//! Effect execution: the background half of the reducer.
//!
//! [`reduce`](crate::state::reduce) only describes work. The runner does it
//! off the UI thread and reports back through a channel as ordinary
//! [`Action`]s, which the UI loop feeds to the reducer like key presses.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::state::{Action, Effect, Ticket};
use crate::summary::{SummaryError, Summarizer, TextGenerator};

/// Runs effects on worker threads.
pub struct EffectRunner<G> {
    catalog: Arc<Catalog>,
    summarizer: Arc<Summarizer<G>>,
    tx: Sender<Action>,
}

impl<G: TextGenerator + 'static> EffectRunner<G> {
    pub fn new(catalog: Arc<Catalog>, summarizer: Summarizer<G>, tx: Sender<Action>) -> Self {
        Self {
            catalog,
            summarizer: Arc::new(summarizer),
            tx,
        }
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchSummary { ticket, job_id } => self.fetch_summary(ticket, job_id),
            Effect::FinishRefreshAfter(delay) => self.finish_refresh_after(delay),
        }
    }

    fn fetch_summary(&self, ticket: Ticket, job_id: String) {
        let catalog = Arc::clone(&self.catalog);
        let summarizer = Arc::clone(&self.summarizer);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let outcome = match catalog.job(&job_id) {
                Some(job) => summarizer.summarize(job),
                None => Err(SummaryError::UnknownJob(job_id.clone())),
            };
            if let Err(e) = &outcome {
                tracing::warn!(job = %job_id, error = %e, "summary degraded to fallback");
            }
            // The receiver is gone once the UI has quit.
            let _ = tx.send(Action::SummaryResolved { ticket, outcome });
        });
    }

    fn finish_refresh_after(&self, delay: Duration) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(Action::RefreshFinished);
        });
    }
}
