//! Weight log form component
//!
//! Holds what a weight log screen renders: the list of entries fetched from
//! the service and the entry form. Both live in `watch` channels so a UI
//! layer can subscribe and redraw on change.
//!
//! Fetches and submissions may overlap. Every fetch is numbered when it is
//! issued and a response is only applied if it is newer than the list
//! currently shown.

use chrono::{NaiveDate, Utc};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use weight_logs_shared::{FormField, FormState, WeightLogEntry, WeightLogQuery};

use crate::api::WeightLogApi;
use crate::error::ClientResult;

/// Displayed entries plus the fetch that produced them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogList {
    /// Generation of the fetch that filled `entries`; 0 before any success
    pub generation: u64,
    pub entries: Vec<WeightLogEntry>,
}

/// Headless weight log form
pub struct WeightLogsComponent<A> {
    api: A,
    date_filter: Option<NaiveDate>,
    form: watch::Sender<FormState>,
    logs: watch::Sender<LogList>,
    mounted: AtomicBool,
    issued: AtomicU64,
}

impl<A: WeightLogApi> WeightLogsComponent<A> {
    pub fn new(api: A, form: FormState) -> Self {
        Self {
            api,
            date_filter: None,
            form: watch::Sender::new(form),
            logs: watch::Sender::new(LogList::default()),
            mounted: AtomicBool::new(false),
            issued: AtomicU64::new(0),
        }
    }

    /// Only list entries recorded on `date`
    pub fn with_date_filter(mut self, date: Option<NaiveDate>) -> Self {
        self.date_filter = date;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current form snapshot
    pub fn form(&self) -> FormState {
        self.form.borrow().clone()
    }

    /// Entries currently displayed
    pub fn logs(&self) -> Vec<WeightLogEntry> {
        self.logs.borrow().entries.clone()
    }

    pub fn subscribe_form(&self) -> watch::Receiver<FormState> {
        self.form.subscribe()
    }

    pub fn subscribe_logs(&self) -> watch::Receiver<LogList> {
        self.logs.subscribe()
    }

    /// Replace one form field
    pub fn edit(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.form
            .send_modify(|form| *form = std::mem::take(form).with(field, value));
    }

    /// Replace the whole form
    pub fn set_form(&self, form: FormState) {
        self.form.send_replace(form);
    }

    /// First-mount hook: fetches once, later calls do nothing
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Component already mounted");
            return;
        }
        self.fetch_weight_logs().await;
    }

    /// Refresh the displayed list, logging and swallowing any failure
    pub async fn fetch_weight_logs(&self) {
        if let Err(e) = self.try_fetch_weight_logs().await {
            error!(error = %e, status = ?e.status(), "Error fetching weight logs");
        }
    }

    /// Refresh the displayed list
    ///
    /// Returns `false` when the response arrived after a newer one had
    /// already been applied and was dropped.
    pub async fn try_fetch_weight_logs(&self) -> ClientResult<bool> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let session = self.form.borrow().session();
        let query = WeightLogQuery {
            date: self.date_filter,
        };

        debug!(generation, user_id = %session.user_id, "Fetching weight logs");
        let entries = self.api.list(&session, &query).await?;
        let count = entries.len();

        let applied = self.logs.send_if_modified(|list| {
            if generation <= list.generation {
                return false;
            }
            list.generation = generation;
            list.entries = entries;
            true
        });

        if applied {
            info!(generation, count, "Weight logs updated");
        } else {
            warn!(generation, "Discarding stale weight log response");
        }
        Ok(applied)
    }

    /// Submit the form, logging and swallowing any failure
    pub async fn handle_submit(&self) {
        if let Err(e) = self.try_submit().await {
            error!(error = %e, status = ?e.status(), "Error adding weight log");
        }
    }

    /// Create an entry from the current form
    ///
    /// On success the entry fields are reset and the list is fetched again.
    /// On failure the form is left exactly as it was.
    pub async fn try_submit(&self) -> ClientResult<()> {
        let snapshot = self.form();
        let log = snapshot.to_new_log(Utc::now())?;
        let session = snapshot.session();

        self.api.create(&session, &log).await?;
        info!(weight = log.weight, unit = %log.unit, "Weight log created");

        self.form.send_modify(|form| *form = form.cleared_entry());
        self.fetch_weight_logs().await;
        Ok(())
    }
}
