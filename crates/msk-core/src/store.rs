//! The suggestion store: the single owner of the dashboard's in-memory list.
//!
//! Mutations are applied optimistically and then persisted. When persistence
//! fails the store reloads the authoritative list from storage instead of
//! rolling back, then reports the failure to the caller.
//!
//! Readers observe state through [`SuggestionStore::snapshot`] or a
//! [`watch::Receiver`] from [`SuggestionStore::subscribe`]; only the store
//! writes to it.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use jiff::Timestamp;
use tokio::sync::watch;

use crate::{
    db::utils::now_millis,
    error::{DashboardError, Result},
    format::dates::DEFAULT_OVERDUE_THRESHOLD_DAYS,
    models::{
        CreateSuggestion, DashboardStats, Employee, EmployeeLookup, SortDirection, SortField,
        SortSpec, SuggestionFilters, SuggestionStatus, SuggestionWithEmployee, UpdateSuggestion,
    },
    query,
    storage::Storage,
};

/// Error message shown when the list cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load suggestions";

/// Observable state of a [`SuggestionStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Suggestions joined with employee summaries, most recently updated first
    /// as of the last load
    pub suggestions: Vec<SuggestionWithEmployee>,
    pub employees: Vec<Employee>,
    /// True while at least one load is in flight
    pub is_loading: bool,
    pub error: Option<String>,
}

/// View-model over a [`Storage`] implementation.
pub struct SuggestionStore {
    storage: Arc<dyn Storage>,
    state: watch::Sender<StoreState>,
    loads_in_flight: AtomicUsize,
    disposed: AtomicBool,
    overdue_threshold_days: i64,
}

impl SuggestionStore {
    /// Creates an empty store. Call [`load`](Self::load) to populate it.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            storage,
            state,
            loads_in_flight: AtomicUsize::new(0),
            disposed: AtomicBool::new(false),
            overdue_threshold_days: DEFAULT_OVERDUE_THRESHOLD_DAYS,
        }
    }

    /// Sets the age in days after which pending suggestions count as overdue.
    pub fn with_overdue_threshold(mut self, days: i64) -> Self {
        self.overdue_threshold_days = days;
        self
    }

    pub fn overdue_threshold_days(&self) -> i64 {
        self.overdue_threshold_days
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// A receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// Stops the store from applying any further storage completions.
    ///
    /// Calls still in flight finish, but their results no longer reach the
    /// state.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Fetches all suggestions and employees and replaces the list wholesale.
    ///
    /// Concurrent loads are not sequenced: each one that completes replaces
    /// the list, so the last to resolve wins.
    ///
    /// # Errors
    ///
    /// * `DashboardError::LoadFailed` - When storage cannot be read; the state
    ///   keeps its previous list and carries an error message
    pub async fn load(&self) -> Result<()> {
        if self.is_disposed() {
            log::debug!("Ignoring load on a disposed store");
            return Ok(());
        }
        self.state.send_modify(|state| {
            let in_flight = self.loads_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_loading = in_flight > 0;
        });

        let fetched = tokio::try_join!(
            self.storage.list_suggestions_with_employees(),
            self.storage.list_employees(),
        );

        if self.is_disposed() {
            log::debug!("Discarding load that completed after the store was disposed");
            self.state.send_if_modified(|state| {
                let still_loading = self.finish_load();
                let changed = state.is_loading != still_loading;
                state.is_loading = still_loading;
                changed
            });
            return fetched
                .map(|_| ())
                .map_err(|e| DashboardError::LoadFailed {
                    message: e.to_string(),
                });
        }

        match fetched {
            Ok((suggestions, employees)) => {
                log::debug!("Loaded {} suggestions", suggestions.len());
                self.state.send_modify(|state| {
                    state.suggestions = suggestions;
                    state.employees = employees;
                    state.error = None;
                    state.is_loading = self.finish_load();
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Error loading suggestions: {e}");
                self.state.send_modify(|state| {
                    state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    state.is_loading = self.finish_load();
                });
                Err(DashboardError::LoadFailed {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Decrements the in-flight counter; returns whether loads remain.
    fn finish_load(&self) -> bool {
        let previous = self
            .loads_in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_sub(1))
            })
            .unwrap_or(0);
        previous > 1
    }

    /// Changes a suggestion's status, optionally recording notes.
    ///
    /// The change is visible in the state before storage confirms it. Empty
    /// notes leave the existing notes untouched.
    ///
    /// # Errors
    ///
    /// * `DashboardError::UpdateFailed` - When storage rejects the change; the
    ///   list has been reloaded from storage by the time this returns
    pub async fn update_status(
        &self,
        id: &str,
        status: SuggestionStatus,
        notes: Option<String>,
    ) -> Result<()> {
        let update = UpdateSuggestion::status_change(status, notes.clone());
        self.apply_optimistic(id, &update, now_millis());

        let outcome = self
            .storage
            .update_suggestion_status(id, status, notes)
            .await;
        if outcome.success {
            return Ok(());
        }

        let message = outcome
            .error
            .unwrap_or_else(|| "Failed to update suggestion".to_string());
        self.reconcile(id, message).await
    }

    /// Applies a general update (status, notes, estimated cost) with the same
    /// optimistic protocol as [`update_status`](Self::update_status).
    pub async fn update_details(&self, id: &str, update: &UpdateSuggestion) -> Result<()> {
        self.apply_optimistic(id, update, now_millis());

        match self.storage.update_suggestion(id, update).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("Error updating suggestion {id}: {e}");
                self.reconcile(id, e.to_string()).await
            }
        }
    }

    fn apply_optimistic(&self, id: &str, update: &UpdateSuggestion, now: Timestamp) {
        if self.is_disposed() {
            return;
        }
        self.state.send_if_modified(|state| {
            match state.suggestions.iter_mut().find(|s| s.suggestion.id == id) {
                Some(record) => {
                    update.apply_to(&mut record.suggestion, now);
                    true
                }
                None => {
                    log::debug!("Suggestion {id} not in the local list; skipping optimistic update");
                    false
                }
            }
        });
    }

    /// Discards optimistic state by reloading, then reports the failure.
    async fn reconcile(&self, id: &str, message: String) -> Result<()> {
        if self.is_disposed() {
            log::debug!("Discarding failed update of {id} after the store was disposed");
        } else {
            log::warn!("Reloading suggestions after failed update of {id}");
            if let Err(e) = self.load().await {
                log::warn!("Reload after failed update did not complete: {e}");
            }
        }

        Err(DashboardError::UpdateFailed {
            id: id.to_string(),
            message,
        })
    }

    /// Validates and persists an admin suggestion, then prepends it to the
    /// list.
    ///
    /// # Errors
    ///
    /// * `DashboardError::InvalidInput` - When required fields are missing; no
    ///   storage call is made
    /// * `DashboardError::CreateFailed` - When storage fails
    pub async fn create(
        &self,
        data: &CreateSuggestion,
        created_by: &str,
    ) -> Result<SuggestionWithEmployee> {
        data.validate()?;

        let created = self.persist_new(data, created_by).await.map_err(|e| {
            log::error!("Error creating suggestion: {e}");
            DashboardError::CreateFailed {
                message: e.to_string(),
            }
        })?;

        if self.is_disposed() {
            log::debug!("Not merging created suggestion into a disposed store");
            return Ok(created);
        }

        self.state.send_modify(|state| {
            let id = &created.suggestion.id;
            if !state.suggestions.iter().any(|s| &s.suggestion.id == id) {
                state.suggestions.insert(0, created.clone());
            }
        });
        Ok(created)
    }

    async fn persist_new(
        &self,
        data: &CreateSuggestion,
        created_by: &str,
    ) -> Result<SuggestionWithEmployee> {
        let id = self.storage.create_suggestion(data, created_by).await?;
        let suggestion = self
            .storage
            .get_suggestion(&id)
            .await?
            .ok_or_else(|| DashboardError::SuggestionNotFound { id: id.clone() })?;

        let known = self
            .state
            .borrow()
            .employees
            .iter()
            .find(|e| e.id == suggestion.employee_id)
            .cloned();
        let employee = match known {
            Some(employee) => employee,
            None => self
                .storage
                .get_employee(&suggestion.employee_id)
                .await?
                .ok_or_else(|| DashboardError::EmployeeNotFound {
                    id: suggestion.employee_id.clone(),
                })?,
        };

        Ok(SuggestionWithEmployee::new(suggestion, &employee))
    }

    /// The current list filtered and sorted for display.
    pub fn visible(&self, filters: &SuggestionFilters, sort: SortSpec) -> Vec<SuggestionWithEmployee> {
        let state = self.state.borrow();
        let lookup: &dyn EmployeeLookup = &state.employees;
        query::project(&state.suggestions, filters, sort, Some(lookup))
    }

    /// The `n` most recently updated suggestions.
    pub fn recent(&self, n: usize) -> Vec<SuggestionWithEmployee> {
        let state = self.state.borrow();
        let mut recent = query::sort_suggestions(
            &state.suggestions,
            SortField::DateUpdated,
            SortDirection::Desc,
        );
        recent.truncate(n);
        recent
    }

    /// Aggregate counts over the current list.
    pub fn stats(&self) -> DashboardStats {
        self.stats_at(Timestamp::now())
    }

    pub fn stats_at(&self, now: Timestamp) -> DashboardStats {
        DashboardStats::from_suggestions(
            &self.state.borrow().suggestions,
            now,
            self.overdue_threshold_days,
        )
    }
}
