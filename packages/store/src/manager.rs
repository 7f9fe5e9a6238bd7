//! # Record Manager — the single controller behind the page
//!
//! [`RecordManager`] owns the [`AppState`] (record list + form) and the two
//! remote collaborators. Every user action maps to one method:
//!
//! | Method | Remote calls | State change on success | On failure |
//! |--------|--------------|-------------------------|------------|
//! | [`load_all`](RecordManager::load_all) | `select_all` | list replaced | logged, list kept |
//! | [`upload_logo`](RecordManager::upload_logo) | `upload` | form `logo_path` set | logged, `logo_path` kept |
//! | [`submit`](RecordManager::submit) | `insert` or `update`, then `select_all` | form reset, list reloaded | logged, form kept, no reload |
//! | [`delete_record`](RecordManager::delete_record) | `delete`, then `select_all` | list reloaded | logged, no reload |
//! | [`begin_edit`](RecordManager::begin_edit) / [`cancel_edit`](RecordManager::cancel_edit) | none | form mode switched | — |
//!
//! Remote failures never reach the user. They are logged with `tracing` and
//! reported back to the caller as a `bool` or a [`SubmitOutcome`]. The only
//! user-visible error is the missing-fields alert placed in
//! [`AppState::alert`].
//!
//! ## State updates
//!
//! All mutation goes through one private entry point that applies a closure to
//! the state and then hands a snapshot to the observer registered with
//! [`with_observer`](RecordManager::with_observer). The UI uses that hook to
//! mirror the state into a signal. No borrow of the state is held across an
//! `.await`.
//!
//! ## Busy flag and ordering
//!
//! `busy` is raised before each remote call and lowered after it. It only
//! informs the UI; overlapping calls are not rejected. After a successful
//! mutation the reload (under [`RefreshPolicy::FullReload`]) is awaited
//! before the method returns, so it never overlaps the mutation itself.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{RecordsConfig, RefreshPolicy};
use crate::error::StoreError;
use crate::models::{LogoFile, Record};
use crate::repo::{LogoBucket, RecordTable};
use crate::state::{AppState, FormField, FormMode};

/// Result of [`RecordManager::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new row was inserted.
    Created,
    /// The row with this id was updated.
    Updated(i64),
    /// Nothing was sent because these fields are empty.
    Rejected(Vec<FormField>),
    /// The remote call failed; the form is unchanged.
    Failed(StoreError),
}

type Observer = Rc<dyn Fn(&AppState)>;

/// Controller for the record list and the create/edit form.
///
/// Cheap to clone; clones share state and backends.
pub struct RecordManager<T, B> {
    table: Rc<T>,
    bucket: Rc<B>,
    config: Rc<RecordsConfig>,
    state: Rc<RefCell<AppState>>,
    observer: Option<Observer>,
}

impl<T, B> Clone for RecordManager<T, B> {
    fn clone(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
            bucket: Rc::clone(&self.bucket),
            config: Rc::clone(&self.config),
            state: Rc::clone(&self.state),
            observer: self.observer.clone(),
        }
    }
}

impl<T: RecordTable, B: LogoBucket> RecordManager<T, B> {
    pub fn new(table: T, bucket: B, config: RecordsConfig) -> Self {
        Self {
            table: Rc::new(table),
            bucket: Rc::new(bucket),
            config: Rc::new(config),
            state: Rc::default(),
            observer: None,
        }
    }

    /// Call `observer` with a snapshot after every state change.
    pub fn with_observer(mut self, observer: impl Fn(&AppState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn config(&self) -> &RecordsConfig {
        &self.config
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Public URL for a stored logo path, `None` when the path is empty.
    pub fn public_url(&self, path: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        Some(match &self.config.storage.public_base_url {
            Some(base) => format!("{base}{path}"),
            None => self.bucket.public_url(path),
        })
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.borrow_mut();
            let result = f(&mut state);
            let snapshot = self.observer.as_ref().map(|_| state.clone());
            (result, snapshot)
        };
        if let (Some(observer), Some(snapshot)) = (&self.observer, snapshot) {
            observer(&snapshot);
        }
        result
    }

    fn set_busy(&self, busy: bool) {
        self.update(|state| state.form.busy = busy);
    }

    /// Replace the local list with the full remote table.
    pub async fn load_all(&self) -> bool {
        self.set_busy(true);
        match self.table.select_all().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded records");
                self.update(|state| {
                    state.records = records;
                    state.form.busy = false;
                });
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load records");
                self.set_busy(false);
                false
            }
        }
    }

    /// Upload a logo and remember its stored path in the form.
    pub async fn upload_logo(&self, file: LogoFile) -> bool {
        let path = self.config.logo_path(&file.name);
        self.set_busy(true);
        let result = self.bucket.upload(&path, &file).await;
        match result {
            Ok(stored) => {
                tracing::info!(path = %stored, bytes = file.bytes.len(), "uploaded logo");
                self.update(|state| {
                    state.form.logo_path = stored;
                    state.form.busy = false;
                });
                true
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to upload logo");
                self.set_busy(false);
                false
            }
        }
    }

    /// Insert or update the row described by the form.
    pub async fn submit(&self) -> SubmitOutcome {
        let form = self.state.borrow().form.clone();

        let missing = form.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "submit rejected, empty fields");
            let alert = self.config.messages.missing_fields.clone();
            self.update(|state| state.alert = Some(alert));
            return SubmitOutcome::Rejected(missing);
        }

        let row = form.to_new_record();
        self.set_busy(true);
        let (result, outcome) = match form.mode {
            FormMode::Create => (self.table.insert(&row).await, SubmitOutcome::Created),
            FormMode::Edit { target_id } => (
                self.table.update(target_id, &row).await,
                SubmitOutcome::Updated(target_id),
            ),
        };

        if let Err(e) = result {
            tracing::error!(mode = ?form.mode, error = %e, "failed to save record");
            self.set_busy(false);
            return SubmitOutcome::Failed(e);
        }

        tracing::info!(outcome = ?outcome, "saved record");
        self.update(|state| state.form.reset());
        self.refresh_after_mutation().await;
        self.set_busy(false);
        outcome
    }

    /// Delete a row, then reload on success.
    pub async fn delete_record(&self, id: i64) -> bool {
        self.set_busy(true);
        if let Err(e) = self.table.delete(id).await {
            tracing::error!(id, error = %e, "failed to delete record");
            self.set_busy(false);
            return false;
        }
        tracing::info!(id, "deleted record");
        self.refresh_after_mutation().await;
        self.set_busy(false);
        true
    }

    async fn refresh_after_mutation(&self) {
        match self.config.refresh {
            RefreshPolicy::FullReload => {
                self.load_all().await;
            }
            RefreshPolicy::Manual => {}
        }
    }

    /// Load `record` into the form for editing.
    pub fn begin_edit(&self, record: &Record) {
        self.update(|state| state.form.begin_edit(record));
    }

    /// Drop any edit in progress and clear the form.
    pub fn cancel_edit(&self) {
        self.update(|state| state.form.reset());
    }

    /// Set one form field from user input.
    pub fn set_field(&self, field: FormField, value: String) {
        self.update(|state| state.form.set(field, value));
    }

    /// Take the pending alert, if any.
    pub fn take_alert(&self) -> Option<String> {
        self.update(|state| state.alert.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Call, MemoryStore, Operation};
    use crate::models::NewRecord;
    use crate::state::MISSING_FIELDS_ALERT;

    fn manager(store: &MemoryStore) -> RecordManager<MemoryStore, MemoryStore> {
        RecordManager::new(store.clone(), store.clone(), RecordsConfig::default())
    }

    fn fill(manager: &RecordManager<MemoryStore, MemoryStore>) {
        manager.set_field(FormField::Name, "Ann".to_string());
        manager.set_field(FormField::Age, "30".to_string());
        manager.set_field(FormField::Email, "a@x.com".to_string());
        manager.set_field(FormField::Logo, "logos/p.jpg".to_string());
    }

    fn ann() -> NewRecord {
        NewRecord {
            name: "Ann".to_string(),
            age: "30".to_string(),
            email: "a@x.com".to_string(),
            logo_path: "logos/p.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_all_replaces_list() {
        let store = MemoryStore::recording();
        store.seed(ann());
        let manager = manager(&store);

        assert!(manager.load_all().await);

        let state = manager.snapshot();
        assert_eq!(state.records.len(), 1);
        assert!(!state.form.busy);
    }

    #[tokio::test]
    async fn test_rejected_submit_uses_configured_alert() {
        let store = MemoryStore::recording();
        let mut config = RecordsConfig::default();
        config.messages.missing_fields = "Please fill in all fields!".to_string();
        let manager = RecordManager::new(store.clone(), store.clone(), config);

        let outcome = manager.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected(FormField::ALL.to_vec()));
        assert_eq!(
            manager.take_alert().as_deref(),
            Some("Please fill in all fields!")
        );
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        let store = MemoryStore::recording();
        store.seed(ann());
        let manager = manager(&store);
        manager.load_all().await;

        store.seed(ann());
        store.fail(Operation::SelectAll);

        assert!(!manager.load_all().await);
        let state = manager.snapshot();
        assert_eq!(state.records.len(), 1);
        assert!(!state.form.busy);
    }

    #[tokio::test]
    async fn test_submit_with_empty_field_is_rejected() {
        let store = MemoryStore::recording();
        let manager = manager(&store);
        fill(&manager);

        for field in FormField::ALL {
            let saved = manager.snapshot().form.value(field).to_string();
            manager.set_field(field, String::new());

            let outcome = manager.submit().await;

            assert_eq!(outcome, SubmitOutcome::Rejected(vec![field]));
            assert_eq!(manager.take_alert().as_deref(), Some(MISSING_FIELDS_ALERT));
            manager.set_field(field, saved);
        }
        assert!(store.calls().is_empty());
        assert!(manager.take_alert().is_none());
    }

    #[tokio::test]
    async fn test_create_then_reload() {
        let store = MemoryStore::recording();
        let manager = manager(&store);
        manager.load_all().await;
        store.clear_calls();
        fill(&manager);

        assert_eq!(manager.submit().await, SubmitOutcome::Created);

        assert_eq!(store.calls(), vec![Call::Insert(ann()), Call::SelectAll]);
        let state = manager.snapshot();
        assert_eq!(state.records.len(), 1);
        let created = &state.records[0];
        assert_eq!(NewRecord::from(created), ann());
        assert_eq!(created.id, 1);

        // Form back to an empty create buffer
        assert_eq!(state.form.mode, FormMode::Create);
        assert_eq!(state.form.missing_fields(), FormField::ALL.to_vec());
        assert!(!state.form.busy);
    }

    #[tokio::test]
    async fn test_edit_sends_all_fields_to_target() {
        let store = MemoryStore::recording();
        let existing = store.seed(ann());
        store.seed(NewRecord {
            name: "Bob".to_string(),
            ..ann()
        });
        let manager = manager(&store);
        manager.load_all().await;
        store.clear_calls();

        manager.begin_edit(&existing);
        manager.set_field(FormField::Email, "ann@y.com".to_string());
        let outcome = manager.submit().await;

        assert_eq!(outcome, SubmitOutcome::Updated(existing.id));
        let expected = NewRecord {
            email: "ann@y.com".to_string(),
            ..ann()
        };
        assert_eq!(
            store.calls()[0],
            Call::Update {
                id: existing.id,
                row: expected.clone(),
            }
        );

        let state = manager.snapshot();
        assert_eq!(state.form.mode, FormMode::Create);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records[0].id, existing.id);
        assert_eq!(state.records[0].email, "ann@y.com");
    }

    #[tokio::test]
    async fn test_failed_insert_keeps_form_and_skips_reload() {
        let store = MemoryStore::recording();
        let manager = manager(&store);
        fill(&manager);
        let before = manager.snapshot().form;
        store.fail(Operation::Insert);

        let outcome = manager.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(StoreError::Remote(_))));
        assert_eq!(store.calls(), vec![Call::Insert(ann())]);
        assert_eq!(manager.snapshot().form, before);
    }

    #[tokio::test]
    async fn test_failed_update_stays_in_edit_mode() {
        let store = MemoryStore::recording();
        let existing = store.seed(ann());
        let manager = manager(&store);
        manager.begin_edit(&existing);
        store.fail(Operation::Update);

        manager.submit().await;

        assert_eq!(
            manager.snapshot().form.mode,
            FormMode::Edit {
                target_id: existing.id
            }
        );
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let store = MemoryStore::recording();
        let first = store.seed(ann());
        store.seed(ann());
        let manager = manager(&store);
        manager.load_all().await;

        assert!(manager.delete_record(first.id).await);

        let records = manager.snapshot().records;
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.id != first.id));
    }

    #[tokio::test]
    async fn test_failed_delete_is_a_no_op() {
        let store = MemoryStore::recording();
        store.seed(ann());
        let manager = manager(&store);
        manager.load_all().await;
        store.clear_calls();
        store.fail(Operation::Delete);

        assert!(!manager.delete_record(1).await);

        assert_eq!(store.calls(), vec![Call::Delete(1)]);
        assert_eq!(manager.snapshot().records.len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_edit_from_any_mode() {
        let store = MemoryStore::recording();
        let existing = store.seed(ann());
        let manager = manager(&store);

        fill(&manager);
        manager.cancel_edit();
        assert_eq!(manager.snapshot().form.mode, FormMode::Create);
        assert_eq!(manager.snapshot().form.missing_fields().len(), 4);

        manager.begin_edit(&existing);
        manager.cancel_edit();
        assert_eq!(manager.snapshot().form.mode, FormMode::Create);
        assert_eq!(manager.snapshot().form.missing_fields().len(), 4);
    }

    #[tokio::test]
    async fn test_upload_builds_path_from_file_name() {
        let store = MemoryStore::recording();
        let manager = manager(&store);

        assert!(manager.upload_logo(LogoFile::new("logo.png", vec![9])).await);

        assert_eq!(manager.snapshot().form.logo_path, "logos/logo.png.jpg");
        assert_eq!(store.object("logos/logo.png.jpg"), Some(vec![9]));
        assert_eq!(
            manager.public_url("logos/logo.png.jpg").as_deref(),
            Some("memory://logos/logos/logo.png.jpg")
        );
        assert_eq!(manager.public_url(""), None);
    }

    #[tokio::test]
    async fn test_failed_upload_keeps_logo_path() {
        let store = MemoryStore::recording();
        let manager = manager(&store);
        manager.set_field(FormField::Logo, "logos/old.jpg".to_string());
        store.fail(Operation::Upload);

        assert!(!manager.upload_logo(LogoFile::new("new.png", vec![1])).await);

        let form = manager.snapshot().form;
        assert_eq!(form.logo_path, "logos/old.jpg");
        assert!(!form.busy);
    }

    #[tokio::test]
    async fn test_manual_refresh_skips_reload() {
        let store = MemoryStore::recording();
        let manager = RecordManager::new(
            store.clone(),
            store.clone(),
            RecordsConfig::default().with_refresh(RefreshPolicy::Manual),
        );
        fill(&manager);

        assert_eq!(manager.submit().await, SubmitOutcome::Created);

        assert_eq!(store.calls(), vec![Call::Insert(ann())]);
        assert!(manager.snapshot().records.is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_busy_during_call() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let store = MemoryStore::recording();
        let manager = manager(&store).with_observer({
            let seen = Rc::clone(&seen);
            move |state: &AppState| seen.borrow_mut().push(state.form.busy)
        });

        manager.load_all().await;

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
