use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{StoreError, StoreResult};
use crate::models::{LogoFile, NewRecord, Record};
use crate::repo::{LogoBucket, RecordTable};

/// A remote operation, used to inject failures into [`MemoryStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    SelectAll,
    Insert,
    Update,
    Delete,
    Upload,
}

/// A call observed by [`MemoryStore`], in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    SelectAll,
    Insert(NewRecord),
    Update { id: i64, row: NewRecord },
    Delete(i64),
    Upload { path: String },
}

#[derive(Debug)]
struct Inner {
    rows: Vec<Record>,
    next_id: i64,
    objects: HashMap<String, Vec<u8>>,
    calls: Vec<Call>,
    record_calls: bool,
    failing: HashSet<Operation>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            objects: HashMap::new(),
            calls: Vec::new(),
            record_calls: false,
            failing: HashSet::new(),
        }
    }
}

/// In-memory record table and logo bucket for testing and offline runs.
///
/// Clones share the same data, so a test can keep a handle while a
/// [`crate::RecordManager`] owns another.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    public_base: String,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            inner: Arc::default(),
            public_base: "memory://logos/".to_string(),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that keeps every call for [`calls`](Self::calls).
    ///
    /// Plain [`new`](Self::new) stores record nothing, so the offline
    /// fallback does not grow with use.
    pub fn recording() -> Self {
        let store = Self::default();
        store.lock().record_calls = true;
        store
    }

    /// Base prepended to stored paths by [`LogoBucket::public_url`].
    pub fn with_public_base(mut self, base: impl Into<String>) -> Self {
        self.public_base = base.into();
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a row directly, bypassing call recording.
    pub fn seed(&self, row: NewRecord) -> Record {
        let mut inner = self.lock();
        let record = row.with_id(inner.next_id);
        inner.next_id += 1;
        inner.rows.push(record.clone());
        record
    }

    /// Make every future call of `op` fail until [`recover`](Self::recover).
    pub fn fail(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    pub fn recover(&self, op: Operation) {
        self.lock().failing.remove(&op);
    }

    pub fn rows(&self) -> Vec<Record> {
        self.lock().rows.clone()
    }

    pub fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.lock().objects.get(path).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Record `call` when recording and report whether `op` is set to fail.
    fn enter(&self, op: Operation, call: Call) -> StoreResult<MutexGuard<'_, Inner>> {
        let mut inner = self.lock();
        if inner.record_calls {
            inner.calls.push(call);
        }
        if inner.failing.contains(&op) {
            let message = format!("simulated {op:?} failure");
            return Err(match op {
                Operation::Upload => StoreError::Upload(message),
                _ => StoreError::Remote(message),
            });
        }
        Ok(inner)
    }
}

impl RecordTable for MemoryStore {
    async fn select_all(&self) -> StoreResult<Vec<Record>> {
        let inner = self.enter(Operation::SelectAll, Call::SelectAll)?;
        Ok(inner.rows.clone())
    }

    async fn insert(&self, row: &NewRecord) -> StoreResult<()> {
        let mut inner = self.enter(Operation::Insert, Call::Insert(row.clone()))?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.push(row.clone().with_id(id));
        Ok(())
    }

    async fn update(&self, id: i64, row: &NewRecord) -> StoreResult<()> {
        let mut inner = self.enter(
            Operation::Update,
            Call::Update {
                id,
                row: row.clone(),
            },
        )?;
        if let Some(existing) = inner.rows.iter_mut().find(|r| r.id == id) {
            *existing = row.clone().with_id(id);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.enter(Operation::Delete, Call::Delete(id))?;
        inner.rows.retain(|r| r.id != id);
        Ok(())
    }
}

impl LogoBucket for MemoryStore {
    async fn upload(&self, path: &str, file: &LogoFile) -> StoreResult<String> {
        let mut inner = self.enter(
            Operation::Upload,
            Call::Upload {
                path: path.to_string(),
            },
        )?;
        // Same path replaces the previous object.
        inner.objects.insert(path.to_string(), file.bytes.clone());
        Ok(path.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}{}", self.public_base, path)
    }
}
