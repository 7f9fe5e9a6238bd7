//! Backend selection for all platforms.
//!
//! Returns a [`Backend`] that implements both collaborator traits:
//! - **Supabase** when connection settings are available: read from the
//!   environment / `.env` on native targets, or baked in at build time
//!   (`SUPABASE_URL`, `SUPABASE_ANON_KEY`) on WASM.
//! - **Memory** otherwise, so the page still works for a local demo.

use store::{
    LogoBucket, LogoFile, MemoryStore, NewRecord, Record, RecordTable, RecordsConfig, StoreResult,
};

/// The remote collaborators the page runs against.
#[derive(Clone, Debug)]
pub enum Backend {
    Supabase {
        table: api::SupabaseTable,
        bucket: api::SupabaseBucket,
    },
    Memory(MemoryStore),
}

impl Backend {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Supabase { .. })
    }
}

impl RecordTable for Backend {
    async fn select_all(&self) -> StoreResult<Vec<Record>> {
        match self {
            Self::Supabase { table, .. } => table.select_all().await,
            Self::Memory(store) => store.select_all().await,
        }
    }

    async fn insert(&self, row: &NewRecord) -> StoreResult<()> {
        match self {
            Self::Supabase { table, .. } => table.insert(row).await,
            Self::Memory(store) => store.insert(row).await,
        }
    }

    async fn update(&self, id: i64, row: &NewRecord) -> StoreResult<()> {
        match self {
            Self::Supabase { table, .. } => table.update(id, row).await,
            Self::Memory(store) => store.update(id, row).await,
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        match self {
            Self::Supabase { table, .. } => table.delete(id).await,
            Self::Memory(store) => store.delete(id).await,
        }
    }
}

impl LogoBucket for Backend {
    async fn upload(&self, path: &str, file: &LogoFile) -> StoreResult<String> {
        match self {
            Self::Supabase { bucket, .. } => bucket.upload(path, file).await,
            Self::Memory(store) => store.upload(path, file).await,
        }
    }

    fn public_url(&self, path: &str) -> String {
        match self {
            Self::Supabase { bucket, .. } => bucket.public_url(path),
            Self::Memory(store) => store.public_url(path),
        }
    }
}

/// Create the platform-appropriate backend for `records`.
pub fn make_backend(records: &RecordsConfig) -> Backend {
    match supabase_config() {
        Some(supabase) => {
            let (table, bucket) = api::connect(supabase, records);
            Backend::Supabase { table, bucket }
        }
        None => {
            tracing::warn!("no Supabase settings found, records are kept in memory");
            Backend::Memory(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn supabase_config() -> Option<api::SupabaseConfig> {
    match api::SupabaseConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "supabase settings unavailable");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn supabase_config() -> Option<api::SupabaseConfig> {
    api::SupabaseConfig::from_build_env()
}

/// Load `records.toml` from the working directory, defaulting when absent.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_records_config() -> RecordsConfig {
    let path = std::path::Path::new(RecordsConfig::filename());
    let Ok(text) = std::fs::read_to_string(path) else {
        return RecordsConfig::default();
    };
    match RecordsConfig::from_toml(&text) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, file = %path.display(), "invalid config, using defaults");
            RecordsConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_records_config() -> RecordsConfig {
    RecordsConfig::default()
}
