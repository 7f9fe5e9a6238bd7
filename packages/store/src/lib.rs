pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod repo;
pub mod state;

mod memory;
pub use memory::{Call, MemoryStore, Operation};

pub use config::{MessagesConfig, RecordsConfig, RefreshPolicy};
pub use error::{StoreError, StoreResult};
pub use manager::{RecordManager, SubmitOutcome};
pub use models::{LogoFile, NewRecord, Record};
pub use repo::{LogoBucket, RecordTable};
pub use state::{AppState, FormField, FormMode, FormState, MISSING_FIELDS_ALERT};
