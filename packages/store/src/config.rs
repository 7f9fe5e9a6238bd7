//! # Record Manager configuration — `records.toml`
//!
//! Names the remote table and bucket, describes how logo upload paths are
//! built, and states what happens to the local list after a mutation
//! (filename: [`RecordsConfig::filename`] = `"records.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! refresh = "full-reload"    # or "manual"
//!
//! [table]
//! name = "UsersInfo1"
//!
//! [storage]
//! bucket = "Logotip"
//! path_prefix = "logos/"
//! path_suffix = ".jpg"
//! # public_base_url = "https://cdn.example.com/Logotip/"
//!
//! [messages]
//! missing_fields = "Barcha maydonlarni to‘ldiring!"
//! ```
//!
//! Every section and field has a default, so a missing or empty file equals
//! [`RecordsConfig::default`].

use serde::{Deserialize, Serialize};

use crate::models::logo_storage_path;
use crate::state::MISSING_FIELDS_ALERT;

/// Top-level configuration stored in `records.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsConfig {
    #[serde(default)]
    pub refresh: RefreshPolicy,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// What the manager does with the local list after a successful mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Re-fetch the whole table after every create, update and delete.
    #[default]
    FullReload,
    /// Leave the list as is; the caller reloads when it wants to.
    Manual,
}

/// Remote table settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_table_name")]
    pub name: String,
}

fn default_table_name() -> String {
    "UsersInfo1".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: default_table_name(),
        }
    }
}

/// Object store settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// Appended verbatim after the original file name.
    #[serde(default = "default_path_suffix")]
    pub path_suffix: String,
    /// Overrides the bucket's own public URL base when set.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

fn default_bucket() -> String {
    "Logotip".to_string()
}

fn default_path_prefix() -> String {
    "logos/".to_string()
}

fn default_path_suffix() -> String {
    ".jpg".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            path_prefix: default_path_prefix(),
            path_suffix: default_path_suffix(),
            public_base_url: None,
        }
    }
}

/// User-facing texts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Alert for a submit with a blank field.
    #[serde(default = "default_missing_fields")]
    pub missing_fields: String,
}

fn default_missing_fields() -> String {
    MISSING_FIELDS_ALERT.to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            missing_fields: default_missing_fields(),
        }
    }
}

impl RecordsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "records.toml"
    }

    /// Builder method to set the refresh policy.
    pub fn with_refresh(mut self, refresh: RefreshPolicy) -> Self {
        self.refresh = refresh;
        self
    }

    /// Bucket path for an uploaded file with this original name.
    pub fn logo_path(&self, file_name: &str) -> String {
        logo_storage_path(
            &self.storage.path_prefix,
            file_name,
            &self.storage.path_suffix,
        )
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
