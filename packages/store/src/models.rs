//! # Domain models for user records and logo uploads
//!
//! Defines the rows exchanged with a [`crate::RecordTable`] and the files handed
//! to a [`crate::LogoBucket`]. These types are `Serialize + Deserialize` so they
//! can travel as JSON to the remote table store unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Record`] | One persisted user row: the store-assigned `id` plus the four free-text fields. |
//! | [`NewRecord`] | The four field values sent on insert and update. Never carries an `id`. |
//! | [`LogoFile`] | A picked file: its original name, raw bytes and an optional content type. |
//!
//! ## Wire names
//!
//! The remote table uses capitalised column names (`Name`, `Age`, `Email`,
//! `Logo`). The serde renames below keep the Rust field names idiomatic while
//! matching those columns. `age` is opaque text: it is stored and read back
//! exactly as typed.
//!
//! ## Helper functions
//!
//! - [`logo_storage_path`] — builds the bucket path for an upload from the
//!   file's original name (`"logo.png"` → `"logos/logo.png.jpg"`).
//! - [`content_type_for`] — guesses a MIME type from a file name's extension.

use serde::{Deserialize, Serialize};

/// A persisted user row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Primary key, assigned by the remote store on insert.
    pub id: i64,
    #[serde(rename = "Name", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free text, never parsed as a number.
    #[serde(rename = "Age", default, deserialize_with = "null_as_empty")]
    pub age: String,
    #[serde(rename = "Email", default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Path of the logo object inside the bucket, empty when none was uploaded.
    #[serde(rename = "Logo", default, deserialize_with = "null_as_empty")]
    pub logo_path: String,
}

/// Field values written on insert and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Logo")]
    pub logo_path: String,
}

impl NewRecord {
    /// Attach a store-assigned id, producing the persisted row.
    pub fn with_id(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            logo_path: self.logo_path,
        }
    }
}

impl From<&Record> for NewRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.clone(),
            email: record.email.clone(),
            logo_path: record.logo_path.clone(),
        }
    }
}

/// A file selected for upload as a logo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoFile {
    /// Original file name as reported by the picker, e.g. "logo.png".
    pub name: String,
    pub bytes: Vec<u8>,
    /// MIME type if the picker reported one.
    pub content_type: Option<String>,
}

impl LogoFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: None,
        }
    }

    /// MIME type to send with the upload.
    pub fn content_type(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| content_type_for(&self.name).to_string())
    }
}

/// Build the bucket path for a logo upload.
///
/// The suffix is appended verbatim, so the original extension survives:
/// `"logo.png"` with prefix `"logos/"` and suffix `".jpg"` gives
/// `"logos/logo.png.jpg"`. Two uploads of the same file name map to the same
/// path and the later one replaces the earlier object.
pub fn logo_storage_path(prefix: &str, file_name: &str, suffix: &str) -> String {
    format!("{prefix}{file_name}{suffix}")
}

/// Guess a content type from a file name's extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
