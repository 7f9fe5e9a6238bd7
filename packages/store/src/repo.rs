//! # Remote collaborators: the record table and the logo bucket
//!
//! The Record Manager never talks to a backend directly. Every read and write
//! goes through one of the two traits below, so the same controller logic runs
//! against the HTTP client in the `api` crate, the in-memory
//! [`crate::MemoryStore`] used in tests, or any future backend.
//!
//! ## [`RecordTable`]
//!
//! | Method | Remote operation |
//! |--------|------------------|
//! | [`select_all`](RecordTable::select_all) | Fetch every row of the table. |
//! | [`insert`](RecordTable::insert) | Insert one row; the store assigns the `id`. |
//! | [`update`](RecordTable::update) | Overwrite the four fields of the row whose `id` matches. |
//! | [`delete`](RecordTable::delete) | Remove the row whose `id` matches. |
//!
//! Update and delete of an id that no longer exists are not errors: the
//! remote store filters by id and simply matches nothing.
//!
//! ## [`LogoBucket`]
//!
//! `upload` stores the bytes at a path and returns the stored path;
//! `public_url` turns a stored path into a URL that can be shown in an
//! `<img>` without signing.

use std::future::Future;

use crate::error::StoreResult;
use crate::models::{LogoFile, NewRecord, Record};

/// Async access to the remote table holding user rows.
pub trait RecordTable {
    fn select_all(&self) -> impl Future<Output = StoreResult<Vec<Record>>>;
    fn insert(&self, row: &NewRecord) -> impl Future<Output = StoreResult<()>>;
    fn update(&self, id: i64, row: &NewRecord) -> impl Future<Output = StoreResult<()>>;
    fn delete(&self, id: i64) -> impl Future<Output = StoreResult<()>>;
}

/// Async access to the object store holding logo images.
pub trait LogoBucket {
    /// Upload `file` at `path`, returning the path the store recorded.
    fn upload(&self, path: &str, file: &LogoFile) -> impl Future<Output = StoreResult<String>>;

    /// Public URL of a stored object.
    fn public_url(&self, path: &str) -> String;
}
