//! # API crate — Supabase REST backend for the record manager
//!
//! This crate implements the two collaborator traits from the `store` crate
//! against a Supabase project, talking plain HTTPS through `reqwest`. The same
//! code runs natively (desktop) and in the browser (WASM).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`SupabaseConfig`]: project URL, anon key, upsert flag; loaded from the environment (`dotenvy`) or baked in at build time |
//! | [`error`] | [`ApiError`]: transport, status, decode and configuration failures |
//! | `client` | [`SupabaseClient`]: shared `reqwest::Client` that stamps the `apikey` and bearer headers on every request |
//! | `table` | [`SupabaseTable`]: `RecordTable` over `/rest/v1/<table>` (select, insert, patch and delete filtered by `id=eq.<id>`) |
//! | `bucket` | [`SupabaseBucket`]: `LogoBucket` over `/storage/v1/object/<bucket>/<path>` plus public URL construction |
//!
//! Errors are converted to `store::StoreError` at the trait boundary, so the
//! record manager never sees HTTP details. They are still logged there with
//! their full text.

pub mod config;
pub mod error;

mod bucket;
mod client;
mod table;

pub use bucket::SupabaseBucket;
pub use client::SupabaseClient;
pub use config::SupabaseConfig;
pub use error::{ApiError, ApiResult};
pub use table::SupabaseTable;

/// Table and bucket handles named by a [`store::RecordsConfig`].
pub fn connect(
    supabase: SupabaseConfig,
    records: &store::RecordsConfig,
) -> (SupabaseTable, SupabaseBucket) {
    let client = SupabaseClient::new(supabase);
    tracing::info!(
        url = %client.config().url,
        table = %records.table.name,
        bucket = %records.storage.bucket,
        "connecting to supabase"
    );
    (
        client.table(&records.table.name),
        client.bucket(&records.storage.bucket),
    )
}
