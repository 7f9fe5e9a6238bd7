//! [`LogoBucket`] over the storage endpoint `/storage/v1/object/<bucket>/<path>`.

use reqwest::RequestBuilder;
use serde::Deserialize;
use store::{LogoBucket, LogoFile, StoreError, StoreResult};

use crate::client::{send, SupabaseClient};
use crate::error::ApiResult;

/// One storage bucket of a Supabase project.
#[derive(Clone, Debug)]
pub struct SupabaseBucket {
    client: SupabaseClient,
    name: String,
}

/// Upload response body: `{"Key": "<bucket>/<path>", "Id": "..."}`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "Key")]
    key: Option<String>,
}

impl SupabaseBucket {
    pub(crate) fn new(client: SupabaseClient, name: String) -> Self {
        Self { client, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn upload_request(&self, path: &str, file: &LogoFile) -> RequestBuilder {
        let url = self.client.config().object_url(&self.name, path);
        self.client
            .post(&url)
            .header("content-type", file.content_type())
            .header("cache-control", "max-age=3600")
            .header("x-upsert", self.client.config().upsert.to_string())
            .body(file.bytes.clone())
    }

    /// Upload and return the path relative to the bucket.
    pub async fn put_object(&self, path: &str, file: &LogoFile) -> ApiResult<String> {
        let body = send(self.upload_request(path, file)).await?.text().await?;
        Ok(stored_path(&self.name, path, &body))
    }
}

/// Path the store recorded, falling back to the requested one when the
/// response carries no key.
fn stored_path(bucket: &str, requested: &str, body: &str) -> String {
    let key = serde_json::from_str::<UploadResponse>(body)
        .ok()
        .and_then(|r| r.key);
    match key {
        Some(key) => key
            .strip_prefix(bucket)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(str::to_string)
            .unwrap_or(key),
        None => requested.to_string(),
    }
}

impl LogoBucket for SupabaseBucket {
    async fn upload(&self, path: &str, file: &LogoFile) -> StoreResult<String> {
        self.put_object(path, file)
            .await
            .map_err(|e| StoreError::Upload(format!("{}/{}: {}", self.name, path, e)))
    }

    fn public_url(&self, path: &str) -> String {
        self.client.config().public_object_url(&self.name, path)
    }
}
