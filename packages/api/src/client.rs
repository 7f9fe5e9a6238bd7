//! Shared HTTP plumbing for the table and bucket handles.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response};

use crate::bucket::SupabaseBucket;
use crate::config::SupabaseConfig;
use crate::error::{ApiError, ApiResult};
use crate::table::SupabaseTable;

/// A Supabase project client. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: Arc<SupabaseConfig>,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Handle on one table of the project's REST API.
    pub fn table(&self, name: impl Into<String>) -> SupabaseTable {
        SupabaseTable::new(self.clone(), name.into())
    }

    /// Handle on one storage bucket.
    pub fn bucket(&self, name: impl Into<String>) -> SupabaseBucket {
        SupabaseBucket::new(self.clone(), name.into())
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.post(url))
    }

    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.patch(url))
    }

    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.delete(url))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

/// Send `request` and turn a non-2xx answer into [`ApiError::Status`].
pub(crate) async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
