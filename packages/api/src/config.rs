//! Supabase connection settings from the environment or the build.

use crate::error::ApiError;

/// Connection settings for a Supabase project.
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`. No trailing slash.
    pub url: String,
    /// Anonymous API key, sent as both `apikey` and bearer token.
    pub anon_key: String,
    /// Whether uploads replace an existing object at the same path.
    pub upsert: bool,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            upsert: true,
        }
    }

    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and the optional
    /// `SUPABASE_UPSERT` from the environment (and `.env`).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| ApiError::Config("SUPABASE_URL not set".to_string()))?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| ApiError::Config("SUPABASE_ANON_KEY not set".to_string()))?;

        let mut config = Self::new(url, anon_key);
        if let Ok(upsert) = std::env::var("SUPABASE_UPSERT") {
            config.upsert = parse_flag(&upsert)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Settings baked in at compile time, for targets without an environment.
    pub fn from_build_env() -> Option<Self> {
        let config = Self::new(option_env!("SUPABASE_URL")?, option_env!("SUPABASE_ANON_KEY")?);
        config.validate().ok()?;
        Some(config)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ApiError::Config(format!(
                "SUPABASE_URL must be an http(s) URL, got {:?}",
                self.url
            )));
        }
        if self.anon_key.is_empty() {
            return Err(ApiError::Config("SUPABASE_ANON_KEY is empty".to_string()));
        }
        Ok(())
    }

    /// `<url>/rest/v1/<table>`
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// `<url>/storage/v1/object/<bucket>/<path>`, with each path segment
    /// percent-encoded.
    pub fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.url, bucket, encode_path(path))
    }

    /// `<url>/storage/v1/object/public/<bucket>/<path>`
    pub fn public_object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.url,
            bucket,
            encode_path(path)
        )
    }
}

/// Encode each segment so `#`, `?` and spaces stay part of the object name.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn parse_flag(value: &str) -> Result<bool, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ApiError::Config(format!("invalid SUPABASE_UPSERT: {other}"))),
    }
}
