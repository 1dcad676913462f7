use anyhow::Context;
use std::env;
use storage::client::DEFAULT_BASE_URL;

/// Firebase Storage settings
///
/// Environment variables:
/// - FIREBASE_STORAGE_BUCKET: Bucket holding item images (required)
/// - FIREBASE_STORAGE_BASE_URL: API origin (default: "https://firebasestorage.googleapis.com")
/// - FIREBASE_STORAGE_TOKEN: Bearer token sent with uploads (optional)
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub base_url: String,
    pub token: Option<String>,
}

impl StorageConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bucket = lookup("FIREBASE_STORAGE_BUCKET")
            .filter(|bucket| !bucket.trim().is_empty())
            .context("FIREBASE_STORAGE_BUCKET must be set")?;

        Ok(Self {
            bucket,
            base_url: lookup("FIREBASE_STORAGE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: lookup("FIREBASE_STORAGE_TOKEN").filter(|token| !token.is_empty()),
        })
    }
}
