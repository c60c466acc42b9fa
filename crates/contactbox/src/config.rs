use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding contact records (default: "contacts")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub contacts_table: String,
    /// Bucket receiving resume uploads (default: "resumes")
    pub resume_bucket: String,
    /// Public domain serving uploaded files (default: "localhost:3000")
    pub public_domain: String,
    /// Base URL for locally signed upload URLs (default: "http://localhost:9000")
    /// Note: Only used when the `local` feature is enabled.
    #[cfg_attr(not(feature = "local"), allow(dead_code))]
    pub local_storage_endpoint: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTACTS_TABLE` - DynamoDB table name (default: "contacts")
    /// - `RESUME_BUCKET` - S3 bucket name (default: "resumes")
    /// - `CLOUDFRONT_DOMAIN` - Public domain for file URLs (default: "localhost:3000")
    /// - `LOCAL_STORAGE_ENDPOINT` - Local signer base URL (default: "http://localhost:9000")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            contacts_table: var("CONTACTS_TABLE", "contacts"),
            resume_bucket: var("RESUME_BUCKET", "resumes"),
            public_domain: var("CLOUDFRONT_DOMAIN", "localhost:3000"),
            local_storage_endpoint: var("LOCAL_STORAGE_ENDPOINT", "http://localhost:9000"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
