//! Configuration resolution for one reconciliation call
//!
//! A call's settings are built by folding an ordered list of
//! [`UpdateOption`]s onto [`Config::default`]. Later options win for scalar
//! fields; record-name options accumulate into a set. No validation happens
//! here: an empty endpoint or a malformed credential passes through
//! untouched and surfaces later as an HTTP error.

use std::collections::HashSet;
use std::fmt;

/// Production base URL of the registrar API.
pub const DEFAULT_ENDPOINT: &str = "https://api.godaddy.com";

/// One caller-supplied setting override.
#[derive(Debug, Clone)]
pub enum UpdateOption {
    /// Use this API base URL instead of [`DEFAULT_ENDPOINT`].
    Endpoint(String),

    /// Use this client for both HTTP round trips. The default client has no
    /// timeout configured; callers that need bounded latency inject one
    /// built with the timeouts they want.
    HttpClient(reqwest::Client),

    /// Restrict updates to records with this name. Repeatable; the names
    /// accumulate. When none are given, all fetched records are eligible.
    RecordName(String),

    /// When true, fetch and diff but never issue the mutating PUT.
    DryRun(bool),

    /// Auth key for the `sso-key` authorization scheme. Requests carry the
    /// header only when the key is non-empty.
    AuthKey(String),

    /// Auth secret paired with the key.
    AuthSecret(String),
}

/// Resolved settings for one reconciliation call.
pub struct Config {
    pub(crate) endpoint: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) record_names: HashSet<String>,
    pub(crate) dry_run: bool,
    pub(crate) auth_key: String,
    pub(crate) auth_secret: String,
}

impl Config {
    /// Fold the options, in the order given, onto the defaults.
    pub(crate) fn resolve(options: impl IntoIterator<Item = UpdateOption>) -> Self {
        let mut config = Self::default();

        for option in options {
            match option {
                UpdateOption::Endpoint(endpoint) => config.endpoint = endpoint,
                UpdateOption::HttpClient(client) => config.http_client = client,
                UpdateOption::RecordName(name) => {
                    config.record_names.insert(name);
                }
                UpdateOption::DryRun(dry_run) => config.dry_run = dry_run,
                UpdateOption::AuthKey(key) => config.auth_key = key,
                UpdateOption::AuthSecret(secret) => config.auth_secret = secret,
            }
        }

        config
    }

    /// The `Authorization` header value, if credentials were provided.
    ///
    /// The same `sso-key` scheme applies to the fetch and the apply round
    /// trip.
    pub(crate) fn auth_header(&self) -> Option<String> {
        if self.auth_key.is_empty() {
            None
        } else {
            Some(format!("sso-key {}:{}", self.auth_key, self.auth_secret))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: reqwest::Client::new(),
            record_names: HashSet::new(),
            dry_run: false,
            auth_key: String::new(),
            auth_secret: String::new(),
        }
    }
}

// Credentials never appear in Debug output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("record_names", &self.record_names)
            .field("dry_run", &self.dry_run)
            .field("auth_key", &"<REDACTED>")
            .field("auth_secret", &"<REDACTED>")
            .finish_non_exhaustive()
    }
}
