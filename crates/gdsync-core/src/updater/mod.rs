//! The check-and-update reconciliation routine
//!
//! The [`Updater`] brings a domain's A records in line with a target IP:
//!
//! 1. Fetch the current record set from the registrar
//! 2. Rewrite, in memory, every eligible record whose data differs
//! 3. Submit the full set back, unless dry-run or nothing changed
//! 4. Report the final records and whether a mutation happened
//!
//! Control flow is strictly linear; the apply round trip never starts
//! before the fetch has completed and is decided on its result.

use std::collections::HashSet;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Config, UpdateOption};
use crate::error::{Error, Phase, Result};
use crate::record::Record;

/// Outcome of one reconciliation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// True only if an apply round trip was attempted and succeeded.
    pub did_update: bool,

    /// The full record set as fetched, with in-place diffs applied. Never a
    /// partial list: unchanged and ineligible records are included, and the
    /// diffs are visible even under dry-run so callers can always inspect
    /// what would or did change.
    pub records: Vec<Record>,
}

/// Reconciles a domain's A records against a target IP.
#[derive(Debug, Default)]
pub struct Updater;

impl Updater {
    /// Create a new updater.
    pub fn new() -> Self {
        Self
    }

    /// Run one fetch-diff-apply pass for `domain`.
    ///
    /// # Parameters
    ///
    /// - `domain`: domain whose A records are synchronized; assumed
    ///   syntactically valid, no validation is performed here
    /// - `target_ip`: the IP every eligible record should point at
    /// - `options`: ordered setting overrides, see [`UpdateOption`]
    ///
    /// # Returns
    ///
    /// - `Ok(Report)`: the final record set plus whether a mutation happened
    /// - `Err(Error)`: the call aborted; no report, no partial state
    pub async fn check_and_update(
        &self,
        domain: &str,
        target_ip: &str,
        options: impl IntoIterator<Item = UpdateOption>,
    ) -> Result<Report> {
        let config = Config::resolve(options);
        let url = records_url(&config.endpoint, domain);

        let mut records = self.fetch_records(&config, &url).await?;
        let update_needed = rewrite_stale_records(&mut records, target_ip, &config.record_names);

        if !update_needed {
            info!(
                "all eligible A records of {} already point at {}",
                domain, target_ip
            );
            return Ok(Report {
                did_update: false,
                records,
            });
        }

        if config.dry_run {
            info!("dry run, not updating the A records of {}", domain);
            return Ok(Report {
                did_update: false,
                records,
            });
        }

        self.put_records(&config, &url, &records).await?;
        info!("updated A records of {} to {}", domain, target_ip);

        Ok(Report {
            did_update: true,
            records,
        })
    }

    /// Retrieve the authoritative current A-record set. Single attempt.
    async fn fetch_records(&self, config: &Config, url: &str) -> Result<Vec<Record>> {
        debug!("fetching A records from {}", url);

        let mut request = config.http_client.get(url);
        if let Some(header) = config.auth_header() {
            request = request.header(AUTHORIZATION, header);
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::transport(Phase::Fetch, err))?;

        if response.status() != StatusCode::OK {
            return Err(Error::FetchStatus {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| Error::transport(Phase::Fetch, err))?;
        let records: Vec<Record> = serde_json::from_str(&body)?;

        debug!("fetched {} A records", records.len());
        Ok(records)
    }

    /// Submit the full record set back, changed and unchanged records alike.
    async fn put_records(&self, config: &Config, url: &str, records: &[Record]) -> Result<()> {
        debug!("submitting {} A records to {}", records.len(), url);

        let mut request = config
            .http_client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .json(records);
        if let Some(header) = config.auth_header() {
            request = request.header(AUTHORIZATION, header);
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::transport(Phase::Apply, err))?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            // Best effort: an unreadable body must not mask the status error.
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ApplyStatus { status, body });
        }

        Ok(())
    }
}

fn records_url(endpoint: &str, domain: &str) -> String {
    format!("{}/v1/domains/{}/records/A", endpoint, domain)
}

/// Rewrite every eligible, stale record to the target IP, in place.
///
/// A record is eligible when the filter set is empty or contains its name.
/// Returns true when at least one record was actually changed. Pure
/// in-memory logic: no I/O, never errors.
fn rewrite_stale_records(
    records: &mut [Record],
    target_ip: &str,
    filter: &HashSet<String>,
) -> bool {
    let mut changed = false;

    for record in records {
        if !filter.is_empty() && !filter.contains(&record.name) {
            continue;
        }

        if record.data != target_ip {
            debug!(
                "record {} is stale: {} -> {}",
                record.name, record.data, target_ip
            );
            record.data = target_ip.to_string();
            changed = true;
        }
    }

    changed
}
