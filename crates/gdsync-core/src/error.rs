//! Error types for the reconciliation call
//!
//! Fetch-phase and apply-phase failures are distinct kinds so a caller can
//! tell whether the registrar state may already have been touched.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for reconciliation operations
pub type Result<T> = std::result::Result<T, Error>;

/// The HTTP round trip a transport-level error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The GET retrieving the current A records.
    Fetch,
    /// The PUT submitting the rewritten record set.
    Apply,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Fetch => write!(f, "fetch"),
            Phase::Apply => write!(f, "apply"),
        }
    }
}

/// Error type for a reconciliation call
///
/// Every kind aborts the call immediately; nothing is retried or recovered
/// internally. The caller receives either a populated report or one of
/// these, never both.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be constructed, e.g. from a malformed endpoint.
    /// Not expected with validated inputs.
    #[error("could not build the {phase} request: {source}")]
    RequestBuild {
        /// Round trip that was being prepared
        phase: Phase,
        /// Underlying client error
        source: reqwest::Error,
    },

    /// Network-level failure while talking to the registrar.
    #[error("transport failure during {phase}: {source}")]
    Transport {
        /// Round trip that failed
        phase: Phase,
        /// Underlying client error
        source: reqwest::Error,
    },

    /// The record fetch returned something other than HTTP 200.
    #[error("fetching A records failed with status code {status}")]
    FetchStatus {
        /// Status code the registrar answered with
        status: StatusCode,
    },

    /// The fetch response body is not a valid A-record array.
    #[error("decoding the A record response failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The record update returned something other than HTTP 200.
    #[error("updating A records failed with status code {status}, body: {body}")]
    ApplyStatus {
        /// Status code the registrar answered with
        status: StatusCode,
        /// Response body text, read best-effort (empty if unreadable)
        body: String,
    },
}

impl Error {
    /// Classify a client error from the given round trip.
    ///
    /// Request-construction failures surface from reqwest at send time;
    /// they are split out here so they don't masquerade as network faults.
    pub(crate) fn transport(phase: Phase, source: reqwest::Error) -> Self {
        if source.is_builder() {
            Self::RequestBuild { phase, source }
        } else {
            Self::Transport { phase, source }
        }
    }
}
