//! The A-record wire shape of the registrar API.

use serde::{Deserialize, Serialize};

/// One DNS A record as the registrar API represents it.
///
/// Records are decoded from the fetch response, mutated in place (the
/// `data` field only) while diffing, and serialized verbatim, including
/// the untouched ones, when the full set is submitted back. Field order
/// matters for the request body and matches the API: `data`, `name`,
/// `ttl`, `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The record's IP address value.
    pub data: String,

    /// Record name: `"@"`, `"*"` or a subdomain label. Unique within a
    /// domain's A-record set for this tool's purposes.
    pub name: String,

    /// Time-to-live in seconds, passed through unmodified.
    pub ttl: u32,

    /// Record type, `"A"` for everything this tool operates on; passed
    /// through unmodified.
    #[serde(rename = "type")]
    pub record_type: String,
}
