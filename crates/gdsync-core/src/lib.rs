//! Core library for the gdsync A-record synchronizer.
//!
//! The crate exposes a single entry point, [`Updater::check_and_update`],
//! which runs one linear reconciliation pass against the registrar API:
//!
//! 1. Resolve an ordered list of [`UpdateOption`]s onto the default
//!    configuration.
//! 2. Fetch the domain's current A records.
//! 3. Rewrite, in memory, every eligible record whose data differs from the
//!    target IP.
//! 4. Submit the full record set back, unless the run is a dry run or
//!    nothing changed.
//!
//! The result is a [`Report`] carrying the final record set and whether a
//! mutation actually happened. There is no retry logic, no persistent state
//! and no internal concurrency; concurrent invocations are independent as
//! long as each one uses its own client or a client that is safe to share.

pub mod config;
pub mod error;
pub mod record;
pub mod updater;

// Re-export the caller-facing types for convenience
pub use config::{DEFAULT_ENDPOINT, UpdateOption};
pub use error::{Error, Phase, Result};
pub use record::Record;
pub use updater::{Report, Updater};
