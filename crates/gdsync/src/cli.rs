//! Command-line interface.
//!
//! The shell validates its inputs before the core is ever called: the core
//! itself performs no validation and would surface a bad domain only as a
//! confusing registrar error.

use clap::{Args, Parser, Subcommand};
use gdsync_core::DEFAULT_ENDPOINT;

/// Keep GoDaddy A records synchronized from the command line.
#[derive(Parser)]
#[command(author, name = "gdsync", version)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check and update the A records of a domain to an IP address.
    ///
    /// Fetches the domain's current A records, rewrites the ones that
    /// differ from IP, and submits the full record set back unless
    /// --dry-run is given. The resulting report is printed as JSON.
    Update(UpdateArgs),

    /// Print the license terms of gdsync.
    License {
        /// Print the full text of the license.
        #[arg(short = 'f', long)]
        full: bool,
    },
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Domain whose A records are synchronized.
    #[arg(value_parser = parse_domain)]
    pub domain: String,

    /// Target IPv4 address the records should point at.
    pub ip: std::net::Ipv4Addr,

    /// API endpoint to use.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Auth key to use when authenticating.
    #[arg(short = 'a', long, default_value = "")]
    pub auth_key: String,

    /// Auth secret to use when authenticating.
    #[arg(short = 's', long, default_value = "")]
    pub auth_secret: String,

    /// Report what would be updated without updating anything.
    #[arg(short, long)]
    pub dry_run: bool,

    /// A record name to update; repeatable. When not given, all found A
    /// records are updated.
    #[arg(short, long = "record-name", value_name = "NAME")]
    pub record_names: Vec<String>,
}

fn parse_domain(raw: &str) -> Result<String, String> {
    validate_domain_name(raw)?;
    Ok(raw.to_string())
}

/// Basic DNS domain name validation per RFC 1035. Not comprehensive, but it
/// catches the common mistakes before any request is made.
fn validate_domain_name(domain: &str) -> Result<(), String> {
    if domain.is_empty() {
        return Err("domain name cannot be empty".to_string());
    }

    // RFC 1035: 253 chars max in total, 63 per label
    if domain.len() > 253 {
        return Err(format!(
            "domain name too long: {} chars (max 253)",
            domain.len()
        ));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(format!("domain name has an empty label: '{}'", domain));
        }

        if label.len() > 63 {
            return Err(format!(
                "domain label too long: {} chars (max 63): '{}'",
                label.len(),
                label
            ));
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!(
                "domain label contains invalid characters: '{}'. Valid: alphanumeric and hyphen only",
                label
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!(
                "domain label cannot start or end with a hyphen: '{}'",
                label
            ));
        }
    }

    Ok(())
}
