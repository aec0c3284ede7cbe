//! Tuning constants and command-line configuration.

use clap::Parser;

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;
/// Number of attempts per DNS query before giving up
pub const DNS_ATTEMPTS: usize = 2;

/// Environment variable holding a whitespace-separated search domain list.
///
/// This is the same variable the system resolver honors, so setting it
/// affects both this crate and anything else using libc resolution.
pub const LOCALDOMAIN_ENV: &str = "LOCALDOMAIN";

/// System resolver configuration file consulted for `domain`/`search`
/// directives when no explicit search list and no `LOCALDOMAIN` are given.
pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Command-line arguments for the `nslookup` binary.
#[derive(Parser, Debug)]
#[command(name = "nslookup", about = "Look up DNS records (A, CNAME, MX, NS)")]
pub struct Config {
    /// Hostname, domain, or IP address to look up
    pub term: String,

    /// Record type to query: A, CNAME, MX, or NS (case-insensitive)
    #[arg(short = 't', long = "type", default_value = "A")]
    pub qtype: String,

    /// Search domains to append to unqualified names
    /// (overrides LOCALDOMAIN and resolv.conf)
    #[arg(long = "search", value_name = "DOMAIN")]
    pub search: Vec<String>,

    /// Print every match instead of only the first
    #[arg(short, long)]
    pub all: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
