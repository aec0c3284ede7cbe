//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `nslookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All lookup logic lives in the library crate.

use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;

use nslookup::{
    init_logger, init_resolver, lookup_all, lookup_one, Config, LookupRequest, QueryType,
    SearchPath,
};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = run(config).await {
        eprintln!("nslookup error: {e:#}");
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    init_logger(config.debug).context("Failed to initialize logger")?;

    // An unknown record type is absence, not an error: print nothing and
    // exit cleanly, the same way a zero-answer lookup does.
    let Ok(qtype) = QueryType::from_str(&config.qtype) else {
        log::debug!("Unknown record type: {}", config.qtype);
        return Ok(());
    };

    let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
    let search = if config.search.is_empty() {
        SearchPath::from_system().context("Failed to read search domains")?
    } else {
        SearchPath::explicit(config.search.clone())
    };

    let request = LookupRequest {
        term: config.term.clone(),
        qtype,
    };

    if config.all {
        for answer in lookup_all(&request, &resolver, &search).await {
            println!("{answer}");
        }
    } else if let Some(answer) = lookup_one(&request, &resolver, &search).await {
        println!("{answer}");
    }

    Ok(())
}
