//! Logger and DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use env_logger::Env;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::LevelFilter;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the logger.
///
/// Defaults to `info` (`debug` when `debug` is set); `RUST_LOG` overrides
/// either.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init_logger(debug: bool) -> Result<(), InitializationError> {
    let default = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default.as_str()))
        .try_init()?;
    Ok(())
}

/// Initializes the DNS resolver used for all lookups.
///
/// Creates a resolver with the default upstream configuration and explicit
/// timeouts so a dead nameserver cannot hang a lookup indefinitely. `ndots`
/// is forced to 0: search-domain suffixing is handled by
/// [`SearchPath`](crate::SearchPath), and the resolver must never append
/// its own suffixes on top of that.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing, or an
/// error if initialization fails.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
