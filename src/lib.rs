//! nslookup library: convenience DNS lookups over hickory-resolver.
//!
//! This crate answers the questions the command-line `nslookup` tool
//! answers (A/CNAME, MX, and NS lookups) through one small API. The DNS
//! wire protocol, transport, timeouts, and retries all belong to
//! hickory-resolver; this crate adds request normalization, search-domain
//! handling for unqualified names, and the nested address resolution of
//! MX exchangers and name servers.
//!
//! Absence is never an error: a malformed request, an unknown record type,
//! or a query with no answers all come back as `None` / an empty vector.
//! Only initialization (logger, resolv.conf) can fail.
//!
//! # Example
//!
//! ```no_run
//! use nslookup::{init_resolver, lookup_one, LookupRequest, SearchPath};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver()?;
//! let search = SearchPath::from_system()?;
//!
//! let request = LookupRequest::new("use.perl.org");
//! if let Some(address) = lookup_one(&request, &resolver, &search).await {
//!     println!("{address}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The lookups require a Tokio runtime. Use `#[tokio::main]` in your
//! application or call them from within an async context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
mod initialization;
mod request;
mod search_path;

// Re-export public API
pub use config::Config;
pub use dns::{lookup_all, lookup_one, nslookup, nslookup_all};
pub use error_handling::InitializationError;
pub use initialization::{init_logger, init_resolver};
pub use request::{LookupRequest, QueryType};
pub use search_path::SearchPath;
