//! Record-type handlers and the lookup entry points.
//!
//! Every lookup funnels through [`lookup_all`]/[`lookup_one`] (or their
//! argument-list fronts [`nslookup_all`]/[`nslookup`]) and dispatches on
//! the request's [`QueryType`]. Failures never surface to the caller:
//! resolver errors are logged and collapse into empty results, matching
//! the absence-not-error contract of the whole crate.

use std::net::IpAddr;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::request::{LookupRequest, QueryType};
use crate::search_path::SearchPath;

/// Runs a normalized lookup and returns every match in response order.
///
/// CNAME requests share the A handler; the resolver follows the alias
/// chain itself.
///
/// # Arguments
///
/// * `request` - The normalized lookup request
/// * `resolver` - The DNS resolver instance
/// * `search` - Search suffixes for unqualified A-lookup terms
///
/// # Returns
///
/// Every matching address or hostname in response order. An empty vector
/// means absence: no answers, or a query that failed and was logged.
pub async fn lookup_all(
    request: &LookupRequest,
    resolver: &TokioAsyncResolver,
    search: &SearchPath,
) -> Vec<String> {
    match request.qtype {
        QueryType::A | QueryType::Cname => lookup_a(&request.term, resolver, search).await,
        QueryType::Mx => lookup_mx(&request.term, resolver, search).await,
        QueryType::Ns => lookup_ns(&request.term, resolver, search).await,
    }
}

/// Runs a normalized lookup and returns the first match, if any.
///
/// # Returns
///
/// The first match in response order, or `None` when the lookup yields
/// nothing.
pub async fn lookup_one(
    request: &LookupRequest,
    resolver: &TokioAsyncResolver,
    search: &SearchPath,
) -> Option<String> {
    lookup_all(request, resolver, search)
        .await
        .into_iter()
        .next()
}

/// Normalizes a raw argument list and returns every match.
///
/// # Arguments
///
/// * `args` - A single hostname, or key/value pairs as accepted by
///   [`LookupRequest::from_args`]
/// * `resolver` - The DNS resolver instance
/// * `search` - Search suffixes for unqualified A-lookup terms
///
/// # Returns
///
/// Every match in response order. Malformed arguments (odd-length pairs,
/// missing term, unknown type) yield an empty vector, not an error.
pub async fn nslookup_all<S: AsRef<str>>(
    args: &[S],
    resolver: &TokioAsyncResolver,
    search: &SearchPath,
) -> Vec<String> {
    match LookupRequest::from_args(args) {
        Some(request) => lookup_all(&request, resolver, search).await,
        None => Vec::new(),
    }
}

/// Normalizes a raw argument list and returns the first match, if any.
pub async fn nslookup<S: AsRef<str>>(
    args: &[S],
    resolver: &TokioAsyncResolver,
    search: &SearchPath,
) -> Option<String> {
    let request = LookupRequest::from_args(args)?;
    lookup_one(&request, resolver, search).await
}

/// Resolves a term to addresses (or, for an IP term, to PTR names).
///
/// An IP address term is reverse-looked-up exactly as given. A term with a
/// trailing dot is queried exactly as given. Anything else is tried bare
/// first and then with each search suffix in order; the first candidate
/// the resolver answers ends the walk.
///
/// PTR names are contributed exclusively by the reverse branch: hickory's
/// typed lookups mean an A-record walk never carries PTR answers, so the
/// candidate loop extracts A addresses only.
async fn lookup_a(term: &str, resolver: &TokioAsyncResolver, search: &SearchPath) -> Vec<String> {
    if let Ok(ip) = term.parse::<IpAddr>() {
        return match resolver.reverse_lookup(ip).await {
            Ok(response) => response.iter().map(|ptr| ptr.to_utf8()).collect(),
            Err(e) => {
                log_query_failure(term, RecordType::PTR, &e);
                Vec::new()
            }
        };
    }

    for candidate in search_candidates(term, search) {
        match resolver.lookup(candidate.as_str(), RecordType::A).await {
            Ok(lookup) => return a_addresses(lookup.iter()),
            Err(e) => log_query_failure(&candidate, RecordType::A, &e),
        }
    }
    Vec::new()
}

/// Resolves a domain's mail exchangers to addresses.
///
/// Exchange hosts keep the resolver's response order (deliberately not
/// re-sorted by preference) and each one is resolved sequentially through
/// the A handler.
async fn lookup_mx(domain: &str, resolver: &TokioAsyncResolver, search: &SearchPath) -> Vec<String> {
    let exchanges = match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => mx_exchanges(lookup.iter()),
        Err(e) => {
            log_query_failure(domain, RecordType::MX, &e);
            return Vec::new();
        }
    };

    let mut addresses = Vec::new();
    for exchange in &exchanges {
        addresses.extend(lookup_a(exchange, resolver, search).await);
    }
    addresses
}

/// Resolves a domain's name servers to addresses, one sequential A lookup
/// per server in response order.
async fn lookup_ns(domain: &str, resolver: &TokioAsyncResolver, search: &SearchPath) -> Vec<String> {
    let servers = match resolver.lookup(domain, RecordType::NS).await {
        Ok(lookup) => ns_hosts(lookup.iter()),
        Err(e) => {
            log_query_failure(domain, RecordType::NS, &e);
            return Vec::new();
        }
    };

    let mut addresses = Vec::new();
    for server in &servers {
        addresses.extend(lookup_a(server, resolver, search).await);
    }
    addresses
}

/// Builds the ordered list of names to try for a term.
///
/// Fully-qualified terms (trailing dot) and IP addresses get exactly one
/// candidate; everything else gets the bare term followed by one candidate
/// per search suffix.
fn search_candidates(term: &str, search: &SearchPath) -> Vec<String> {
    if term.ends_with('.') || term.parse::<IpAddr>().is_ok() {
        return vec![term.to_string()];
    }
    let mut candidates = vec![term.to_string()];
    for suffix in search.iter() {
        candidates.push(format!("{term}.{suffix}"));
    }
    candidates
}

/// Extracts A-record address strings in response order.
fn a_addresses<'a>(records: impl Iterator<Item = &'a RData>) -> Vec<String> {
    records
        .filter_map(|rdata| {
            if let RData::A(addr) = rdata {
                Some(addr.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Extracts MX exchange hostnames in response order, without sorting by
/// preference.
fn mx_exchanges<'a>(records: impl Iterator<Item = &'a RData>) -> Vec<String> {
    records
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some(mx.exchange().to_utf8())
            } else {
                None
            }
        })
        .collect()
}

/// Extracts NS hostnames in response order.
fn ns_hosts<'a>(records: impl Iterator<Item = &'a RData>) -> Vec<String> {
    records
        .filter_map(|rdata| {
            if let RData::NS(ns) = rdata {
                Some(ns.to_utf8())
            } else {
                None
            }
        })
        .collect()
}

/// Logs a failed query. Ordinary empty answers log at debug; anything
/// else (timeouts, refusals, transport errors) logs at warn.
fn log_query_failure(name: &str, rtype: RecordType, error: &ResolveError) {
    if matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
        log::debug!("No {rtype} records found for {name}");
    } else {
        log::warn!("Failed to look up {rtype} records for {name}: {error}");
    }
}
