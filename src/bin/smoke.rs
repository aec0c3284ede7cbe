//! DNS smoke test binary.
//!
//! Runs four live checks against public DNS and prints one TAP-style
//! `ok N` / `not ok N` line per check: initialization, an A lookup with a
//! known answer, and MX/NS lookups against known answer sets. Always
//! exits 0: the output lines are the verdict, not the exit code.

use clap::Parser;

use nslookup::{init_resolver, nslookup, InitializationError, SearchPath};

/// Known historical address of use.perl.org.
const USE_PERL_ORG_A: &str = "63.251.223.166";

/// Known historical addresses of perl.org's mail exchangers.
const PERL_ORG_MX: &[&str] = &["63.251.223.186", "63.251.223.187"];

/// Known historical addresses of perl.org's name servers.
const PERL_ORG_NS: &[&str] = &["63.251.223.181", "204.74.64.1", "204.74.65.1"];

#[derive(Parser, Debug)]
#[command(name = "smoke", about = "Smoke-test the nslookup crate against live DNS")]
struct Args {
    /// Print each raw looked-up value to stderr
    #[arg(short, long)]
    debug: bool,
}

/// Resolves the search path for check 1.
///
/// A failure fails the check but does not abort the run: the remaining
/// checks still execute with an empty search path, which is enough for
/// the fully-qualified names they look up.
fn search_or_default(result: Result<SearchPath, InitializationError>) -> (SearchPath, bool) {
    match result {
        Ok(search) => (search, true),
        Err(_) => (SearchPath::default(), false),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut check = 0;
    let mut report = |ok: bool| {
        check += 1;
        if ok {
            println!("ok {check}");
        } else {
            println!("not ok {check}");
        }
    };

    // Check 1: the crate initializes (resolver plus system search path).
    let resolver = match init_resolver() {
        Ok(resolver) => resolver,
        Err(e) => {
            if args.debug {
                eprintln!("init_resolver: {e}");
            }
            for _ in 0..4 {
                report(false);
            }
            return;
        }
    };
    let search_result = SearchPath::from_system();
    if let Err(e) = &search_result {
        if args.debug {
            eprintln!("search path: {e}");
        }
    }
    let (search, search_ok) = search_or_default(search_result);
    report(search_ok);

    // Check 2: A lookup with a single known answer.
    let address = nslookup(&["use.perl.org"], &resolver, &search).await;
    if args.debug {
        eprintln!("use.perl.org A: {address:?}");
    }
    report(address.as_deref() == Some(USE_PERL_ORG_A));

    // Check 3: MX lookup landing in a known answer set.
    let address = nslookup(&["type", "MX", "domain", "perl.org"], &resolver, &search).await;
    if args.debug {
        eprintln!("perl.org MX: {address:?}");
    }
    report(matches!(address.as_deref(), Some(a) if PERL_ORG_MX.contains(&a)));

    // Check 4: NS lookup landing in a known answer set.
    let address = nslookup(&["type", "NS", "domain", "perl.org"], &resolver, &search).await;
    if args.debug {
        eprintln!("perl.org NS: {address:?}");
    }
    report(matches!(address.as_deref(), Some(a) if PERL_ORG_NS.contains(&a)));
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn search_path_failure_fails_the_init_check() {
        let err = InitializationError::ResolvConfError {
            path: PathBuf::from("/nonexistent/resolv.conf"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let (search, ok) = search_or_default(Err(err));
        assert!(!ok);
        // The run continues with an empty path for the remaining checks.
        assert!(search.is_empty());
    }

    #[test]
    fn search_path_success_passes_the_init_check() {
        let path = SearchPath::explicit(vec!["perl.org".into()]);
        let (search, ok) = search_or_default(Ok(path.clone()));
        assert!(ok);
        assert_eq!(search, path);
    }
}
