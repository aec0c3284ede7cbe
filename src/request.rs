//! Lookup request normalization.
//!
//! Callers may pass either a single hostname or a key/value argument list
//! (`["type", "MX", "domain", "perl.org"]`). Both are normalized here into
//! a [`LookupRequest`] before dispatch. Malformed input never errors: it
//! simply produces no request, which downstream becomes an empty result.

use std::str::FromStr;

use strum_macros::EnumString;

/// The record types a lookup can be dispatched on.
///
/// `CNAME` shares the A handler: the underlying query is the same and the
/// resolver chases the alias chain itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum QueryType {
    /// Address lookup (also covers reverse/PTR lookups for IP terms).
    A,
    /// Alias lookup, dispatched identically to `A`.
    Cname,
    /// Mail exchange lookup.
    Mx,
    /// Name server lookup.
    Ns,
}

/// A normalized lookup request: what to look up and which record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// The name or address being looked up.
    pub term: String,
    /// The record type to query.
    pub qtype: QueryType,
}

impl LookupRequest {
    /// Creates an A-record request for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        LookupRequest {
            term: term.into(),
            qtype: QueryType::A,
        }
    }

    /// Normalizes a raw argument list into a request.
    ///
    /// A single argument is taken as a hostname for an A lookup. Otherwise
    /// the arguments are read as key/value pairs: "term" (synonyms "host",
    /// "domain") names the lookup term and "type" (synonym "qtype") names
    /// the record type, defaulting to A. Type names match
    /// case-insensitively.
    ///
    /// Returns `None` for an odd-length pair list, a missing term, or an
    /// unknown record type.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<LookupRequest> {
        if args.len() == 1 {
            return Some(LookupRequest::new(args[0].as_ref()));
        }
        if args.len() % 2 != 0 {
            return None;
        }

        let mut term = None;
        let mut host = None;
        let mut domain = None;
        let mut rtype = None;
        let mut qtype = None;
        for pair in args.chunks_exact(2) {
            let value = pair[1].as_ref();
            match pair[0].as_ref() {
                "term" => term = Some(value),
                "host" => host = Some(value),
                "domain" => domain = Some(value),
                "type" => rtype = Some(value),
                "qtype" => qtype = Some(value),
                _ => {}
            }
        }

        let term = term.or(host).or(domain)?;
        let qtype = match rtype.or(qtype) {
            Some(name) => QueryType::from_str(name).ok()?,
            None => QueryType::A,
        };
        Some(LookupRequest {
            term: term.to_string(),
            qtype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_an_a_lookup() {
        let req = LookupRequest::from_args(&["use.perl.org"]).unwrap();
        assert_eq!(req.term, "use.perl.org");
        assert_eq!(req.qtype, QueryType::A);
    }

    #[test]
    fn odd_length_pairs_produce_nothing() {
        assert!(LookupRequest::from_args(&["type", "MX", "perl.org"]).is_none());
    }

    #[test]
    fn empty_arguments_produce_nothing() {
        let args: [&str; 0] = [];
        assert!(LookupRequest::from_args(&args).is_none());
    }

    #[test]
    fn host_and_domain_are_term_synonyms() {
        let by_host = LookupRequest::from_args(&["host", "use.perl.org"]).unwrap();
        let by_domain = LookupRequest::from_args(&["domain", "use.perl.org"]).unwrap();
        assert_eq!(by_host, by_domain);
        assert_eq!(by_host.term, "use.perl.org");
    }

    #[test]
    fn term_wins_over_its_synonyms() {
        let req =
            LookupRequest::from_args(&["domain", "other.example", "term", "use.perl.org"]).unwrap();
        assert_eq!(req.term, "use.perl.org");
    }

    #[test]
    fn qtype_is_a_type_synonym() {
        let req = LookupRequest::from_args(&["qtype", "NS", "domain", "perl.org"]).unwrap();
        assert_eq!(req.qtype, QueryType::Ns);
    }

    #[test]
    fn type_wins_over_qtype() {
        let req =
            LookupRequest::from_args(&["qtype", "NS", "type", "MX", "domain", "perl.org"]).unwrap();
        assert_eq!(req.qtype, QueryType::Mx);
    }

    #[test]
    fn type_defaults_to_a() {
        let req = LookupRequest::from_args(&["domain", "perl.org"]).unwrap();
        assert_eq!(req.qtype, QueryType::A);
    }

    #[test]
    fn type_matching_is_case_insensitive() {
        for name in ["mx", "MX", "Mx"] {
            let req = LookupRequest::from_args(&["type", name, "domain", "perl.org"]).unwrap();
            assert_eq!(req.qtype, QueryType::Mx);
        }
        assert_eq!(QueryType::from_str("cname").unwrap(), QueryType::Cname);
        assert_eq!(QueryType::from_str("CNAME").unwrap(), QueryType::Cname);
    }

    #[test]
    fn unknown_type_produces_nothing() {
        assert!(LookupRequest::from_args(&["type", "BOGUS", "term", "x"]).is_none());
    }

    #[test]
    fn missing_term_produces_nothing() {
        assert!(LookupRequest::from_args(&["type", "MX"]).is_none());
    }
}
