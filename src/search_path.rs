//! Search-domain configuration.
//!
//! Unqualified hostnames get each of these suffixes appended in turn during
//! A-record lookups. The list is computed once at startup and shared
//! read-only afterward; sources are consulted in priority order: an
//! explicit list from the caller, the `LOCALDOMAIN` environment variable,
//! then the last `domain` or `search` directive in /etc/resolv.conf.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::{LOCALDOMAIN_ENV, RESOLV_CONF_PATH};
use crate::error_handling::InitializationError;

/// An ordered, immutable list of search-domain suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    domains: Vec<String>,
}

impl SearchPath {
    /// Builds a search path from an explicit domain list.
    pub fn explicit(domains: Vec<String>) -> Self {
        SearchPath { domains }
    }

    /// Builds the search path from the system configuration:
    /// `LOCALDOMAIN` if set, otherwise /etc/resolv.conf.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ResolvConfError` if resolv.conf needs
    /// to be consulted but cannot be read.
    pub fn from_system() -> Result<Self, InitializationError> {
        Self::from_sources(env::var(LOCALDOMAIN_ENV).ok(), Path::new(RESOLV_CONF_PATH))
    }

    /// Builds the search path from an optional environment value and a
    /// resolv.conf path. Split out of [`from_system`](Self::from_system)
    /// so the priority order is testable without touching process state.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ResolvConfError` if no environment
    /// value is given and the file cannot be read.
    pub fn from_sources(
        env_value: Option<String>,
        resolv_conf: &Path,
    ) -> Result<Self, InitializationError> {
        if let Some(value) = env_value {
            return Ok(SearchPath {
                domains: split_domains(&value),
            });
        }
        Self::from_resolv_conf(resolv_conf)
    }

    /// Parses a resolv.conf-format file into a search path.
    ///
    /// The last `domain` or `search` directive wins; its keyword is
    /// dropped and the remaining whitespace-separated words form the
    /// ordered list. A file with neither directive yields an empty path.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ResolvConfError` if the file cannot
    /// be read.
    pub fn from_resolv_conf(path: &Path) -> Result<Self, InitializationError> {
        let contents =
            fs::read_to_string(path).map_err(|source| InitializationError::ResolvConfError {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse_resolv_conf(&contents))
    }

    fn parse_resolv_conf(contents: &str) -> Self {
        let mut domains = Vec::new();
        for line in contents.lines() {
            let mut words = line.split_whitespace();
            match words.next() {
                Some("domain") | Some("search") => {
                    domains = words.map(str::to_string).collect();
                }
                _ => {}
            }
        }
        SearchPath { domains }
    }

    /// Iterates the suffixes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Returns true if there are no suffixes to try.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

fn split_domains(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn conf_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn search_directive_is_parsed() {
        let conf = conf_file("nameserver 127.0.0.53\nsearch example.com sub.example.com\n");
        let path = SearchPath::from_resolv_conf(conf.path()).unwrap();
        let domains: Vec<_> = path.iter().collect();
        assert_eq!(domains, ["example.com", "sub.example.com"]);
    }

    #[test]
    fn domain_directive_is_parsed() {
        let conf = conf_file("domain example.com\n");
        let path = SearchPath::from_resolv_conf(conf.path()).unwrap();
        let domains: Vec<_> = path.iter().collect();
        assert_eq!(domains, ["example.com"]);
    }

    #[test]
    fn last_directive_wins() {
        let conf = conf_file(
            "domain first.example\n\
             search second.example third.example\n\
             domain last.example\n",
        );
        let path = SearchPath::from_resolv_conf(conf.path()).unwrap();
        let domains: Vec<_> = path.iter().collect();
        assert_eq!(domains, ["last.example"]);
    }

    #[test]
    fn file_without_directives_yields_empty_path() {
        let conf = conf_file("nameserver 8.8.8.8\noptions ndots:2\n");
        let path = SearchPath::from_resolv_conf(conf.path()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn unreadable_file_is_an_initialization_error() {
        let missing = Path::new("/nonexistent/resolv.conf");
        let err = SearchPath::from_resolv_conf(missing).unwrap_err();
        assert!(matches!(
            err,
            InitializationError::ResolvConfError { .. }
        ));
    }

    #[test]
    fn env_value_takes_priority_over_file() {
        let conf = conf_file("search from.file\n");
        let path =
            SearchPath::from_sources(Some("from.env also.env".to_string()), conf.path()).unwrap();
        let domains: Vec<_> = path.iter().collect();
        assert_eq!(domains, ["from.env", "also.env"]);
    }

    #[test]
    fn missing_env_falls_back_to_file() {
        let conf = conf_file("search from.file\n");
        let path = SearchPath::from_sources(None, conf.path()).unwrap();
        let domains: Vec<_> = path.iter().collect();
        assert_eq!(domains, ["from.file"]);
    }

    #[test]
    fn explicit_list_is_used_verbatim() {
        let path = SearchPath::explicit(vec!["a.example".into(), "b.example".into()]);
        let domains: Vec<_> = path.iter().collect();
        assert_eq!(domains, ["a.example", "b.example"]);
    }
}
