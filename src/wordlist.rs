//! Candidate wordlist loading.
//!
//! Wordlist problems are never fatal: a missing, unreadable or empty file is
//! reported and the built-in list is used instead.

use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};

/// Built-in candidate labels, biased towards API-related names.
pub const DEFAULT_WORDLIST: &[&str] = &[
    "api",
    "developer",
    "dev",
    "developers",
    "api-dev",
    "api-test",
    "test",
    "staging",
    "stage",
    "beta",
    "v1",
    "v2",
    "v3",
    "rest",
    "graphql",
    "gateway",
    "service",
    "services",
    "data",
    "admin",
    "internal",
    "private",
    "public",
    "docs",
    "documentation",
    "mobile",
    "app",
    "api1",
    "api2",
    "auth",
    "oauth",
    "sso",
    "cdn",
    "static",
    "assets",
    "media",
    "upload",
    "file",
    "files",
];

/// Returns the built-in wordlist as owned labels.
pub fn default_wordlist() -> Vec<String> {
    DEFAULT_WORDLIST.iter().map(|s| s.to_string()).collect()
}

/// Parses wordlist contents.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Repeated labels keep their first position only, so every candidate yields
/// at most one result.
pub fn parse_wordlist(contents: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Loads candidate labels from `path`, falling back to the built-in list.
pub fn load_wordlist(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return default_wordlist();
    };

    if !path.exists() {
        warn!(
            "Wordlist not found at {}, using built-in wordlist",
            path.display()
        );
        return default_wordlist();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let words = parse_wordlist(&contents);
            if words.is_empty() {
                warn!(
                    "Wordlist {} contains no labels, using built-in wordlist",
                    path.display()
                );
                return default_wordlist();
            }
            info!("Loaded {} labels from {}", words.len(), path.display());
            words
        }
        Err(e) => {
            warn!(
                "Failed to read wordlist {}: {}. Using built-in wordlist",
                path.display(),
                e
            );
            default_wordlist()
        }
    }
}
