//! Property-file lookups and service URL construction.
//!
//! # Design
//! Test environments are described by flat `key=value` property files
//! (`#`/`!` comments, `=` or `:` separators). An unreadable file is a soft
//! failure: the lookup logs a warning and returns `None`, so a suite can
//! decide for itself whether a missing environment is fatal.

use std::fs;
use std::path::Path;

use log::warn;

/// Look up `key` in the property file at `path`.
///
/// Returns `None` when the file cannot be read (logged as a warning) or the
/// key is not present. The separator is the first `=` or `:` on the line, so
/// values may contain either character: `QA=http://example.com` yields
/// `http://example.com`.
pub fn read_property(path: impl AsRef<Path>, key: &str) -> Option<String> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("cannot read property file {}: {err}", path.display());
            return None;
        }
    };
    lookup(&contents, key)
}

fn lookup(contents: &str, key: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some(idx) = line.find(|c: char| c == '=' || c == ':') else {
            continue;
        };
        let (name, rest) = line.split_at(idx);
        if name.trim() == key {
            return Some(rest[1..].trim().to_string());
        }
    }
    None
}

/// Build a service URL from the base registered under `server_key` in the
/// property file, plus an optional endpoint suffix.
///
/// The suffix is appended verbatim, with no slash normalization, so callers
/// own the separating `/`. Returns `None` when the property is absent.
pub fn service_url(
    path: impl AsRef<Path>,
    server_key: &str,
    endpoint: Option<&str>,
) -> Option<String> {
    let base = read_property(path, server_key)?;
    Some(match endpoint {
        Some(suffix) => format!("{base}{suffix}"),
        None => base,
    })
}
