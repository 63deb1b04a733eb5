//! Read-only lookup of the client path published by the Rose application.
//!
//! The file is owned by another program. Nothing here writes to it and no
//! failure while reading it ever reaches the caller.

use std::{fs, path::Path};

use tracing::debug;

const GENERAL_SECTION: &str = "[General]";
const CLIENT_PATH_KEY: &str = "clientpath";
const CLIENT_SUFFIX: &str = "\\LeagueClient";

/// Returns the normalized `clientpath` from the `[General]` section of the
/// ini file at `path`, or `None` when the file is missing, unreadable or
/// has no usable value.
pub fn client_path(path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Rose config not readable");
            return None;
        }
    };

    parse_client_path(&contents)
}

/// Parses ini `contents` for `[General] clientpath`.
///
/// Section names and keys compare case-insensitively. The first
/// `clientpath` inside `[General]` decides the result; a blank value means
/// "not set".
pub fn parse_client_path(contents: &str) -> Option<String> {
    let mut in_general = false;

    for line in contents.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            in_general = trimmed.eq_ignore_ascii_case(GENERAL_SECTION);
            continue;
        }

        if !in_general {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };

        if key.trim().eq_ignore_ascii_case(CLIENT_PATH_KEY) {
            return normalize_client_path(value.trim());
        }
    }

    None
}

fn normalize_client_path(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }

    let mut path = value.trim_end_matches(['\\', '/']).to_string();
    if !ends_with_ignore_case(&path, CLIENT_SUFFIX) {
        path.push_str(CLIENT_SUFFIX);
    }

    Some(path)
}

fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value.is_char_boundary(value.len() - suffix.len())
        && value[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
