//! Plugin identifier normalization and fuzzy lookup.
//!
//! Users refer to plugins by whatever they remember: a full relative path,
//! a directory name, a file name with or without `.js`, or the tail of a
//! path. Matching runs a fixed list of strategies from strictest to
//! loosest and the first strategy with any hit decides.

use tracing::{debug, warn};

use super::PluginInfo;

/// Marker appended to a script's extension when the plugin is disabled.
pub const DISABLED_MARKER: char = '_';

const SCRIPT_EXTENSION: &str = ".js";
const DISABLED_SCRIPT_EXTENSION: &str = ".js_";
const INDEX_SUFFIX: &str = "/index";

type Matcher = fn(candidate: &str, target: &str) -> bool;

/// Matching strategies in priority order.
const MATCHERS: [(&str, Matcher); 4] = [
    ("exact", matches_exact),
    ("file name", matches_file_name),
    ("file stem", matches_file_stem),
    ("suffix", matches_suffix),
];

/// Folds a plugin name or user identifier to its comparable form
///
/// Backslashes become `/`, surrounding whitespace goes, a disabled marker
/// after `.js` is dropped, then the `.js` extension, then a trailing
/// `/index` so directory plugins resolve to their directory name.
///
/// # Examples
///
/// ```
/// use rose_loader::plugins::normalize;
///
/// assert_eq!(normalize("foo\\bar\\index.js_"), "foo/bar");
/// ```
pub fn normalize(name: &str) -> String {
    let replaced = name.replace('\\', "/");
    let mut normalized = replaced.trim();

    if strip_suffix_ignore_case(normalized, DISABLED_SCRIPT_EXTENSION).is_some() {
        normalized = &normalized[..normalized.len() - DISABLED_MARKER.len_utf8()];
    }

    if let Some(stripped) = strip_suffix_ignore_case(normalized, SCRIPT_EXTENSION) {
        normalized = stripped;
    }

    if let Some(stripped) = strip_suffix_ignore_case(normalized, INDEX_SUFFIX) {
        normalized = stripped;
    }

    normalized.to_string()
}

/// Resolves a user-supplied identifier to one plugin
///
/// Strategies, first hit wins:
/// 1. whole normalized name
/// 2. final path segment
/// 3. final path segment without its extension
/// 4. normalized name ends with the identifier
///
/// All comparisons ignore case. Within a strategy the first plugin in
/// `plugins` order is returned.
///
/// An identifier that normalizes to nothing (for example `.js`) matches no
/// plugin, even though an empty suffix would otherwise match every name.
pub fn resolve<'a>(identifier: &str, plugins: &'a [PluginInfo]) -> Option<&'a PluginInfo> {
    if identifier.trim().is_empty() {
        return None;
    }

    let target = normalize(identifier).to_lowercase();
    if target.is_empty() {
        return None;
    }

    let candidates: Vec<String> = plugins
        .iter()
        .map(|plugin| normalize(&plugin.name).to_lowercase())
        .collect();

    for (strategy, matcher) in MATCHERS {
        let mut hits = candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| matcher(candidate, &target))
            .map(|(index, _)| index);

        let Some(first) = hits.next() else {
            continue;
        };

        let others = hits.count();
        if others > 0 {
            warn!(
                identifier,
                strategy,
                ambiguous = others + 1,
                "Identifier matches several plugins, using the first"
            );
        }

        debug!(identifier, strategy, plugin = %plugins[first].name, "Resolved plugin");
        return Some(&plugins[first]);
    }

    debug!(identifier, "No plugin matched");
    None
}

fn matches_exact(candidate: &str, target: &str) -> bool {
    candidate == target
}

fn matches_file_name(candidate: &str, target: &str) -> bool {
    file_name(candidate) == target
}

fn matches_file_stem(candidate: &str, target: &str) -> bool {
    file_stem(candidate) == target
}

fn matches_suffix(candidate: &str, target: &str) -> bool {
    candidate.ends_with(target)
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let split = value.len().checked_sub(suffix.len())?;
    if !value.is_char_boundary(split) {
        return None;
    }

    let (head, tail) = value.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
