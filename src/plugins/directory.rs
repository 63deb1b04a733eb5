use std::{
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use tracing::{debug, info, instrument};

use super::{PluginError, PluginInfo, PluginRegistry, resolver::DISABLED_MARKER};

const ENTRY_POINTS: [&str; 2] = ["index.js", "index.js_"];
const HEADER_SCAN_LINES: usize = 64;

static TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"@(author|link)\s+(\S.*?)\s*$").ok());

/// Plugin registry over a directory of scripts
///
/// Recognized layouts:
/// - `<name>.js` / `<name>.js_` directly in the directory
/// - `<dir>/index.js` / `<dir>/index.js_`
///
/// A trailing `_` on the extension marks the plugin disabled.
#[derive(Debug, Clone)]
pub struct PluginDirectory {
    root: PathBuf,
}

impl PluginDirectory {
    /// Creates a registry over `root`; the directory need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_entry(&self, entry: &fs::DirEntry) -> Option<PluginInfo> {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with('.') {
            return None;
        }

        let path = entry.path();
        let name = if path.is_dir() {
            let index = ENTRY_POINTS
                .iter()
                .find(|entry_point| path.join(entry_point).is_file())?;
            format!("{file_name}/{index}")
        } else if is_script(&file_name) {
            file_name
        } else {
            return None;
        };

        let (author, link) = read_header(&self.root.join(&name));

        Some(PluginInfo {
            enabled: !name.ends_with(DISABLED_MARKER),
            name,
            author,
            link,
        })
    }
}

impl PluginRegistry for PluginDirectory {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn all(&self) -> Result<Vec<PluginInfo>, PluginError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let read_failed = |source: std::io::Error| PluginError::ReadFailed {
            path: self.root.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.root)
            .map_err(read_failed)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_failed)?;
        entries.sort_by_key(fs::DirEntry::file_name);

        let plugins: Vec<PluginInfo> = entries
            .iter()
            .filter_map(|entry| self.read_entry(entry))
            .collect();

        debug!(count = plugins.len(), "Enumerated plugins");
        Ok(plugins)
    }

    #[instrument(skip(self, plugin), fields(plugin = %plugin.name))]
    fn toggle(&self, plugin: &PluginInfo) -> Result<PluginInfo, PluginError> {
        let current = self.root.join(&plugin.name);
        if !current.is_file() {
            return Err(PluginError::Missing(plugin.name.clone()));
        }

        let toggled_name = if plugin.enabled {
            format!("{}{DISABLED_MARKER}", plugin.name)
        } else {
            plugin
                .name
                .strip_suffix(DISABLED_MARKER)
                .unwrap_or(&plugin.name)
                .to_string()
        };

        let target = self.root.join(&toggled_name);
        if target.exists() {
            return Err(PluginError::Conflict {
                name: plugin.name.clone(),
                conflict: toggled_name,
            });
        }

        fs::rename(&current, &target).map_err(|source| PluginError::ToggleFailed {
            name: plugin.name.clone(),
            source,
        })?;

        info!(to = %toggled_name, "Toggled plugin");

        Ok(PluginInfo {
            name: toggled_name,
            enabled: !plugin.enabled,
            author: plugin.author.clone(),
            link: plugin.link.clone(),
        })
    }
}

fn is_script(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    lower.ends_with(".js") || lower.ends_with(".js_")
}

/// Pulls `@author` and `@link` tags out of the leading comment block.
fn read_header(path: &Path) -> (Option<String>, Option<String>) {
    let (Some(tag), Ok(file)) = (TAG.as_ref(), fs::File::open(path)) else {
        return (None, None);
    };

    let mut author = None;
    let mut link = None;

    for line in BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .take(HEADER_SCAN_LINES)
    {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let is_comment = ["//", "/*", "*"]
            .iter()
            .any(|prefix| trimmed.starts_with(prefix));
        if !is_comment {
            break;
        }

        if let Some(captures) = tag.captures(trimmed) {
            let value = captures[2].trim_end_matches("*/").trim().to_string();
            if value.is_empty() {
                continue;
            }
            match &captures[1] {
                "author" => author = author.or(Some(value)),
                _ => link = link.or(Some(value)),
            }
        }
    }

    (author, link)
}
