use indexmap::IndexMap;

/// Parses settings file contents into an ordered map.
///
/// Each line is split at its first `=`; key and value are trimmed. Lines
/// without `=` are skipped. A key seen twice keeps its first position and
/// its last value.
pub fn parse_settings(contents: &str) -> IndexMap<String, String> {
    let mut data = IndexMap::new();

    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        data.insert(key.trim().to_string(), value.trim().to_string());
    }

    data
}

/// Renders the map back to file contents, one `key=value` line per entry in
/// map order, values trimmed.
pub fn render_settings(data: &IndexMap<String, String>) -> String {
    let mut contents = String::new();

    for (key, value) in data {
        contents.push_str(key);
        contents.push('=');
        contents.push_str(value.trim());
        contents.push('\n');
    }

    contents
}

/// Interprets a stored setting as a boolean.
///
/// `true`/`1` and `false`/`0` are accepted case-insensitively; anything
/// else is treated as absent.
pub fn parse_stored_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
