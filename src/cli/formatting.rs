//! Text builders for command output.
//!
//! Output is shown either on a console or in a message box, so nothing here
//! emits terminal escape codes.

use crate::plugins::PluginInfo;

use super::types::CommandMetadata;

/// Product name shown in dialogs and the help header.
pub const PRODUCT_NAME: &str = "Rose Loader";

const SYNOPSIS_WIDTH: usize = 31;

/// Renders the usage document from command metadata, in the given order.
pub fn help_document(commands: &[CommandMetadata]) -> String {
    let mut lines = vec![
        format!("{PRODUCT_NAME} {}", env!("CARGO_PKG_VERSION")),
        "Usage:".to_string(),
        "  rose-loader [command] [--silent]".to_string(),
        String::new(),
        "Commands:".to_string(),
    ];

    for command in commands {
        let mut synopsis = command.names.join(", ");
        if !command.usage.is_empty() {
            synopsis.push(' ');
            synopsis.push_str(&command.usage);
        }

        let mut description = command.description.lines();
        let first = description.next().unwrap_or_default();
        lines.push(format!("  {synopsis:<SYNOPSIS_WIDTH$} {first}"));

        for continuation in description {
            lines.push(format!("{:width$}{continuation}", "", width = SYNOPSIS_WIDTH + 3));
        }
    }

    lines.push(String::new());
    lines.push("Options:".to_string());
    lines.push(format!(
        "  {:<SYNOPSIS_WIDTH$} Suppress message boxes, write to console if available",
        "--silent"
    ));

    lines.join("\n")
}

/// Renders the installed-plugins checklist
///
/// Plugins are ordered by name ignoring case. Each line shows `[x]` or
/// `[ ]`, the name, the author in parentheses and the link when present.
pub fn plugin_checklist(plugins: &[PluginInfo]) -> String {
    let mut sorted: Vec<&PluginInfo> = plugins.iter().collect();
    sorted.sort_by_cached_key(|plugin| plugin.name.to_lowercase());

    let mut lines = vec!["Installed plugins:".to_string()];

    for plugin in sorted {
        let mut line = format!(
            "  {} {}",
            if plugin.enabled { "[x]" } else { "[ ]" },
            plugin.name
        );

        if let Some(author) = present(plugin.author.as_deref()) {
            line.push_str(&format!(" ({author})"));
        }

        if let Some(link) = present(plugin.link.as_deref()) {
            line.push(' ');
            line.push_str(link);
        }

        lines.push(line);
    }

    lines.join("\n")
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
