//! Unit tests for plugins module
//!
//! Resolution tiers run against in-memory plugin lists; the directory
//! registry runs against a temp directory.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::plugins::{PluginDirectory, PluginError, PluginInfo, PluginRegistry, normalize, resolve};

fn plugins(names: &[(&str, bool)]) -> Vec<PluginInfo> {
    names
        .iter()
        .map(|(name, enabled)| PluginInfo::new(*name, *enabled))
        .collect()
}

fn resolved_name<'a>(identifier: &str, plugins: &'a [PluginInfo]) -> Option<&'a str> {
    resolve(identifier, plugins).map(|plugin| plugin.name.as_str())
}

mod normalization {
    use super::*;

    #[test]
    fn folds_common_spellings_to_one_form() {
        assert_eq!(normalize("foo/bar.js"), "foo/bar");
        assert_eq!(normalize("foo/bar.js_"), "foo/bar");
        assert_eq!(normalize("foo/bar/index.js"), "foo/bar");
        assert_eq!(normalize("foo\\bar"), "foo/bar");
    }

    #[test]
    fn trims_and_ignores_case_of_suffixes() {
        assert_eq!(normalize("  Foo\\Bar\\INDEX.JS_ "), "Foo/Bar");
        assert_eq!(normalize("theme.Js"), "theme");
    }

    #[test]
    fn strips_only_one_layer_of_each_suffix() {
        assert_eq!(normalize("a.js.js"), "a.js");
        assert_eq!(normalize("index/index.js"), "index");
        assert_eq!(normalize("foo.ts_"), "foo.ts_");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}

mod resolution {
    use super::*;

    #[test]
    fn basename_beats_longer_name_with_same_prefix() {
        let list = plugins(&[("utils/logger.js", true), ("logger-extended.js", false)]);

        assert_eq!(resolved_name("logger", &list), Some("utils/logger.js"));
    }

    #[test]
    fn exact_tier_wins_over_earlier_file_name_match() {
        let list = plugins(&[("vendor/logger.js", true), ("logger/index.js", true)]);

        assert_eq!(resolved_name("logger", &list), Some("logger/index.js"));
    }

    #[test]
    fn file_name_tier_wins_over_earlier_suffix_match() {
        let list = plugins(&[("x/tools-logger.js", true), ("y/logger/index.js_", false)]);

        assert_eq!(resolved_name("LOGGER", &list), Some("y/logger/index.js_"));
    }

    #[test]
    fn file_stem_tier_wins_over_earlier_suffix_match() {
        let list = plugins(&[("x/pitch-dark.js", true), ("themes/dark.theme.js", true)]);

        assert_eq!(resolved_name("dark", &list), Some("themes/dark.theme.js"));
    }

    #[test]
    fn suffix_tier_matches_partial_paths() {
        let list = plugins(&[("a/b/c.js", true), ("other.js", true)]);

        assert_eq!(resolved_name("b/c", &list), Some("a/b/c.js"));
        assert_eq!(resolved_name("b\\c.js", &list), Some("a/b/c.js"));
        assert_eq!(resolved_name("her", &list), Some("other.js"));
    }

    #[test]
    fn first_plugin_wins_within_a_tier() {
        let list = plugins(&[("one/shared.js", true), ("two/shared.js", false)]);

        assert_eq!(resolved_name("shared", &list), Some("one/shared.js"));
    }

    #[test]
    fn blank_or_unmatched_identifier_resolves_to_nothing() {
        let list = plugins(&[("utils/logger.js", true)]);

        assert_eq!(resolved_name("", &list), None);
        assert_eq!(resolved_name("   ", &list), None);
        assert_eq!(resolved_name(".js", &list), None);
        assert_eq!(resolved_name("missing", &list), None);
        assert_eq!(resolved_name("logger", &[]), None);
    }
}

mod directory {
    use super::*;

    fn write(root: &std::path::Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn missing_directory_has_no_plugins() {
        let temp = TempDir::new().unwrap();
        let registry = PluginDirectory::new(temp.path().join("plugins"));

        assert!(registry.all().unwrap().is_empty());
    }

    #[test]
    fn enumerates_scripts_and_index_directories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "alpha.js", "");
        write(root, "beta.js_", "");
        write(root, "gamma/index.js", "");
        write(root, "delta/index.js_", "");
        write(root, "empty-dir/readme.md", "");
        write(root, "notes.txt", "");
        write(root, ".hidden.js", "");

        let registry = PluginDirectory::new(root);
        let found = registry.all().unwrap();

        let summary: Vec<(&str, bool)> = found
            .iter()
            .map(|plugin| (plugin.name.as_str(), plugin.enabled))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("alpha.js", true),
                ("beta.js_", false),
                ("delta/index.js_", false),
                ("gamma/index.js", true),
            ]
        );
    }

    #[test]
    fn reads_author_and_link_from_header() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "fancy/index.js",
            "/**\n * @name Fancy\n * @author Jane Doe\n * @link https://example.com/fancy */\nexport function init() {}\n// @author Not Me\n",
        );
        write(temp.path(), "plain.js", "console.log('@author nobody');\n");

        let found = PluginDirectory::new(temp.path()).all().unwrap();

        assert_eq!(found[0].name, "fancy/index.js");
        assert_eq!(found[0].author.as_deref(), Some("Jane Doe"));
        assert_eq!(found[0].link.as_deref(), Some("https://example.com/fancy"));
        assert_eq!(found[1].author, None);
        assert_eq!(found[1].link, None);
    }

    #[test]
    fn toggle_renames_entry_point_both_ways() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "tool/index.js", "");
        let registry = PluginDirectory::new(temp.path());
        let plugin = registry.all().unwrap().remove(0);

        let disabled = registry.toggle(&plugin).unwrap();
        assert_eq!(disabled.name, "tool/index.js_");
        assert!(!disabled.enabled);
        assert!(temp.path().join("tool/index.js_").is_file());
        assert!(!temp.path().join("tool/index.js").exists());

        let enabled = registry.toggle(&disabled).unwrap();
        assert_eq!(enabled.name, "tool/index.js");
        assert!(enabled.enabled);
        assert_eq!(registry.all().unwrap(), vec![enabled]);
    }

    #[test]
    fn toggle_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "dup.js", "");
        write(temp.path(), "dup.js_", "");
        let registry = PluginDirectory::new(temp.path());

        let result = registry.toggle(&PluginInfo::new("dup.js", true));

        assert!(matches!(result, Err(PluginError::Conflict { .. })));
    }

    #[test]
    fn toggle_reports_vanished_plugin() {
        let temp = TempDir::new().unwrap();
        let registry = PluginDirectory::new(temp.path());

        let result = registry.toggle(&PluginInfo::new("gone.js", true));

        assert!(matches!(result, Err(PluginError::Missing(name)) if name == "gone.js"));
    }
}
