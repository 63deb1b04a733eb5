//! Unit tests for CLI module
//!
//! Tests tokenizing, dispatch and every command against in-memory
//! collaborators. The settings store is real but lives in a temp directory.

#![allow(clippy::unwrap_used)]

use std::{
    path::Path,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::{
    cli::{
        CliService, DispatchResult, LoaderContext, Presenter, ResultSink, Severity, command_args,
        exit_code, formatting, is_silent_flag,
    },
    config::ConfigPaths,
    config_store::ConfigStore,
    plugins::{PluginError, PluginInfo, PluginRegistry},
    services::{ClientControl, ClientError, ModuleControl, ModuleError},
};

struct FakeModule {
    found: bool,
    loaded: bool,
    active: AtomicBool,
    fail: bool,
}

impl FakeModule {
    fn new(found: bool, active: bool) -> Self {
        Self {
            found,
            loaded: false,
            active: AtomicBool::new(active),
            fail: false,
        }
    }
}

impl ModuleControl for FakeModule {
    fn is_found(&self) -> bool {
        self.found
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn set_active(&self, active: bool) -> Result<(), ModuleError> {
        if self.fail {
            return Err(ModuleError::LeaguePathNotSet);
        }
        self.active.store(active, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct FakeClient {
    running: bool,
    restart_fails: bool,
    restarts: AtomicUsize,
}

#[async_trait]
impl ClientControl for FakeClient {
    async fn is_running(&self) -> bool {
        self.running
    }

    async fn restart_ux(&self) -> Result<(), ClientError> {
        self.restarts.fetch_add(1, Ordering::SeqCst);
        if self.restart_fails {
            return Err(ClientError::InvalidLockfile("truncated".to_string()));
        }
        Ok(())
    }

    fn is_valid_dir(&self, path: &Path) -> bool {
        path.to_string_lossy().contains("Riot Games")
    }
}

struct FakePlugins {
    plugins: Mutex<Vec<PluginInfo>>,
    toggles: AtomicUsize,
}

impl FakePlugins {
    fn new(plugins: Vec<PluginInfo>) -> Self {
        Self {
            plugins: Mutex::new(plugins),
            toggles: AtomicUsize::new(0),
        }
    }

    fn enabled(&self, name: &str) -> Option<bool> {
        self.plugins
            .lock()
            .unwrap()
            .iter()
            .find(|plugin| plugin.name == name)
            .map(|plugin| plugin.enabled)
    }
}

impl PluginRegistry for FakePlugins {
    fn all(&self) -> Result<Vec<PluginInfo>, PluginError> {
        Ok(self.plugins.lock().unwrap().clone())
    }

    fn toggle(&self, plugin: &PluginInfo) -> Result<PluginInfo, PluginError> {
        self.toggles.fetch_add(1, Ordering::SeqCst);
        let mut plugins = self.plugins.lock().unwrap();
        let entry = plugins
            .iter_mut()
            .find(|candidate| candidate.name == plugin.name)
            .ok_or_else(|| PluginError::Missing(plugin.name.clone()))?;
        entry.enabled = !entry.enabled;
        Ok(entry.clone())
    }
}

struct Harness {
    _dir: TempDir,
    store: Arc<ConfigStore>,
    module: Arc<FakeModule>,
    client: Arc<FakeClient>,
    plugins: Arc<FakePlugins>,
    sole_instance: bool,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::load(&ConfigPaths::new(dir.path()))
            .unwrap()
            .with_rose_config(None);

        Self {
            _dir: dir,
            store: Arc::new(store),
            module: Arc::new(FakeModule::new(true, false)),
            client: Arc::new(FakeClient::default()),
            plugins: Arc::new(FakePlugins::new(vec![
                PluginInfo::new("ui-tweaks/index.js", true),
                PluginInfo::new("auto-accept.js_", false),
            ])),
            sole_instance: true,
        }
    }

    fn service(&self) -> CliService {
        CliService::new(LoaderContext {
            store: self.store.clone(),
            plugins: self.plugins.clone(),
            module: self.module.clone(),
            client: self.client.clone(),
            sole_instance: self.sole_instance,
        })
    }

    async fn run(&self, args: &[&str]) -> DispatchResult {
        let tokens = command_args(args, |_| false);
        self.service().dispatch(&tokens).await
    }
}

#[test]
fn silent_flags_match_any_case() {
    assert!(is_silent_flag("--silent"));
    assert!(is_silent_flag("-S"));
    assert!(is_silent_flag("/SILENT"));
    assert!(!is_silent_flag("--silently"));
}

#[test]
fn command_args_splits_and_filters() {
    let tokens = command_args(
        ["  --set-option ", "", "use-symlink=true", "--silent", "   "],
        |_| false,
    );
    assert_eq!(tokens, ["--set-option", "use-symlink", "true"]);
}

#[test]
fn command_args_drops_empty_halves() {
    assert_eq!(command_args(["key="], |_| false), ["key"]);
    assert_eq!(command_args(["=value"], |_| false), ["value"]);
    assert!(command_args(["="], |_| false).is_empty());
}

#[test]
fn command_args_splits_only_at_first_equals() {
    assert_eq!(command_args(["a=b=c"], |_| false), ["a", "b=c"]);
}

#[test]
fn command_args_drops_data_store_arguments() {
    let tokens = command_args(["C:\\loader\\datastore", "--status"], |arg| {
        arg.ends_with("datastore")
    });
    assert_eq!(tokens, ["--status"]);
}

#[tokio::test]
async fn no_tokens_shows_help() {
    let harness = Harness::new();
    let result = harness.run(&[]).await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(result.severity, Severity::None);
    assert!(result.message.contains("Usage:"));
}

#[tokio::test]
async fn help_lists_every_command_once() {
    let harness = Harness::new();
    let result = harness.run(&["/?"]).await;

    for keyword in [
        "--install, --activate",
        "--uninstall, --deactivate",
        "--status",
        "--list-plugins",
        "--enable-plugin <name>",
        "--set-league-path <path>",
        "--set-option <key> <value>",
        "--restart-client",
        "--force-activate",
        "--ui",
        "--help",
    ] {
        assert_eq!(
            result.message.matches(keyword).count(),
            1,
            "{keyword} in help"
        );
    }
    assert!(!result.message.contains("/install"));
}

#[tokio::test]
async fn unknown_command_is_warning() {
    let harness = Harness::new();
    let result = harness.run(&["--frobnicate"]).await;

    assert_eq!(result.exit_code, exit_code::UNKNOWN_COMMAND);
    assert_eq!(result.severity, Severity::Warning);
    assert!(result.message.contains("'--frobnicate'"));
}

#[tokio::test]
async fn keywords_ignore_case() {
    let harness = Harness::new();
    let result = harness.run(&["--STATUS"]).await;

    assert_eq!(result.exit_code, exit_code::INACTIVE);
}

#[tokio::test]
async fn status_reports_active_and_inactive() {
    let harness = Harness::new();

    let inactive = harness.run(&["--status"]).await;
    assert_eq!(inactive.exit_code, exit_code::INACTIVE);
    assert_eq!(inactive.severity, Severity::None);

    harness.module.active.store(true, Ordering::SeqCst);
    let active = harness.run(&["--status"]).await;
    assert_eq!(active.exit_code, exit_code::OK);
    assert_eq!(active.severity, Severity::Info);
}

#[tokio::test]
async fn status_without_module_is_error() {
    let mut harness = Harness::new();
    harness.module = Arc::new(FakeModule::new(false, false));

    let result = harness.run(&["--status"]).await;
    assert_eq!(result.exit_code, exit_code::MODULE_MISSING);
    assert_eq!(result.severity, Severity::Error);
}

#[tokio::test]
async fn install_activates_module() {
    let harness = Harness::new();
    let result = harness.run(&["/install"]).await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(result.severity, Severity::Info);
    assert!(harness.module.is_active());
}

#[tokio::test]
async fn install_refused_while_another_instance_runs() {
    let mut harness = Harness::new();
    harness.sole_instance = false;

    let result = harness.run(&["--install"]).await;
    assert_eq!(result.exit_code, exit_code::BUSY);
    assert_eq!(result.severity, Severity::Error);
    assert!(!harness.module.is_active());
}

#[tokio::test]
async fn uninstall_refused_while_module_loaded() {
    let mut harness = Harness::new();
    harness.module = Arc::new(FakeModule {
        found: true,
        loaded: true,
        active: AtomicBool::new(true),
        fail: false,
    });

    let result = harness.run(&["--uninstall"]).await;
    assert_eq!(result.exit_code, exit_code::BUSY);
    assert!(harness.module.is_active());
}

#[tokio::test]
async fn forced_deactivate_skips_busy_check() {
    let mut harness = Harness::new();
    harness.sole_instance = false;
    harness.module = Arc::new(FakeModule {
        found: true,
        loaded: true,
        active: AtomicBool::new(true),
        fail: false,
    });

    let result = harness.run(&["--force-deactivate"]).await;
    assert_eq!(result.exit_code, exit_code::OK);
    assert!(!harness.module.is_active());
}

#[tokio::test]
async fn forced_activate_still_requires_module() {
    let mut harness = Harness::new();
    harness.module = Arc::new(FakeModule::new(false, false));

    let result = harness.run(&["--force-activate"]).await;
    assert_eq!(result.exit_code, exit_code::MODULE_MISSING);
}

#[tokio::test]
async fn activation_failure_reports_cause() {
    let mut harness = Harness::new();
    harness.module = Arc::new(FakeModule {
        found: true,
        loaded: false,
        active: AtomicBool::new(false),
        fail: true,
    });

    let result = harness.run(&["--activate"]).await;
    assert_eq!(result.exit_code, exit_code::ACTIVATION_FAILED);
    assert_eq!(result.severity, Severity::Error);
    assert!(result.message.contains("League path is not set"));
}

#[tokio::test]
async fn enable_plugin_by_stem() {
    let harness = Harness::new();
    let result = harness.run(&["--enable-plugin", "auto-accept"]).await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(harness.plugins.enabled("auto-accept.js_"), Some(true));
}

#[tokio::test]
async fn enable_already_enabled_is_noop() {
    let harness = Harness::new();
    let result = harness.run(&["--enable-plugin=ui-tweaks"]).await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(result.severity, Severity::Info);
    assert!(result.message.contains("already enabled"));
    assert_eq!(harness.plugins.toggles.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn toggle_flips_state() {
    let harness = Harness::new();
    let result = harness.run(&["--toggle-plugin", "ui-tweaks"]).await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(harness.plugins.enabled("ui-tweaks/index.js"), Some(false));
}

#[tokio::test]
async fn toggle_twice_restores_state() {
    let harness = Harness::new();

    harness.run(&["--toggle-plugin", "AUTO-ACCEPT"]).await;
    let second = harness.run(&["--toggle-plugin", "auto-accept"]).await;

    assert_eq!(second.exit_code, exit_code::OK);
    assert_eq!(harness.plugins.enabled("auto-accept.js_"), Some(false));
    assert_eq!(harness.plugins.toggles.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn plugin_command_requires_identifier() {
    let harness = Harness::new();
    let result = harness.run(&["--disable-plugin"]).await;

    assert_eq!(result.exit_code, exit_code::PLUGIN_USAGE);
    assert_eq!(result.severity, Severity::Warning);
}

#[tokio::test]
async fn unknown_plugin_not_found() {
    let harness = Harness::new();
    let result = harness.run(&["--disable-plugin", "missing"]).await;

    assert_eq!(result.exit_code, exit_code::PLUGIN_NOT_FOUND);
    assert_eq!(result.severity, Severity::Error);
}

#[tokio::test]
async fn list_plugins_is_console_only() {
    let harness = Harness::new();
    let result = harness.run(&["--list-plugins"]).await;

    assert!(result.print_only);
    assert_eq!(result.exit_code, exit_code::OK);
    assert!(result.message.contains("[x] ui-tweaks/index.js"));
    assert!(result.message.contains("[ ] auto-accept.js_"));
}

#[tokio::test]
async fn set_league_path_rejects_invalid_dir() {
    let harness = Harness::new();
    let result = harness.run(&["--set-league-path", "C:\\Temp"]).await;

    assert_eq!(result.exit_code, exit_code::LEAGUE_PATH_INVALID);
    assert_eq!(harness.store.league_path(), "");
}

#[tokio::test]
async fn set_league_path_joins_tokens() {
    let harness = Harness::new();
    let result = harness
        .run(&["--set-league-path", "C:\\Riot", "Games\\League", "of", "Legends"])
        .await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(
        harness.store.league_path(),
        "C:\\Riot Games\\League of Legends"
    );

    let shown = harness.run(&["--get-league-path"]).await;
    assert_eq!(
        shown.message,
        "League of Legends path: C:\\Riot Games\\League of Legends"
    );
}

#[tokio::test]
async fn empty_league_path_clears_setting() {
    let harness = Harness::new();
    harness.store.set_league_path("C:\\Riot Games\\LoL").unwrap();

    let result = harness.run(&["--set-league-path"]).await;
    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(harness.store.league_path(), "");

    let shown = harness.run(&["--get-league-path"]).await;
    assert!(shown.message.ends_with("[not set]"));
}

#[tokio::test]
async fn set_option_updates_switch() {
    let harness = Harness::new();
    let result = harness.run(&["--set-option", "use-symlink=YES"]).await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert!(harness.store.use_symlink());
}

#[tokio::test]
async fn set_option_bad_value_leaves_setting() {
    let harness = Harness::new();
    let result = harness.run(&["--set-option", "use-symlink", "maybe"]).await;

    assert_eq!(result.exit_code, exit_code::OPTION_BAD_VALUE);
    assert_eq!(result.severity, Severity::Error);
    assert!(!harness.store.use_symlink());
}

#[tokio::test]
async fn set_option_language_keeps_spaces() {
    let harness = Harness::new();
    let result = harness
        .run(&["--set-option", "Language", "Brazilian", "Portuguese"])
        .await;

    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(harness.store.language(), "Brazilian Portuguese");
}

#[tokio::test]
async fn set_option_usage_and_unknown_key() {
    let harness = Harness::new();

    let usage = harness.run(&["--set-option", "language"]).await;
    assert_eq!(usage.exit_code, exit_code::OPTION_USAGE);
    assert_eq!(usage.severity, Severity::Warning);

    let unknown = harness.run(&["--set-option", "theme", "dark"]).await;
    assert_eq!(unknown.exit_code, exit_code::OPTION_UNKNOWN);
}

#[tokio::test]
async fn restart_requires_running_client() {
    let harness = Harness::new();
    let result = harness.run(&["--restart-client"]).await;

    assert_eq!(result.exit_code, exit_code::CLIENT_NOT_RUNNING);
    assert_eq!(harness.client.restarts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn restart_reports_request_failure() {
    let mut harness = Harness::new();
    harness.client = Arc::new(FakeClient {
        running: true,
        restart_fails: true,
        ..FakeClient::default()
    });

    let result = harness.run(&["--restart-client"]).await;
    assert_eq!(result.exit_code, exit_code::CLIENT_RESTART_FAILED);
    assert!(result.message.contains("truncated"));
}

#[tokio::test]
async fn restart_succeeds_when_running() {
    let mut harness = Harness::new();
    harness.client = Arc::new(FakeClient {
        running: true,
        ..FakeClient::default()
    });

    let result = harness.run(&["--restart-client"]).await;
    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(harness.client.restarts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn ui_defers_to_running_instance() {
    let mut harness = Harness::new();
    harness.sole_instance = false;

    let result = harness.run(&["--ui"]).await;
    assert_eq!(result.exit_code, exit_code::OK);
    assert_eq!(result.severity, Severity::Info);
}

#[tokio::test]
async fn ui_unavailable_when_alone() {
    let harness = Harness::new();
    let result = harness.run(&["--ui"]).await;

    assert_eq!(result.exit_code, exit_code::UI_UNAVAILABLE);
}

#[derive(Clone, Default)]
struct RecordingSink(Arc<Mutex<Vec<String>>>);

impl ResultSink for RecordingSink {
    fn emit(&self, result: &DispatchResult) {
        self.0.lock().unwrap().push(result.message.clone());
    }
}

#[test]
fn presenter_routes_print_only_to_console() {
    let console = RecordingSink::default();
    let modal = RecordingSink::default();
    let presenter = Presenter::new(Box::new(console.clone()), Box::new(modal.clone()));

    presenter.present(&DispatchResult::plain("list").printed());
    presenter.present(&DispatchResult::info("done"));

    assert_eq!(*console.0.lock().unwrap(), ["list"]);
    assert_eq!(*modal.0.lock().unwrap(), ["done"]);
}

#[test]
fn checklist_sorts_and_annotates() {
    let mut first = PluginInfo::new("Zeta.js", true);
    first.author = Some("someone".to_string());
    first.link = Some("https://example.org".to_string());
    let second = PluginInfo::new("alpha.js_", false);

    let text = formatting::plugin_checklist(&[first, second]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "  [ ] alpha.js_");
    assert_eq!(lines[2], "  [x] Zeta.js (someone) https://example.org");
}
