//! Rose Loader entry point.
//!
//! Runs exactly one command per invocation and exits with its code. With
//! `--silent` the result goes to the console, otherwise to a message box.

use std::{env, io, process, sync::Arc};

use rose_loader::{
    cli::{
        CliService, DispatchResult, LoaderContext, Presenter, Severity, command_args, exit_code,
        is_data_store_path, is_silent_flag,
    },
    config::ConfigPaths,
    config_store::ConfigStore,
    instance::InstanceLock,
    plugins::PluginDirectory,
    services::{CoreModule, LeagueClient},
    Result as LoaderResult, tracing_config,
};
use tracing::{Level, debug, error, info, span, warn};
use tracing_appender::non_blocking::WorkerGuard;

#[tokio::main]
async fn main() {
    let code = run().await;
    process::exit(code);
}

/// Executes one command and returns the process exit code.
///
/// Everything that must flush on exit, the log guard and the instance lock,
/// is owned here and dropped before the caller exits.
async fn run() -> i32 {
    let raw: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let silent = raw.iter().any(|arg| is_silent_flag(arg));
    let presenter = Presenter::for_mode(silent);

    let discovered = ConfigPaths::discover();
    let _guard = init_logging(silent, discovered.as_ref().ok());
    let _span = span!(Level::INFO, "rose_loader", silent).entered();

    let tokens = command_args(&raw, is_data_store_path);
    debug!(?tokens, "Parsed command line");

    let lock = InstanceLock::acquire(&InstanceLock::default_path());

    let (paths, store) = match open_store(discovered) {
        Ok(opened) => opened,
        Err(e) => {
            error!(error = %e, "Failed to prepare settings");
            return report(
                &presenter,
                DispatchResult::new(
                    format!("Failed to prepare loader settings: {e}"),
                    Severity::Error,
                    exit_code::SETTINGS_FAILED,
                ),
            );
        }
    };

    let context = LoaderContext {
        store: store.clone(),
        plugins: Arc::new(PluginDirectory::new(paths.plugins_dir())),
        module: Arc::new(CoreModule::new(paths.core_module(), store.clone())),
        client: Arc::new(LeagueClient::new(store)),
        sole_instance: lock.is_sole_instance(),
    };

    let result = CliService::new(context).dispatch(&tokens).await;
    info!(exit_code = result.exit_code, "Command finished");

    report(&presenter, result)
}

fn open_store(
    discovered: io::Result<ConfigPaths>,
) -> LoaderResult<(ConfigPaths, Arc<ConfigStore>)> {
    let paths = discovered?;
    let store = ConfigStore::load(&paths)?;
    Ok((paths, Arc::new(store)))
}

fn report(presenter: &Presenter, result: DispatchResult) -> i32 {
    presenter.present(&result);
    result.exit_code
}

/// Console logging for silent runs, rolling files otherwise. Falls back to
/// the console when there is no usable log directory.
fn init_logging(silent: bool, paths: Option<&ConfigPaths>) -> Option<WorkerGuard> {
    let Some(paths) = paths.filter(|_| !silent) else {
        let _ = tracing_config::init_cli_mode();
        return None;
    };

    match tracing_config::init_with_file(paths) {
        Ok(guard) => Some(guard),
        Err(e) => {
            let _ = tracing_config::init_cli_mode();
            warn!(error = %e, "File logging unavailable, using stderr");
            None
        }
    }
}
