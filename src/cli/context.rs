use std::sync::Arc;

use crate::{
    config_store::ConfigStore,
    plugins::PluginRegistry,
    services::{ClientControl, ModuleControl},
};

/// Everything a command handler may consult, built once per process.
#[derive(Clone)]
pub struct LoaderContext {
    /// Settings store
    pub store: Arc<ConfigStore>,
    /// Installed plugins
    pub plugins: Arc<dyn PluginRegistry>,
    /// Native core module
    pub module: Arc<dyn ModuleControl>,
    /// Running client
    pub client: Arc<dyn ClientControl>,
    /// Whether this process holds the single-instance lock
    pub sole_instance: bool,
}
