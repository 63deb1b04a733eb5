//! Unit tests for services module
//!
//! Covers lockfile parsing, the client directory predicate and hook-file
//! activation. Nothing here talks to a live client.

#![allow(clippy::unwrap_used)]

use std::{fs, sync::Arc};

use tempfile::TempDir;

use crate::{
    config::ConfigPaths,
    config_store::ConfigStore,
    services::{
        ClientControl, ClientError, CoreModule, LeagueClient, Lockfile, ModuleControl, ModuleError,
    },
};

fn store_in(temp: &TempDir) -> Arc<ConfigStore> {
    Arc::new(
        ConfigStore::load(&ConfigPaths::new(temp.path().join("loader")))
            .unwrap()
            .with_rose_config(None),
    )
}

#[test]
fn lockfile_parses_all_fields() {
    let lockfile = Lockfile::parse("LeagueClient:4242:50123:s3cr3t-Pa_ss:https\n").unwrap();

    assert_eq!(lockfile.pid, 4242);
    assert_eq!(lockfile.port, 50123);
    assert_eq!(lockfile.password, "s3cr3t-Pa_ss");
    assert_eq!(lockfile.base_url(), "https://127.0.0.1:50123");
}

#[test]
fn lockfile_rejects_bad_shapes() {
    assert!(matches!(
        Lockfile::parse("LeagueClient:1:2:pw"),
        Err(ClientError::InvalidLockfile(_))
    ));
    assert!(matches!(
        Lockfile::parse("LeagueClient:1:port:pw:https"),
        Err(ClientError::InvalidLockfile(_))
    ));
    assert!(matches!(
        Lockfile::parse(""),
        Err(ClientError::InvalidLockfile(_))
    ));
}

#[test]
fn valid_dir_requires_client_executable() {
    let temp = TempDir::new().unwrap();
    let client = LeagueClient::new(store_in(&temp));
    let install = temp.path().join("League of Legends");
    fs::create_dir_all(&install).unwrap();

    assert!(!client.is_valid_dir(&install));
    assert!(!client.is_valid_dir(&temp.path().join("missing")));

    fs::write(install.join("LeagueClient.exe"), b"").unwrap();
    assert!(client.is_valid_dir(&install));
}

#[tokio::test]
async fn restart_without_league_path_fails_before_network() {
    let temp = TempDir::new().unwrap();
    let client = LeagueClient::new(store_in(&temp));

    let result = client.restart_ux().await;

    assert!(matches!(result, Err(ClientError::LeaguePathNotSet)));
}

#[tokio::test]
async fn restart_without_lockfile_fails_before_network() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store
        .set_league_path(&temp.path().display().to_string())
        .unwrap();
    let client = LeagueClient::new(store);

    let result = client.restart_ux().await;

    assert!(matches!(result, Err(ClientError::Lockfile { .. })));
}

fn module_fixture(temp: &TempDir) -> (CoreModule, Arc<ConfigStore>, std::path::PathBuf) {
    let store = store_in(temp);
    let core = temp.path().join("loader").join("core.dll");
    fs::write(&core, b"native").unwrap();

    let league = temp.path().join("league");
    fs::create_dir_all(&league).unwrap();
    store.set_league_path(&league.display().to_string()).unwrap();

    (CoreModule::new(core, store.clone()), store, league)
}

#[test]
fn module_copy_activation_round_trip() {
    let temp = TempDir::new().unwrap();
    let (module, _store, league) = module_fixture(&temp);

    assert!(module.is_found());
    assert!(!module.is_active());

    module.set_active(true).unwrap();
    assert!(module.is_active());
    assert_eq!(fs::read(league.join("d3d9.dll")).unwrap(), b"native");

    module.set_active(false).unwrap();
    assert!(!module.is_active());
    assert!(!league.join("d3d9.dll").exists());

    module.set_active(false).unwrap();
}

#[cfg(unix)]
#[test]
fn module_symlink_activation() {
    let temp = TempDir::new().unwrap();
    let (module, store, league) = module_fixture(&temp);
    store.set_use_symlink(true).unwrap();

    module.set_active(true).unwrap();

    let metadata = fs::symlink_metadata(league.join("d3d9.dll")).unwrap();
    assert!(metadata.file_type().is_symlink());
    assert!(module.is_active());
}

#[test]
fn module_missing_core_fails() {
    let temp = TempDir::new().unwrap();
    let module = CoreModule::new(temp.path().join("core.dll"), store_in(&temp));

    assert!(!module.is_found());
    assert!(matches!(
        module.set_active(true),
        Err(ModuleError::NotFound(_))
    ));
}

#[test]
fn module_without_league_path_fails() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let core = temp.path().join("core.dll");
    fs::write(&core, b"native").unwrap();
    let module = CoreModule::new(core, store);

    assert!(!module.is_active());
    assert!(matches!(
        module.set_active(true),
        Err(ModuleError::LeaguePathNotSet)
    ));
}
