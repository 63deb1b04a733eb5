use std::{io, path::Path, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use sysinfo::{ProcessesToUpdate, System};
use tracing::{debug, info, instrument};

use crate::config_store::ConfigStore;

const UX_PROCESS: &str = "LeagueClientUx";
const CLIENT_EXECUTABLES: [&str; 2] = ["LeagueClient.exe", "LeagueClientUx.exe"];
const LOCKFILE: &str = "lockfile";
const RESTART_ENDPOINT: &str = "/riotclient/kill-and-restart-ux";
const AUTH_USER: &str = "riot";

/// Errors raised while talking to the running client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No client installation path is configured.
    #[error("League path is not set")]
    LeaguePathNotSet,

    /// The client's lockfile could not be read.
    #[error("cannot read client lockfile '{path}': {source}")]
    Lockfile {
        /// Expected lockfile location
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// The lockfile exists but does not have the expected shape.
    #[error("malformed client lockfile: {0}")]
    InvalidLockfile(String),

    /// The HTTP request to the client failed or was rejected.
    #[error("client request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Query and control capability of the running League client.
#[async_trait]
pub trait ClientControl: Send + Sync {
    /// Whether the client UX process is running.
    async fn is_running(&self) -> bool;

    /// Asks the client to kill and restart its UX process.
    ///
    /// # Errors
    /// Returns `ClientError` if the client could not be reached or refused.
    async fn restart_ux(&self) -> Result<(), ClientError>;

    /// Whether `path` looks like a League client installation directory.
    fn is_valid_dir(&self, path: &Path) -> bool;
}

/// Connection details the client publishes in its `lockfile`
///
/// Format: `name:pid:port:password:protocol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    /// Process id of the client
    pub pid: u32,
    /// Local port of the client API
    pub port: u16,
    /// Basic-auth password for the `riot` user
    pub password: String,
    /// URL scheme, normally `https`
    pub protocol: String,
}

impl Lockfile {
    /// Parses lockfile contents.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidLockfile` if a field is missing or not numeric.
    pub fn parse(contents: &str) -> Result<Self, ClientError> {
        let fields: Vec<&str> = contents.trim().split(':').collect();
        let [_, pid, port, password, protocol] = fields.as_slice() else {
            return Err(ClientError::InvalidLockfile(format!(
                "expected 5 fields, found {}",
                fields.len()
            )));
        };

        let pid = pid
            .parse()
            .map_err(|_| ClientError::InvalidLockfile(format!("invalid pid '{pid}'")))?;
        let port = port
            .parse()
            .map_err(|_| ClientError::InvalidLockfile(format!("invalid port '{port}'")))?;

        Ok(Self {
            pid,
            port,
            password: (*password).to_string(),
            protocol: (*protocol).to_string(),
        })
    }

    /// Base URL of the local client API.
    pub fn base_url(&self) -> String {
        format!("{}://127.0.0.1:{}", self.protocol, self.port)
    }
}

/// Client control through the local client API
///
/// Credentials come from the `lockfile` in the configured League path.
#[derive(Debug, Clone)]
pub struct LeagueClient {
    store: Arc<ConfigStore>,
}

impl LeagueClient {
    /// Creates a client handle reading the install path from `store`.
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    async fn read_lockfile(&self) -> Result<Lockfile, ClientError> {
        let league_path = self.store.league_path();
        if league_path.trim().is_empty() {
            return Err(ClientError::LeaguePathNotSet);
        }

        let path = Path::new(league_path.trim()).join(LOCKFILE);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ClientError::Lockfile { path, source })?;

        Lockfile::parse(&contents)
    }
}

#[async_trait]
impl ClientControl for LeagueClient {
    async fn is_running(&self) -> bool {
        tokio::task::spawn_blocking(client_ux_running)
            .await
            .unwrap_or(false)
    }

    #[instrument(skip(self))]
    async fn restart_ux(&self) -> Result<(), ClientError> {
        let lockfile = self.read_lockfile().await?;
        debug!(pid = lockfile.pid, port = lockfile.port, "Read client lockfile");

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        client
            .post(format!("{}{RESTART_ENDPOINT}", lockfile.base_url()))
            .basic_auth(AUTH_USER, Some(&lockfile.password))
            .send()
            .await?
            .error_for_status()?;

        info!("Requested client UX restart");
        Ok(())
    }

    fn is_valid_dir(&self, path: &Path) -> bool {
        path.is_dir()
            && CLIENT_EXECUTABLES
                .iter()
                .any(|executable| path.join(executable).is_file())
    }
}

/// Whether a client UX process is alive on this machine.
pub(crate) fn client_ux_running() -> bool {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    system.processes().values().any(|process| {
        let name = process.name().to_string_lossy();
        let name = name.strip_suffix(".exe").unwrap_or(name.as_ref());
        name.eq_ignore_ascii_case(UX_PROCESS)
    })
}
