//! Rose Loader - command-line control plane for the Pengu client loader.
//!
//! The loader activates and deactivates the native core module next to the
//! League client, keeps a small `key=value` settings file beside the
//! executable, lists and toggles user script plugins and asks a running
//! client to restart its UX. The main features include:
//!
//! - Settings store with typed accessors and an externally owned override
//!   for the client path
//! - Fuzzy plugin identifier resolution
//! - A flat command table that validates preconditions before touching any
//!   external collaborator
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rose_loader::{config::ConfigPaths, config_store::ConfigStore};
//!
//! let paths = ConfigPaths::discover()?;
//! let store = ConfigStore::load(&paths)?;
//! println!("League path: {}", store.league_path());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// On-disk locations and the external Rose configuration lookup.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Persistent `key=value` settings with typed projections.
pub mod config_store;

/// Plugin enumeration, toggling and identifier resolution.
pub mod plugins;

/// External collaborators: native module and client process.
pub mod services;

/// Command tokenizer, dispatcher and result delivery.
pub mod cli;

/// Single-instance detection.
pub mod instance;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{LoaderError, Result};
