//! Persistent settings store.
//!
//! Loads the loader's `key=value` settings file into memory, exposes typed
//! accessors for the known fields and rewrites the whole file on every
//! change.

mod error;
mod parsing;
mod store;


pub use error::ConfigError;
pub use parsing::{parse_settings, render_settings};
pub use store::ConfigStore;
