//! External collaborators the dispatcher drives.
//!
//! Each collaborator sits behind a trait so command handlers can be
//! exercised without a native module or a live client. The shipped
//! implementations are [`CoreModule`] and [`LeagueClient`].

mod client;
mod module;

#[cfg(test)]
mod tests;

pub use client::{ClientControl, ClientError, LeagueClient, Lockfile};
pub use module::{CoreModule, ModuleControl, ModuleError};
