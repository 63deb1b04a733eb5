//! Command handlers, grouped by what they act on.

pub mod client;
pub mod general;
pub mod module;
pub mod plugin;
pub mod settings;
