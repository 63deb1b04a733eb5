//! On-disk locations and external configuration inputs.
//!
//! The loader keeps its own files beside the executable and reads one
//! externally owned ini file for the client installation path.

mod paths;
pub mod rose;


pub use paths::{ConfigPaths, HOME_ENV};
