//! Scrapes an app-store catalog in three stages: download every chart
//! listing, collect the app ids they contain, then fetch the full detail
//! record for each id. Every result lands as its own JSON file; per-item
//! failures are logged and never abort the run.

mod macros;

pub mod catalog;
pub mod charts;
pub mod collect;
pub mod config;
pub mod details;
mod error;
pub mod store;

pub use error::{Error, Result};

/// Run configuration file, expected in the working directory.
pub const SESSION_PATH: &str = "session.json";
