//! Command-line front end for the dcasim engine
//!
//! Loads price series from a local data directory, runs single simulations
//! or scenario batches through `dcasim_core`, and renders the results as
//! text or JSON.

pub mod commands;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

pub use logging::{LogTarget, init_logging};
