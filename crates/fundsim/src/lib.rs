//! Command-line front end for the fund volatility simulator
//!
//! Loads an analysis config, runs each fund through `fundsim_core`, and renders
//! the comparison as a plain-text report or JSON.

pub mod config;
pub mod logging;
pub mod report;
pub mod util;

pub use config::{AnalysisConfig, FundEntry, default_data_dir};
pub use logging::init_logging;
pub use report::{ReportHeader, render_json, render_text, render_trajectory};
