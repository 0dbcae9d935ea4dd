pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, OutputFormat, Settings};
pub use core::{etl::GpaEngine, pipeline::RosterPipeline};
pub use utils::error::{GpaError, Result};
