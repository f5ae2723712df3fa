//! Configuration loading and management for the leave engine.
//!
//! This module provides functionality to load the engine configuration
//! from YAML files: the accrual-rate policy and the per-country public
//! holiday tables.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualRateTable, EngineConfig, HolidayTable, PolicyConfig, PolicyMetadata};
