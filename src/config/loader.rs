//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy and holiday tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Jurisdiction, RegionalHolidayCalendar};

use super::types::{AccrualRateTable, EngineConfig, HolidayTable, PolicyConfig, PolicyMetadata};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the accrual-rate policy and per-jurisdiction
/// holiday calendars.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/leave/
/// ├── policy.yaml          # Policy metadata and accrual rates
/// └── holidays/
///     └── au.yaml          # Public holiday table for one country
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::Jurisdiction;
///
/// let loader = ConfigLoader::load("./config/leave").unwrap();
///
/// let rates = loader.accrual_rates();
/// println!("Annual divisor: {}", rates.annual);
///
/// let jurisdiction = Jurisdiction::new("au", "vic").unwrap();
/// let calendar = loader.calendar(&jurisdiction);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/leave")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/leave")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;

        let holidays_dir = path.join("holidays");
        let tables = Self::load_holiday_tables(&holidays_dir)?;

        Ok(Self {
            config: EngineConfig::new(policy, tables),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday table from the holidays directory.
    fn load_holiday_tables(dir: &Path) -> EngineResult<Vec<HolidayTable>> {
        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir.display().to_string(),
        })?;

        let mut tables = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| EngineError::ConfigParseError {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
            let file_path = entry.path();
            let is_yaml = file_path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if is_yaml {
                tables.push(Self::load_yaml::<HolidayTable>(&file_path)?);
            }
        }
        Ok(tables)
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the accrual-rate divisors.
    pub fn accrual_rates(&self) -> &AccrualRateTable {
        self.config.accrual_rates()
    }

    /// Materializes the holiday calendar for a jurisdiction.
    pub fn calendar(&self, jurisdiction: &Jurisdiction) -> RegionalHolidayCalendar {
        self.config.calendar(jurisdiction)
    }
}
