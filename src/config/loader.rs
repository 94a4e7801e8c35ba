//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::designs::{Design, EmployeeOperations};
use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Contents of `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayrollConfig {
    /// Human-readable name of this payroll setup.
    pub name: String,
    /// The employee design to build.
    #[serde(default)]
    pub design: Design,
}

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use srp_payroll::config::ConfigLoader;
/// use srp_payroll::designs::Design;
///
/// let loader = ConfigLoader::load("./config")?;
/// assert_eq!(loader.design(), Design::Facade);
/// # Ok::<(), srp_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if `payroll.yaml` is missing and
    /// `ConfigParseError` if it is not valid YAML or names an unknown design.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<PayrollConfig>(&config_path)?;

        info!(
            name = %config.name,
            design = ?config.design,
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| {
            warn!(path = %path_str, "Configuration file not found");
            PayrollError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            warn!(path = %path_str, error = %e, "Configuration file failed to parse");
            PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            }
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured design.
    pub fn design(&self) -> Design {
        self.config.design
    }

    /// Builds an employee of the configured design.
    pub fn build_employee(&self, record: EmployeeRecord) -> Box<dyn EmployeeOperations> {
        self.config.design.build(record)
    }
}
