//! Configuration loading for the payroll model.
//!
//! The only setting that matters is which employee [`Design`](crate::designs::Design)
//! to build.
//!
//! # Example
//!
//! ```no_run
//! use srp_payroll::config::ConfigLoader;
//! use srp_payroll::models::EmployeeRecord;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! let employee = config.build_employee(EmployeeRecord::new("Alice", "Engineer"));
//! ```

mod loader;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, PayrollConfig};
