//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], the data-only snapshot that every
//! role component is bound to.

use serde::{Deserialize, Serialize};

/// Identifying attributes of one employee.
///
/// The record carries no behaviour. Once built it is shared read-only with the
/// role components, which is why the fields are private and only exposed
/// through accessors. No validation is performed, so empty text is accepted.
///
/// # Examples
///
/// ```
/// use srp_payroll::models::EmployeeRecord;
///
/// let record = EmployeeRecord::new("Alice", "Engineer");
/// assert_eq!(record.name(), "Alice");
/// assert_eq!(record.address(), None);
///
/// let record = record.with_address("1 Main St");
/// assert_eq!(record.address(), Some("1 Main St"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    name: String,
    role: String,
    /// `None` means the address is unknown or not yet collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl EmployeeRecord {
    /// Creates a record with no address.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            address: None,
        }
    }

    /// Returns the record with the given address set.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's role.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The employee's address, if known.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}
