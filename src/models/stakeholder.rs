//! Stakeholders that employee capabilities answer to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A group of people who can request changes to one capability.
///
/// Under the single responsibility principle a module answers to one
/// stakeholder, so each role component reports exactly one of these.
///
/// # Example
///
/// ```
/// use srp_payroll::models::Stakeholder;
///
/// assert_eq!(Stakeholder::Accounting.officer(), "CFO");
/// assert_eq!(Stakeholder::Accounting.to_string(), "accounting");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stakeholder {
    /// The accounting department. Owns pay calculation.
    Accounting,
    /// The human resources department. Owns hour reporting.
    HumanResources,
    /// The database administrators. Own persistence.
    DatabaseAdministration,
}

impl Stakeholder {
    /// All stakeholders, in capability order (pay, hours, storage).
    pub const ALL: [Stakeholder; 3] = [
        Stakeholder::Accounting,
        Stakeholder::HumanResources,
        Stakeholder::DatabaseAdministration,
    ];

    /// The executive this stakeholder reports to.
    pub fn officer(self) -> &'static str {
        match self {
            Stakeholder::Accounting => "CFO",
            Stakeholder::HumanResources => "COO",
            Stakeholder::DatabaseAdministration => "CTO",
        }
    }
}

impl fmt::Display for Stakeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stakeholder::Accounting => "accounting",
            Stakeholder::HumanResources => "human_resources",
            Stakeholder::DatabaseAdministration => "database_administration",
        };
        f.write_str(name)
    }
}
