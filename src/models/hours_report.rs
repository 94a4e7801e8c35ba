//! Worked-hours report produced for HR.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single reported block of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursEntry {
    /// Free-form label for the block (e.g. a week or a project).
    pub label: String,
    /// Hours worked in the block.
    pub hours: Decimal,
}

/// Hours worked by one employee.
///
/// # Example
///
/// ```
/// use srp_payroll::models::HoursReport;
/// use rust_decimal::Decimal;
///
/// let report = HoursReport::empty("Alice");
/// assert_eq!(report.total_hours, Decimal::ZERO);
/// assert!(report.entries.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursReport {
    /// Name of the employee the report covers.
    pub employee: String,
    /// Sum of all entry hours.
    pub total_hours: Decimal,
    /// Individual blocks of work.
    #[serde(default)]
    pub entries: Vec<HoursEntry>,
}

impl HoursReport {
    /// Creates a report with no entries.
    pub fn empty(employee: impl Into<String>) -> Self {
        Self {
            employee: employee.into(),
            total_hours: Decimal::ZERO,
            entries: Vec::new(),
        }
    }
}
