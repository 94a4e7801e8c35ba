//! Pay calculation for the accounting department.

use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, Stakeholder};

use super::{CallCounter, RoleComponent};

/// Computes compensation for one employee.
///
/// Accounting-specific algorithms live behind this type and nowhere else.
/// The body is a placeholder that always returns zero.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use srp_payroll::models::EmployeeRecord;
/// use srp_payroll::roles::{PayCalculator, RoleComponent};
/// use rust_decimal::Decimal;
///
/// let record = Rc::new(EmployeeRecord::new("Alice", "Engineer"));
/// let calculator = PayCalculator::new(Rc::clone(&record));
///
/// assert_eq!(calculator.calculate_pay().unwrap(), Decimal::ZERO);
/// assert_eq!(calculator.calls(), 1);
/// ```
#[derive(Debug)]
pub struct PayCalculator {
    record: Rc<EmployeeRecord>,
    calls: CallCounter,
}

impl PayCalculator {
    /// The stakeholder pay calculation answers to.
    pub const STAKEHOLDER: Stakeholder = Stakeholder::Accounting;

    /// Binds a calculator to `record`.
    pub fn new(record: Rc<EmployeeRecord>) -> Self {
        Self {
            record,
            calls: CallCounter::new(),
        }
    }

    /// Calculates the employee's pay.
    pub fn calculate_pay(&self) -> PayrollResult<Decimal> {
        self.calls.record();
        debug!(
            employee = %self.record.name(),
            stakeholder = %Self::STAKEHOLDER,
            "Calculating pay"
        );
        Ok(self.other_fancy_payment_algorithms())
    }

    /// Extension point for accounting-specific pay algorithms.
    fn other_fancy_payment_algorithms(&self) -> Decimal {
        Decimal::ZERO
    }
}

impl RoleComponent for PayCalculator {
    fn record(&self) -> &Rc<EmployeeRecord> {
        &self.record
    }

    fn stakeholder(&self) -> Stakeholder {
        Self::STAKEHOLDER
    }

    fn calls(&self) -> u32 {
        self.calls.count()
    }
}
