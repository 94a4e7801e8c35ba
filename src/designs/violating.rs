//! The single-type employee that mixes every concern.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, HoursReport, Stakeholder};
use crate::roles::CallCounter;

use super::EmployeeOperations;

/// An employee that calculates pay, reports hours and saves itself.
///
/// Accounting, HR and the database administrators can all force changes to
/// this one type. It is kept to contrast with [`super::EmployeeFacade`] and
/// [`super::PrimaryEmployeeEntity`].
///
/// # Example
///
/// ```
/// use srp_payroll::designs::{EmployeeOperations, ViolatingEmployee};
/// use srp_payroll::models::Stakeholder;
///
/// let employee = ViolatingEmployee::new("Alice", "Engineer");
/// employee.save().unwrap();
/// assert_eq!(employee.calls_for(Stakeholder::DatabaseAdministration), 1);
/// ```
#[derive(Debug)]
pub struct ViolatingEmployee {
    record: EmployeeRecord,
    pay_calls: CallCounter,
    report_calls: CallCounter,
    save_calls: CallCounter,
}

impl ViolatingEmployee {
    /// Creates an employee with no address.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self::from(EmployeeRecord::new(name, role))
    }

    /// Returns the employee with the given address set.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.record = self.record.with_address(address);
        self
    }

    /// Stakeholders this type answers to.
    pub fn stakeholders(&self) -> &'static [Stakeholder] {
        &Stakeholder::ALL
    }

    /// How many times the capability owned by `stakeholder` has run.
    pub fn calls_for(&self, stakeholder: Stakeholder) -> u32 {
        match stakeholder {
            Stakeholder::Accounting => self.pay_calls.count(),
            Stakeholder::HumanResources => self.report_calls.count(),
            Stakeholder::DatabaseAdministration => self.save_calls.count(),
        }
    }
}

impl From<EmployeeRecord> for ViolatingEmployee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            record,
            pay_calls: CallCounter::new(),
            report_calls: CallCounter::new(),
            save_calls: CallCounter::new(),
        }
    }
}

impl EmployeeOperations for ViolatingEmployee {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn calculate_pay(&self) -> PayrollResult<Decimal> {
        self.pay_calls.record();
        debug!(employee = %self.record.name(), "Calculating pay in-line");
        Ok(Decimal::ZERO)
    }

    fn report_hours(&self) -> PayrollResult<HoursReport> {
        self.report_calls.record();
        debug!(employee = %self.record.name(), "Reporting hours in-line");
        Ok(HoursReport::empty(self.record.name()))
    }

    fn save(&self) -> PayrollResult<()> {
        self.save_calls.record();
        debug!(employee = %self.record.name(), "Saving in-line");
        Ok(())
    }
}
