//! Employee that keeps pay calculation and delegates the rest.

use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, HoursReport, Stakeholder};
use crate::roles::{CallCounter, EmployeeRepository, HourReporter};

use super::EmployeeOperations;

/// An employee record that owns its most central capability.
///
/// Pay calculation stays in-line. Hour reporting and persistence go to an
/// [`HourReporter`] and an [`EmployeeRepository`] bound to this entity's own
/// record. This removes the facade layer but leaves the entity exposed to
/// accounting changes and to changes in the delegation wiring.
#[derive(Debug)]
pub struct PrimaryEmployeeEntity {
    record: Rc<EmployeeRecord>,
    pay_calls: CallCounter,
    hour_reporter: HourReporter,
    repository: EmployeeRepository,
}

impl PrimaryEmployeeEntity {
    /// The stakeholder whose logic stays in-line.
    pub const STAKEHOLDER: Stakeholder = Stakeholder::Accounting;

    /// Wraps `record` and binds the two delegates to it.
    pub fn new(record: EmployeeRecord) -> Self {
        let record = Rc::new(record);
        Self {
            hour_reporter: HourReporter::new(Rc::clone(&record)),
            repository: EmployeeRepository::new(Rc::clone(&record)),
            pay_calls: CallCounter::new(),
            record,
        }
    }

    /// The entity's own record handle.
    pub fn shared_record(&self) -> &Rc<EmployeeRecord> {
        &self.record
    }

    /// How many times pay has been calculated.
    pub fn pay_calls(&self) -> u32 {
        self.pay_calls.count()
    }

    /// The delegate for hour reporting.
    pub fn hour_reporter(&self) -> &HourReporter {
        &self.hour_reporter
    }

    /// The delegate for persistence.
    pub fn repository(&self) -> &EmployeeRepository {
        &self.repository
    }
}

impl EmployeeOperations for PrimaryEmployeeEntity {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn calculate_pay(&self) -> PayrollResult<Decimal> {
        self.pay_calls.record();
        debug!(
            employee = %self.record.name(),
            stakeholder = %Self::STAKEHOLDER,
            "Calculating pay in-line"
        );
        Ok(Decimal::ZERO)
    }

    fn report_hours(&self) -> PayrollResult<HoursReport> {
        self.hour_reporter.report_hours()
    }

    fn save(&self) -> PayrollResult<()> {
        self.repository.save()
    }
}
