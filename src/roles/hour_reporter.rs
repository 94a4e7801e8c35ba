//! Worked-hours reporting for human resources.

use std::rc::Rc;

use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, HoursReport, Stakeholder};

use super::{CallCounter, RoleComponent};

/// Produces worked-hours reports for one employee.
///
/// The body is a placeholder: the report names the employee and carries no
/// hours.
#[derive(Debug)]
pub struct HourReporter {
    record: Rc<EmployeeRecord>,
    calls: CallCounter,
}

impl HourReporter {
    /// The stakeholder hour reporting answers to.
    pub const STAKEHOLDER: Stakeholder = Stakeholder::HumanResources;

    /// Binds a reporter to `record`.
    pub fn new(record: Rc<EmployeeRecord>) -> Self {
        Self {
            record,
            calls: CallCounter::new(),
        }
    }

    /// Reports the hours the employee worked.
    pub fn report_hours(&self) -> PayrollResult<HoursReport> {
        self.calls.record();
        debug!(
            employee = %self.record.name(),
            stakeholder = %Self::STAKEHOLDER,
            "Reporting hours"
        );
        Ok(self.other_fancy_report_algorithms())
    }

    /// Extension point for HR-specific report variants.
    fn other_fancy_report_algorithms(&self) -> HoursReport {
        HoursReport::empty(self.record.name())
    }
}

impl RoleComponent for HourReporter {
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
