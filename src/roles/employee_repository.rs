//! Persistence for the database administrators.

use std::rc::Rc;

use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, Stakeholder};

use super::{CallCounter, RoleComponent};

/// Persists one employee's data.
///
/// Storage failures would be raised here and only here. The body is a
/// placeholder that writes nothing.
#[derive(Debug)]
pub struct EmployeeRepository {
    record: Rc<EmployeeRecord>,
    calls: CallCounter,
}

impl EmployeeRepository {
    /// The stakeholder persistence answers to.
    pub const STAKEHOLDER: Stakeholder = Stakeholder::DatabaseAdministration;

    /// Binds a repository to `record`.
    pub fn new(record: Rc<EmployeeRecord>) -> Self {
        Self {
            record,
            calls: CallCounter::new(),
        }
    }

    /// Saves the employee.
    pub fn save(&self) -> PayrollResult<()> {
        self.calls.record();
        debug!(
            employee = %self.record.name(),
            stakeholder = %Self::STAKEHOLDER,
            "Saving employee"
        );
        self.other_fancy_queries_optimizer();
        Ok(())
    }

    /// Extension point for query planning and storage tuning.
    fn other_fancy_queries_optimizer(&self) {}
}

impl RoleComponent for EmployeeRepository {
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
