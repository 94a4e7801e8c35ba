//! The three ways of shaping the payroll employee.
//!
//! - [`ViolatingEmployee`] keeps pay, hours and persistence in one type and so
//!   answers to three stakeholders at once.
//! - [`EmployeeFacade`] forwards each capability to the role component that
//!   owns it and holds no logic of its own.
//! - [`PrimaryEmployeeEntity`] keeps pay calculation in-line and delegates the
//!   other two capabilities.
//!
//! All three expose the same surface through [`EmployeeOperations`], and
//! [`Design`] lets a caller pick one explicitly.

mod facade;
mod primary_entity;
mod violating;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, HoursReport, Stakeholder};

pub use facade::EmployeeFacade;
pub use primary_entity::PrimaryEmployeeEntity;
pub use violating::ViolatingEmployee;

/// The capabilities every employee design exposes.
pub trait EmployeeOperations {
    /// The employee's data.
    fn record(&self) -> &EmployeeRecord;

    /// Calculates pay. Accounting concern.
    fn calculate_pay(&self) -> PayrollResult<Decimal>;

    /// Reports worked hours. HR concern.
    fn report_hours(&self) -> PayrollResult<HoursReport>;

    /// Persists the employee. Database administration concern.
    fn save(&self) -> PayrollResult<()>;
}

/// Which employee design to build.
///
/// # Example
///
/// ```
/// use srp_payroll::designs::Design;
/// use srp_payroll::models::EmployeeRecord;
///
/// let employee = Design::Facade.build(EmployeeRecord::new("Alice", "Engineer"));
/// assert!(employee.save().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Design {
    /// One type with every capability.
    Violating,
    /// Facade over three role components.
    #[default]
    Facade,
    /// Record with in-line pay calculation and two delegates.
    PrimaryEntity,
}

impl Design {
    /// Every design, from least to most separated.
    pub const ALL: [Design; 3] = [Design::Violating, Design::PrimaryEntity, Design::Facade];

    /// Builds an employee of this design around `record`.
    pub fn build(self, record: EmployeeRecord) -> Box<dyn EmployeeOperations> {
        info!(design = ?self, employee = %record.name(), "Building employee");
        match self {
            Design::Violating => Box::new(ViolatingEmployee::from(record)),
            Design::Facade => Box::new(EmployeeFacade::from(record)),
            Design::PrimaryEntity => Box::new(PrimaryEmployeeEntity::new(record)),
        }
    }

    /// Stakeholders whose logic lives directly in the top-level type.
    ///
    /// Forwarding to a role component does not count.
    pub fn direct_stakeholders(self) -> &'static [Stakeholder] {
        match self {
            Design::Violating => &Stakeholder::ALL,
            Design::Facade => &[],
            Design::PrimaryEntity => &[Stakeholder::Accounting],
        }
    }
}
