//! Facade over the three role components.

use std::rc::Rc;

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, HoursReport};
use crate::roles::{EmployeeRepository, HourReporter, PayCalculator, RoleComponent};

use super::EmployeeOperations;

/// Single entry point that forwards each capability to its owner.
///
/// The facade owns one [`PayCalculator`], one [`HourReporter`] and one
/// [`EmployeeRepository`], all bound to the same record. It adds no logic:
/// results and errors come back exactly as the delegate produced them.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use srp_payroll::designs::{EmployeeFacade, EmployeeOperations};
/// use srp_payroll::models::EmployeeRecord;
/// use srp_payroll::roles::RoleComponent;
///
/// let record = Rc::new(EmployeeRecord::new("Alice", "Engineer"));
/// let facade = EmployeeFacade::new(Rc::clone(&record));
///
/// facade.calculate_pay().unwrap();
/// assert_eq!(facade.pay_calculator().calls(), 1);
/// assert_eq!(facade.hour_reporter().calls(), 0);
/// assert!(facade.repository().is_bound_to(&record));
/// ```
#[derive(Debug)]
pub struct EmployeeFacade {
    pay_calculator: PayCalculator,
    hour_reporter: HourReporter,
    repository: EmployeeRepository,
}

impl EmployeeFacade {
    /// Builds the three role components around `record`.
    pub fn new(record: Rc<EmployeeRecord>) -> Self {
        Self {
            pay_calculator: PayCalculator::new(Rc::clone(&record)),
            hour_reporter: HourReporter::new(Rc::clone(&record)),
            repository: EmployeeRepository::new(record),
        }
    }

    /// The shared record handle.
    pub fn shared_record(&self) -> &Rc<EmployeeRecord> {
        self.pay_calculator.record()
    }

    /// The owned pay calculator.
    pub fn pay_calculator(&self) -> &PayCalculator {
        &self.pay_calculator
    }

    /// The owned hour reporter.
    pub fn hour_reporter(&self) -> &HourReporter {
        &self.hour_reporter
    }

    /// The owned repository.
    pub fn repository(&self) -> &EmployeeRepository {
        &self.repository
    }
}

impl From<EmployeeRecord> for EmployeeFacade {
    fn from(record: EmployeeRecord) -> Self {
        Self::new(Rc::new(record))
    }
}

impl EmployeeOperations for EmployeeFacade {
    fn record(&self) -> &EmployeeRecord {
        self.shared_record()
    }

    fn calculate_pay(&self) -> PayrollResult<Decimal> {
        self.pay_calculator.calculate_pay()
    }

    fn report_hours(&self) -> PayrollResult<HoursReport> {
        self.hour_reporter.report_hours()
    }

    fn save(&self) -> PayrollResult<()> {
        self.repository.save()
    }
}
