//! Single-purpose role components.
//!
//! Each component here answers to exactly one [`Stakeholder`] and is bound to
//! one shared [`EmployeeRecord`]. Changes requested by accounting touch only
//! [`PayCalculator`], changes requested by HR touch only [`HourReporter`] and
//! storage changes touch only [`EmployeeRepository`].

mod call_counter;
mod employee_repository;
mod hour_reporter;
mod pay_calculator;

use std::rc::Rc;

use crate::models::{EmployeeRecord, Stakeholder};

pub use call_counter::CallCounter;
pub use employee_repository::EmployeeRepository;
pub use hour_reporter::HourReporter;
pub use pay_calculator::PayCalculator;

/// Introspection shared by every role component.
pub trait RoleComponent {
    /// The record this component was bound to at construction.
    fn record(&self) -> &Rc<EmployeeRecord>;

    /// The stakeholder this component answers to.
    fn stakeholder(&self) -> Stakeholder;

    /// How many times the component's operation has run.
    fn calls(&self) -> u32;

    /// Returns true if this component is bound to exactly `record`
    /// (same allocation, not merely equal values).
    fn is_bound_to(&self, record: &Rc<EmployeeRecord>) -> bool {
        Rc::ptr_eq(self.record(), record)
    }
}
