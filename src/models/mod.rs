//! Core data models for the payroll model.
//!
//! This module contains the plain data types shared by every design.

mod employee_record;
mod hours_report;
mod stakeholder;

pub use employee_record::EmployeeRecord;
pub use hours_report::{HoursEntry, HoursReport};
pub use stakeholder::Stakeholder;
