//! Payroll employee model decomposed by the Single Responsibility Principle.
//!
//! This crate shapes one payroll "employee" three ways: a single type mixing
//! pay calculation, hour reporting and persistence; a facade over three
//! single-purpose role components; and a record that keeps pay calculation
//! while delegating the rest. Operation bodies are placeholders that record
//! their invocation, so the structure and delegation can be checked without
//! real payroll rules.

#![warn(missing_docs)]

pub mod config;
pub mod designs;
pub mod error;
pub mod models;
pub mod roles;
