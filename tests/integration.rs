//! Integration tests for the payroll employee designs.
//!
//! This test suite covers:
//! - Facade delegation to exactly one role component per call
//! - Record sharing between the facade and its components
//! - Primary entity delegation to its own record
//! - Isolation between employees
//! - Design selection through configuration

use std::rc::Rc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use srp_payroll::config::ConfigLoader;
use srp_payroll::designs::{
    Design, EmployeeFacade, EmployeeOperations, PrimaryEmployeeEntity, ViolatingEmployee,
};
use srp_payroll::models::{EmployeeRecord, Stakeholder};
use srp_payroll::roles::RoleComponent;

// =============================================================================
// Test Helpers
// =============================================================================

fn alice() -> Rc<EmployeeRecord> {
    Rc::new(EmployeeRecord::new("Alice", "Engineer"))
}

fn facade_calls(facade: &EmployeeFacade) -> [u32; 3] {
    [
        facade.pay_calculator().calls(),
        facade.hour_reporter().calls(),
        facade.repository().calls(),
    ]
}

fn record_strategy() -> impl Strategy<Value = EmployeeRecord> {
    (".*", ".*", proptest::option::of(".*")).prop_map(|(name, role, address)| {
        let record = EmployeeRecord::new(name, role);
        match address {
            Some(address) => record.with_address(address),
            None => record,
        }
    })
}

// =============================================================================
// Facade
// =============================================================================

#[test]
fn test_alice_scenario_each_call_traces_to_one_component() {
    let record = alice();
    assert!(record.address().is_none());
    let facade = EmployeeFacade::new(Rc::clone(&record));

    assert_eq!(facade.calculate_pay(), Ok(Decimal::ZERO));
    assert_eq!(facade_calls(&facade), [1, 0, 0]);

    let report = facade.report_hours().unwrap();
    assert_eq!(report.employee, "Alice");
    assert_eq!(facade_calls(&facade), [1, 1, 0]);

    assert_eq!(facade.save(), Ok(()));
    assert_eq!(facade_calls(&facade), [1, 1, 1]);
}

#[test]
fn test_facade_components_answer_to_distinct_stakeholders() {
    let facade = EmployeeFacade::new(alice());

    let stakeholders = [
        facade.pay_calculator().stakeholder(),
        facade.hour_reporter().stakeholder(),
        facade.repository().stakeholder(),
    ];
    assert_eq!(stakeholders, Stakeholder::ALL);
}

#[test]
fn test_two_facades_do_not_share_components() {
    let alice = alice();
    let bob = Rc::new(EmployeeRecord::new("Bob", "Nurse"));
    let first = EmployeeFacade::new(Rc::clone(&alice));
    let second = EmployeeFacade::new(Rc::clone(&bob));

    first.calculate_pay().unwrap();
    first.calculate_pay().unwrap();
    second.save().unwrap();

    assert_eq!(facade_calls(&first), [2, 0, 0]);
    assert_eq!(facade_calls(&second), [0, 0, 1]);
    assert!(!std::ptr::eq(first.pay_calculator(), second.pay_calculator()));
    assert!(first.pay_calculator().is_bound_to(&alice));
    assert!(!first.pay_calculator().is_bound_to(&bob));
    assert!(second.repository().is_bound_to(&bob));
}

#[test]
fn test_two_facades_over_equal_records_stay_separate() {
    let first = EmployeeFacade::from(EmployeeRecord::new("Alice", "Engineer"));
    let second = EmployeeFacade::from(EmployeeRecord::new("Alice", "Engineer"));

    first.report_hours().unwrap();

    assert!(!Rc::ptr_eq(first.shared_record(), second.shared_record()));
    assert_eq!(facade_calls(&second), [0, 0, 0]);
}

// =============================================================================
// Primary entity
// =============================================================================

#[test]
fn test_primary_entity_delegates_to_own_record() {
    let entity = PrimaryEmployeeEntity::new(
        EmployeeRecord::new("Dana", "Manager").with_address("3 Low Rd"),
    );

    entity.report_hours().unwrap();
    entity.save().unwrap();

    let own = entity.shared_record();
    assert!(entity.hour_reporter().is_bound_to(own));
    assert!(entity.repository().is_bound_to(own));
    assert_eq!(entity.hour_reporter().calls(), 1);
    assert_eq!(entity.repository().calls(), 1);
    assert_eq!(entity.pay_calls(), 0);
    assert_eq!(entity.record().address(), Some("3 Low Rd"));
}

// =============================================================================
// Violating design
// =============================================================================

#[test]
fn test_violating_employee_keeps_everything_in_one_type() {
    let employee = ViolatingEmployee::new("Alice", "Engineer");

    employee.calculate_pay().unwrap();
    employee.report_hours().unwrap();
    employee.save().unwrap();

    for stakeholder in Stakeholder::ALL {
        assert_eq!(employee.calls_for(stakeholder), 1);
    }
    assert_eq!(
        employee.stakeholders().len(),
        Design::Violating.direct_stakeholders().len()
    );
}

// =============================================================================
// Design selection
// =============================================================================

#[test]
fn test_designs_agree_on_placeholder_results() {
    for design in Design::ALL {
        let employee = design.build(EmployeeRecord::new("Alice", "Engineer"));

        assert_eq!(employee.calculate_pay(), Ok(Decimal::ZERO), "{:?}", design);
        assert_eq!(employee.report_hours().unwrap().total_hours, Decimal::ZERO);
        assert_eq!(employee.save(), Ok(()));
    }
}

#[test]
fn test_bundled_config_builds_facade() {
    let loader = ConfigLoader::load("./config").expect("Failed to load config");
    assert_eq!(loader.design(), Design::Facade);

    let employee = loader.build_employee(EmployeeRecord::new("Alice", "Engineer"));
    assert_eq!(employee.record().role(), "Engineer");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_facade_routes_each_call_to_one_component(
        record in record_strategy(),
        ops in proptest::collection::vec(0usize..3, 0..20),
    ) {
        let record = Rc::new(record);
        let snapshot = (*record).clone();
        let facade = EmployeeFacade::new(Rc::clone(&record));
        let mut expected = [0u32; 3];

        for op in ops {
            match op {
                0 => { facade.calculate_pay().unwrap(); }
                1 => { facade.report_hours().unwrap(); }
                _ => { facade.save().unwrap(); }
            }
            expected[op] += 1;
        }

        prop_assert_eq!(facade_calls(&facade), expected);
        prop_assert!(facade.pay_calculator().is_bound_to(&record));
        prop_assert!(facade.hour_reporter().is_bound_to(&record));
        prop_assert!(facade.repository().is_bound_to(&record));
        prop_assert_eq!(&*record, &snapshot);
    }

    #[test]
    fn prop_every_design_preserves_record(record in record_strategy()) {
        for design in Design::ALL {
            let employee = design.build(record.clone());
            employee.calculate_pay().unwrap();
            employee.report_hours().unwrap();
            employee.save().unwrap();

            prop_assert_eq!(employee.record(), &record);
        }
    }
}
