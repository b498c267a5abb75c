//! Concrete repository implementations for StaffHub entities.

pub mod employee;

pub use employee::EmployeeRepository;
