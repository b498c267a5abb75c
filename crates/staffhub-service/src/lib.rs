//! # staffhub-service
//!
//! Business logic service layer for StaffHub. Services validate input,
//! translate caller-facing search parameters into filter sets, and delegate
//! persistence to the repositories.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod employee;

pub use employee::EmployeeService;
