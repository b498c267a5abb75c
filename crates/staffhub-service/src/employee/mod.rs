//! Employee services.

pub mod service;

pub use service::EmployeeService;
