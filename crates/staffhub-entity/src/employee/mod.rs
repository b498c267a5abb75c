//! Employee entity.

pub mod model;

pub use model::Employee;
