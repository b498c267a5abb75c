//! # staffhub-core
//!
//! Core crate for StaffHub. Contains the capability trait for table-backed
//! entities, configuration schemas, query filter/pagination types, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other StaffHub crates and
//! no dependency on any database driver.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
