//! # staffhub-entity
//!
//! Domain entity models for StaffHub. Every database entity derives `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and `sqlx::FromRow`, and implements
//! [`staffhub_core::traits::TableEntity`] to supply its table metadata to the
//! generic repository.

pub mod employee;

pub use employee::Employee;
