//! Core traits defined in `staffhub-core` and implemented by other crates.

pub mod entity;

pub use entity::TableEntity;
