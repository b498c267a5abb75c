//! # staffhub-database
//!
//! PostgreSQL connection management, dynamic SQL statement building, and the
//! generic repository over a single table, plus the concrete per-entity
//! repositories built on top of it.
//!
//! Statement text is assembled from trusted metadata (table names, primary
//! keys, whitelisted order columns) while every value travels as a bound
//! parameter; see [`statement`] for the exact rules.

pub mod connection;
pub mod repositories;
pub mod repository;
pub mod statement;

pub use connection::DatabasePool;
pub use repository::DataRepository;
