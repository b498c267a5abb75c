//! Core type definitions used across the StaffHub workspace.

pub mod filter;
pub mod pagination;
pub mod value;

pub use filter::{FilterLogic, QueryFilter};
pub use pagination::{DEFAULT_PAGE_SIZE, PagedList};
pub use value::SqlValue;
