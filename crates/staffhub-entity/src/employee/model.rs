//! Employee entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use staffhub_core::traits::TableEntity;
use staffhub_core::types::SqlValue;

/// An employee record in the StaffHub directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Primary key, generated by the database.
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Job title.
    pub job_title: String,
}

impl Employee {
    /// Build an employee that has not been persisted yet.
    ///
    /// The id is assigned by the database on insert; the placeholder value
    /// here is never written.
    pub fn new(name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            job_title: job_title.into(),
        }
    }
}

impl TableEntity for Employee {
    const TABLE: &'static str = "employees";

    const PRIMARY_KEY: &'static str = "id";

    const ORDER_BY_FIELDS: &'static [&'static str] = &["id", "name", "job_title"];

    fn insert_params(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", SqlValue::Text(self.name.clone())),
            ("job_title", SqlValue::Text(self.job_title.clone())),
        ]
    }
}
