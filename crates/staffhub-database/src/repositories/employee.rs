//! Employee repository implementation.

use sqlx::PgPool;

use staffhub_core::result::AppResult;
use staffhub_core::types::{PagedList, QueryFilter, SqlValue};
use staffhub_entity::Employee;

use crate::repository::DataRepository;

/// Repository for employee CRUD and query operations.
///
/// Table metadata (table name, primary key, order whitelist) lives on the
/// [`Employee`] entity; this type only fixes the generic repository to it
/// and the id to `i32`.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    inner: DataRepository<Employee>,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: DataRepository::new(pool),
        }
    }

    /// Insert a new employee; the id is generated by the database.
    pub async fn add(&self, employee: &Employee) -> AppResult<()> {
        self.inner.add(employee).await
    }

    /// Find an employee by primary key.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        self.inner.get_by_id(id).await
    }

    /// Fetch one page of employees matching the filter set.
    pub async fn get_all(
        &self,
        filters: &[QueryFilter],
        order_by: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> AppResult<PagedList<Employee>> {
        self.inner.get_all(filters, order_by, page_index, page_size).await
    }

    /// Update only the supplied columns on an employee row.
    pub async fn update(&self, id: i32, changes: &[(String, SqlValue)]) -> AppResult<()> {
        self.inner.update(id, changes).await
    }

    /// Delete an employee by primary key; an absent id is a silent no-op.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.inner.delete(id).await
    }
}
