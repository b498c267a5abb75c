//! Employee directory operations — search, creation, profile updates.

use std::sync::Arc;

use tracing::info;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_core::types::{DEFAULT_PAGE_SIZE, FilterLogic, PagedList, QueryFilter, SqlValue};
use staffhub_database::repositories::EmployeeRepository;
use staffhub_entity::Employee;

/// Handles employee directory use cases.
///
/// Required-field validation happens here, before anything reaches the
/// repository; the repository itself never rejects input.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// Employee repository.
    repository: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Gets an employee by id, `None` when no such employee exists.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        self.repository.get_by_id(id).await
    }

    /// Searches the directory with optional name and job-title patterns.
    ///
    /// Non-blank patterns become `LIKE` filters combined with `OR`; the
    /// caller supplies any wildcards. `page_size` defaults to
    /// [`DEFAULT_PAGE_SIZE`] when not given.
    pub async fn get_all(
        &self,
        name: Option<&str>,
        job_title: Option<&str>,
        order_by: Option<&str>,
        page_index: u32,
        page_size: Option<u32>,
    ) -> AppResult<PagedList<Employee>> {
        let filters = search_filters(name, job_title);
        self.repository
            .get_all(
                &filters,
                order_by,
                page_index,
                page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            )
            .await
    }

    /// Adds a new employee after trimming and validating both fields.
    pub async fn add(&self, name: &str, job_title: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name must not be empty"));
        }

        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(AppError::validation("Job title must not be empty"));
        }

        self.repository
            .add(&Employee::new(name, job_title))
            .await?;

        info!(name, job_title, "Employee added");
        Ok(())
    }

    /// Updates an employee, touching only the fields supplied non-blank.
    ///
    /// When both fields are blank or absent the change set is empty and no
    /// store mutation happens.
    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        job_title: Option<&str>,
    ) -> AppResult<()> {
        let changes = change_set(name, job_title);
        if changes.is_empty() {
            return Ok(());
        }

        self.repository.update(id, &changes).await?;

        info!(id, "Employee updated");
        Ok(())
    }

    /// Deletes an employee by id; deleting an absent id is a silent no-op.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;

        info!(id, "Employee deleted");
        Ok(())
    }
}

/// Translate optional search patterns into a filter set.
fn search_filters(name: Option<&str>, job_title: Option<&str>) -> Vec<QueryFilter> {
    let mut filters = Vec::new();

    if let Some(name) = name.map(str::trim).filter(|s| !s.is_empty()) {
        filters.push(QueryFilter::like("name", name));
    }
    if let Some(job_title) = job_title.map(str::trim).filter(|s| !s.is_empty()) {
        filters.push(QueryFilter::like("job_title", job_title).logic(FilterLogic::Or));
    }

    filters
}

/// Build the update change set from the non-blank fields.
fn change_set(name: Option<&str>, job_title: Option<&str>) -> Vec<(String, SqlValue)> {
    let mut changes = Vec::new();

    if let Some(name) = name.map(str::trim).filter(|s| !s.is_empty()) {
        changes.push(("name".to_string(), SqlValue::from(name)));
    }
    if let Some(job_title) = job_title.map(str::trim).filter(|s| !s.is_empty()) {
        changes.push(("job_title".to_string(), SqlValue::from(job_title)));
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;
    use staffhub_core::error::ErrorKind;

    fn service() -> EmployeeService {
        // Lazy pool: no connection is made unless a statement executes.
        let pool = PgPool::connect_lazy("postgres://staffhub@localhost:5432/staffhub").unwrap();
        EmployeeService::new(Arc::new(EmployeeRepository::new(pool)))
    }

    #[test]
    fn test_search_filters_union_semantics() {
        let filters = search_filters(Some("%a%"), Some("%b%"));
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].field, "name");
        assert_eq!(filters[0].operator, "LIKE");
        assert_eq!(filters[1].field, "job_title");
        assert_eq!(filters[1].logic, FilterLogic::Or);
    }

    #[test]
    fn test_blank_patterns_produce_no_filters() {
        assert!(search_filters(None, None).is_empty());
        assert!(search_filters(Some("   "), Some("")).is_empty());
    }

    #[test]
    fn test_change_set_skips_blank_fields() {
        let changes = change_set(Some("  Ada  "), Some("   "));
        assert_eq!(
            changes,
            vec![("name".to_string(), SqlValue::Text("Ada".to_string()))]
        );
        assert!(change_set(None, None).is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name_before_touching_store() {
        let err = service().add("   ", "Engineer").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_job_title() {
        let err = service().add("Ada", "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_update_with_no_changes_is_a_no_op() {
        // An empty change set returns before any statement is built, so
        // this succeeds even though no database is reachable.
        service().update(1, None, Some("  ")).await.unwrap();
    }
}
