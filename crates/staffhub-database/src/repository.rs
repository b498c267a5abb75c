//! Generic repository over a single table.

use std::marker::PhantomData;

use sqlx::PgPool;
use sqlx::postgres::PgRow;
use tracing::debug;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::traits::TableEntity;
use staffhub_core::types::{PagedList, QueryFilter, SqlValue};

use crate::statement;

/// Bind a slice of [`SqlValue`]s onto any sqlx query type in order.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for value in $params {
            query = match value {
                SqlValue::Text(v) => query.bind(v.clone()),
                SqlValue::Integer(v) => query.bind(*v),
                SqlValue::Float(v) => query.bind(*v),
                SqlValue::Boolean(v) => query.bind(*v),
                SqlValue::Uuid(v) => query.bind(*v),
                SqlValue::Null => query.bind(Option::<String>::None),
            };
        }
        query
    }};
}

/// Generic create/read/update/delete repository for one table.
///
/// Parameterized by an entity supplying table metadata via [`TableEntity`]
/// and row mapping via `sqlx::FromRow`. The repository holds only the
/// connection pool handle; it keeps no per-call state, so a single instance
/// serves any number of concurrent callers. Each operation checks a
/// connection out of the pool for exactly one statement and releases it on
/// every exit path. Failures from the store propagate unchanged — no
/// retries, no translation.
#[derive(Debug, Clone)]
pub struct DataRepository<E> {
    pool: PgPool,
    _entity: PhantomData<E>,
}

impl<E> DataRepository<E>
where
    E: TableEntity + for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    /// Create a repository bound to the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Insert a fully-populated entity.
    ///
    /// Columns and bind order come from the entity's
    /// [`insert_params`](TableEntity::insert_params); every value is bound,
    /// never written into the statement text.
    pub async fn add(&self, entity: &E) -> AppResult<()> {
        let stmt = statement::insert(E::TABLE, entity.insert_params());
        debug!(table = E::TABLE, sql = %stmt.sql, "Executing insert");

        bind_params!(sqlx::query(&stmt.sql), &stmt.params)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to insert into {}", E::TABLE),
                    e,
                )
            })?;

        Ok(())
    }

    /// Fetch a single entity by primary key, or `None` when no row matches.
    pub async fn get_by_id(&self, id: impl Into<SqlValue> + Send) -> AppResult<Option<E>> {
        let stmt = statement::select_by_id(E::TABLE, E::PRIMARY_KEY, id.into());

        bind_params!(sqlx::query_as::<_, E>(&stmt.sql), &stmt.params)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to fetch from {} by id", E::TABLE),
                    e,
                )
            })
    }

    /// Fetch one page of entities matching a filter set.
    ///
    /// Runs two statements: a derived `COUNT(*)` over the same WHERE clause
    /// and bindings, then the page fetch itself. Ordering uses the requested
    /// column when it passes the entity's whitelist, the primary key
    /// otherwise. The offset/fetch window is appended only when the filtered
    /// total exceeds `page_size`; a set that fits in one page comes back
    /// whole regardless of `page_index` (see
    /// [`statement::page_window_required`]).
    pub async fn get_all(
        &self,
        filters: &[QueryFilter],
        order_by: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> AppResult<PagedList<E>> {
        let mut stmt = statement::select_all(E::TABLE, filters);

        let count = statement::count_of(&stmt);
        let total_items = bind_params!(sqlx::query_scalar::<_, i64>(&count.sql), &count.params)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to count rows in {}", E::TABLE),
                    e,
                )
            })?
            .unwrap_or(0)
            .max(0) as u64;

        statement::push_order_by(&mut stmt, order_by, E::ORDER_BY_FIELDS, E::PRIMARY_KEY);

        if statement::page_window_required(total_items, page_size) {
            statement::push_page_window(&mut stmt, page_index, page_size);
        }

        debug!(table = E::TABLE, sql = %stmt.sql, total_items, "Executing page fetch");

        let items = bind_params!(sqlx::query_as::<_, E>(&stmt.sql), &stmt.params)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to fetch page from {}", E::TABLE),
                    e,
                )
            })?;

        Ok(PagedList::new(items, page_index, page_size, total_items))
    }

    /// Update only the columns present in the change set.
    ///
    /// An empty change set is a no-op and does not touch the store.
    pub async fn update(
        &self,
        id: impl Into<SqlValue> + Send,
        changes: &[(String, SqlValue)],
    ) -> AppResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let stmt = statement::update(E::TABLE, E::PRIMARY_KEY, id.into(), changes);
        debug!(table = E::TABLE, sql = %stmt.sql, "Executing update");

        bind_params!(sqlx::query(&stmt.sql), &stmt.params)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to update {}", E::TABLE),
                    e,
                )
            })?;

        Ok(())
    }

    /// Delete by primary key.
    ///
    /// No existence check is made; deleting an absent id affects zero rows
    /// and completes without error.
    pub async fn delete(&self, id: impl Into<SqlValue> + Send) -> AppResult<()> {
        let stmt = statement::delete(E::TABLE, E::PRIMARY_KEY, id.into());

        bind_params!(sqlx::query(&stmt.sql), &stmt.params)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to delete from {}", E::TABLE),
                    e,
                )
            })?;

        Ok(())
    }
}
