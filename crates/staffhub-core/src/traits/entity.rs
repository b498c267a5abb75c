//! Capability trait for table-backed entities.

use crate::types::value::SqlValue;

/// Per-entity metadata consumed by the generic repository.
///
/// Implementations supply the table name, primary-key column, the whitelist
/// of columns valid for `ORDER BY`, and the ordered insert parameters. All
/// three string constants are interpolated directly into statement text and
/// must therefore be trusted, hard-coded values.
///
/// Row-to-entity mapping is supplied separately via `sqlx::FromRow` on the
/// entity type, which the database layer requires alongside this trait.
pub trait TableEntity {
    /// Name of the database table for the entity.
    const TABLE: &'static str;

    /// Name of the primary-key column on the table.
    const PRIMARY_KEY: &'static str;

    /// Columns valid for `ORDER BY`. A requested order column outside this
    /// list falls back to the primary key.
    const ORDER_BY_FIELDS: &'static [&'static str];

    /// Ordered column/value pairs for inserting this entity.
    ///
    /// The returned order defines both the column list and the bind order of
    /// the insert statement, so it must be stable across calls. Columns the
    /// database generates (such as a serial primary key) are omitted.
    fn insert_params(&self) -> Vec<(&'static str, SqlValue)>;
}
