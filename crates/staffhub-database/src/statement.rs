//! Dynamic SQL statement construction.
//!
//! Every builder returns a [`SqlStatement`]: the statement text with `$n`
//! positional placeholders plus the values to bind, in placeholder order.
//! Values are never written into the text. Column and table names *are*
//! interpolated, so they must only ever come from trusted metadata — the
//! [`TableEntity`](staffhub_core::traits::TableEntity) constants, the order
//! whitelist, or filter fields restricted by the caller to trusted values.

use staffhub_core::types::{QueryFilter, SqlValue};

/// A statement's text and its parameter values in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    /// Statement text with `$n` placeholders.
    pub sql: String,
    /// Values to bind, ordered to match the placeholders.
    pub params: Vec<SqlValue>,
}

/// Build an insert for the given ordered column/value pairs.
///
/// The pair order defines both the column list and the bind order.
pub fn insert(table: &str, params: Vec<(&'static str, SqlValue)>) -> SqlStatement {
    let columns: Vec<&str> = params.iter().map(|(column, _)| *column).collect();
    let placeholders: Vec<String> = (1..=params.len()).map(|n| format!("${n}")).collect();

    SqlStatement {
        sql: format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        ),
        params: params.into_iter().map(|(_, value)| value).collect(),
    }
}

/// Build a primary-key lookup.
pub fn select_by_id(table: &str, primary_key: &str, id: SqlValue) -> SqlStatement {
    SqlStatement {
        sql: format!("SELECT * FROM {table} WHERE {primary_key} = $1"),
        params: vec![id],
    }
}

/// Build the base select with an optional WHERE clause from a filter set.
///
/// Filters chain left-to-right into a left-associative boolean expression:
/// each filter after the first is prefixed with its own logic token. There is
/// no parenthesization. Filter values are bound; a `Null` value binds SQL
/// NULL. The operator token is passed through untouched (`LIKE` included),
/// so an unrecognized token produces a store-side syntax failure.
pub fn select_all(table: &str, filters: &[QueryFilter]) -> SqlStatement {
    let mut sql = format!("SELECT * FROM {table}");
    let mut params = Vec::with_capacity(filters.len());

    if !filters.is_empty() {
        let mut clauses = Vec::with_capacity(filters.len());
        for filter in filters {
            params.push(filter.value.clone());
            let clause = format!("{} {} ${}", filter.field, filter.operator, params.len());
            if clauses.is_empty() {
                clauses.push(clause);
            } else {
                clauses.push(format!("{} {}", filter.logic.as_sql(), clause));
            }
        }
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" "));
    }

    SqlStatement { sql, params }
}

/// Derive the total-count statement from a select.
///
/// Swaps the `SELECT *` projection for `SELECT COUNT(*)` on the same WHERE
/// text, reusing the same parameter bindings.
pub fn count_of(select: &SqlStatement) -> SqlStatement {
    SqlStatement {
        sql: select.sql.replacen("SELECT * ", "SELECT COUNT(*) ", 1),
        params: select.params.clone(),
    }
}

/// Append an ORDER BY clause.
///
/// Orders by the requested column only when it is non-empty and a member of
/// the whitelist; otherwise falls back to the primary key. The chosen column
/// comes from trusted metadata either way, so it is safe to interpolate.
pub fn push_order_by(
    statement: &mut SqlStatement,
    requested: Option<&str>,
    whitelist: &[&str],
    primary_key: &str,
) {
    let column = requested
        .filter(|column| !column.is_empty() && whitelist.contains(column))
        .unwrap_or(primary_key);
    statement.sql.push_str(&format!(" ORDER BY {column}"));
}

/// Whether the pagination window should be appended at all.
///
/// The window is skipped when the filtered set fits within a single page, in
/// which case the full set is returned regardless of the requested page
/// index. Known quirk, preserved for compatibility: page index 1 of a
/// 3-row result with page size 5 returns all 3 rows, not an empty page.
pub fn page_window_required(total_items: u64, page_size: u32) -> bool {
    total_items > page_size as u64
}

/// Append the offset/fetch window, binding both values as parameters.
pub fn push_page_window(statement: &mut SqlStatement, page_index: u32, page_size: u32) {
    statement.params.push(SqlValue::Integer(page_size as i64));
    let limit = statement.params.len();
    statement
        .params
        .push(SqlValue::Integer(page_index as i64 * page_size as i64));
    let offset = statement.params.len();
    statement.sql.push_str(&format!(" LIMIT ${limit} OFFSET ${offset}"));
}

/// Build an update touching only the supplied columns.
///
/// Callers are expected to skip the statement entirely for an empty change
/// set; this builder assumes at least one change.
pub fn update(
    table: &str,
    primary_key: &str,
    id: SqlValue,
    changes: &[(String, SqlValue)],
) -> SqlStatement {
    let assignments: Vec<String> = changes
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{column} = ${}", i + 1))
        .collect();

    let mut params: Vec<SqlValue> = changes.iter().map(|(_, value)| value.clone()).collect();
    params.push(id);

    SqlStatement {
        sql: format!(
            "UPDATE {table} SET {} WHERE {primary_key} = ${}",
            assignments.join(", "),
            params.len()
        ),
        params,
    }
}

/// Build a delete by primary key.
pub fn delete(table: &str, primary_key: &str, id: SqlValue) -> SqlStatement {
    SqlStatement {
        sql: format!("DELETE FROM {table} WHERE {primary_key} = $1"),
        params: vec![id],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffhub_core::types::FilterLogic;

    #[test]
    fn test_insert_uses_param_order() {
        let statement = insert(
            "employees",
            vec![
                ("name", SqlValue::Text("Ada".to_string())),
                ("job_title", SqlValue::Text("Engineer".to_string())),
            ],
        );
        assert_eq!(
            statement.sql,
            "INSERT INTO employees (name, job_title) VALUES ($1, $2)"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::Text("Ada".to_string()),
                SqlValue::Text("Engineer".to_string()),
            ]
        );
    }

    #[test]
    fn test_select_by_id() {
        let statement = select_by_id("employees", "id", SqlValue::Integer(7));
        assert_eq!(statement.sql, "SELECT * FROM employees WHERE id = $1");
        assert_eq!(statement.params, vec![SqlValue::Integer(7)]);
    }

    #[test]
    fn test_select_all_without_filters_has_no_where() {
        let statement = select_all("employees", &[]);
        assert_eq!(statement.sql, "SELECT * FROM employees");
        assert!(statement.params.is_empty());
    }

    #[test]
    fn test_filters_chain_left_to_right_with_own_logic() {
        let filters = vec![
            QueryFilter::like("name", "%a%"),
            QueryFilter::like("job_title", "%b%").logic(FilterLogic::Or),
        ];
        let statement = select_all("employees", &filters);
        assert_eq!(
            statement.sql,
            "SELECT * FROM employees WHERE name LIKE $1 OR job_title LIKE $2"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::Text("%a%".to_string()),
                SqlValue::Text("%b%".to_string()),
            ]
        );
    }

    #[test]
    fn test_first_filter_logic_is_ignored() {
        let filters = vec![QueryFilter::new("name", "Ada").logic(FilterLogic::Or)];
        let statement = select_all("employees", &filters);
        assert_eq!(statement.sql, "SELECT * FROM employees WHERE name = $1");
    }

    #[test]
    fn test_null_filter_value_is_bound() {
        let filters = vec![QueryFilter::new("job_title", SqlValue::Null)];
        let statement = select_all("employees", &filters);
        assert_eq!(statement.sql, "SELECT * FROM employees WHERE job_title = $1");
        assert_eq!(statement.params, vec![SqlValue::Null]);
    }

    #[test]
    fn test_count_derived_from_same_where_clause() {
        let filters = vec![QueryFilter::like("name", "%a%")];
        let select = select_all("employees", &filters);
        let count = count_of(&select);
        assert_eq!(
            count.sql,
            "SELECT COUNT(*) FROM employees WHERE name LIKE $1"
        );
        assert_eq!(count.params, select.params);
    }

    #[test]
    fn test_order_by_whitelisted_column() {
        let mut statement = select_all("employees", &[]);
        push_order_by(&mut statement, Some("name"), &["id", "name"], "id");
        assert_eq!(statement.sql, "SELECT * FROM employees ORDER BY name");
    }

    #[test]
    fn test_order_by_falls_back_to_primary_key() {
        let mut statement = select_all("employees", &[]);
        push_order_by(
            &mut statement,
            Some("salary; DROP TABLE employees"),
            &["id", "name"],
            "id",
        );
        assert_eq!(statement.sql, "SELECT * FROM employees ORDER BY id");

        let mut statement = select_all("employees", &[]);
        push_order_by(&mut statement, Some(""), &["id", "name"], "id");
        assert_eq!(statement.sql, "SELECT * FROM employees ORDER BY id");

        let mut statement = select_all("employees", &[]);
        push_order_by(&mut statement, None, &["id", "name"], "id");
        assert_eq!(statement.sql, "SELECT * FROM employees ORDER BY id");
    }

    #[test]
    fn test_page_window_only_when_total_exceeds_page_size() {
        assert!(page_window_required(7, 5));
        assert!(!page_window_required(3, 5));
        assert!(!page_window_required(5, 5));
    }

    #[test]
    fn test_page_window_binds_limit_and_offset() {
        let mut statement = select_all("employees", &[]);
        push_order_by(&mut statement, None, &["id"], "id");
        push_page_window(&mut statement, 1, 5);
        assert_eq!(
            statement.sql,
            "SELECT * FROM employees ORDER BY id LIMIT $1 OFFSET $2"
        );
        assert_eq!(
            statement.params,
            vec![SqlValue::Integer(5), SqlValue::Integer(5)]
        );
    }

    #[test]
    fn test_page_window_placeholders_continue_after_filters() {
        let filters = vec![QueryFilter::like("name", "%a%")];
        let mut statement = select_all("employees", &filters);
        push_order_by(&mut statement, None, &["id"], "id");
        push_page_window(&mut statement, 2, 10);
        assert_eq!(
            statement.sql,
            "SELECT * FROM employees WHERE name LIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::Text("%a%".to_string()),
                SqlValue::Integer(10),
                SqlValue::Integer(20),
            ]
        );
    }

    #[test]
    fn test_update_touches_only_supplied_columns() {
        let changes = vec![
            ("name".to_string(), SqlValue::Text("Ada".to_string())),
            ("job_title".to_string(), SqlValue::Text("CTO".to_string())),
        ];
        let statement = update("employees", "id", SqlValue::Integer(3), &changes);
        assert_eq!(
            statement.sql,
            "UPDATE employees SET name = $1, job_title = $2 WHERE id = $3"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::Text("Ada".to_string()),
                SqlValue::Text("CTO".to_string()),
                SqlValue::Integer(3),
            ]
        );
    }

    #[test]
    fn test_delete_by_primary_key() {
        let statement = delete("employees", "id", SqlValue::Integer(9));
        assert_eq!(statement.sql, "DELETE FROM employees WHERE id = $1");
        assert_eq!(statement.params, vec![SqlValue::Integer(9)]);
    }

    // Filter field names are interpolated into the statement text. The
    // whitelist protects ORDER BY, but filter fields have no such check:
    // callers own the restriction of field names to trusted values, and a
    // hostile field string lands in the SQL verbatim while the value stays
    // safely bound.
    #[test]
    fn test_filter_field_names_are_an_injection_surface() {
        let filters = vec![QueryFilter::new("name = name; --", "ignored")];
        let statement = select_all("employees", &filters);
        assert_eq!(
            statement.sql,
            "SELECT * FROM employees WHERE name = name; -- = $1"
        );
        assert_eq!(statement.params, vec![SqlValue::Text("ignored".to_string())]);
    }
}
