//! Filter types for dynamic query building.

use serde::{Deserialize, Serialize};

use super::value::SqlValue;

/// Boolean combinator applied when chaining a filter after a previous one.
///
/// Filters in a filter set combine left-to-right in insertion order into a
/// left-associative boolean expression; the logic token of the first filter
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterLogic {
    /// SQL `AND`.
    And,
    /// SQL `OR`.
    Or,
}

impl Default for FilterLogic {
    fn default() -> Self {
        Self::And
    }
}

impl FilterLogic {
    /// Return the SQL keyword for this combinator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// A single predicate on a named column.
///
/// The `operator` token is free-form and deliberately not validated; an
/// unrecognized token reaches the store as-is and surfaces as a statement
/// syntax failure. The `field` name is interpolated into statement text by
/// the builder, so callers must only ever supply trusted column names —
/// never end-user-controlled strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFilter {
    /// The column name to filter on.
    pub field: String,
    /// The value to compare against; bound as a statement parameter.
    pub value: SqlValue,
    /// The comparison operator token (`=`, `LIKE`, `<>`, ...).
    pub operator: String,
    /// How this filter chains onto the previous one.
    pub logic: FilterLogic,
}

impl QueryFilter {
    /// Create an equality filter chained with `AND`.
    pub fn new(field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator: "=".to_string(),
            logic: FilterLogic::And,
        }
    }

    /// Shorthand for a `LIKE` filter; the caller supplies any wildcards.
    pub fn like(field: impl Into<String>, pattern: impl Into<SqlValue>) -> Self {
        Self::new(field, pattern).operator("LIKE")
    }

    /// Replace the comparison operator token.
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Replace the chaining combinator.
    pub fn logic(mut self, logic: FilterLogic) -> Self {
        self.logic = logic;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_equality_and() {
        let filter = QueryFilter::new("name", "alice");
        assert_eq!(filter.operator, "=");
        assert_eq!(filter.logic, FilterLogic::And);
        assert_eq!(filter.value, SqlValue::Text("alice".to_string()));
    }

    #[test]
    fn test_like_shorthand() {
        let filter = QueryFilter::like("job_title", "%engineer%").logic(FilterLogic::Or);
        assert_eq!(filter.operator, "LIKE");
        assert_eq!(filter.logic, FilterLogic::Or);
    }

    #[test]
    fn test_operator_is_not_validated() {
        // Pass-through by design: a bogus token becomes a store-side
        // syntax error rather than being rejected here.
        let filter = QueryFilter::new("name", "x").operator("NOT-AN-OPERATOR");
        assert_eq!(filter.operator, "NOT-AN-OPERATOR");
    }
}
