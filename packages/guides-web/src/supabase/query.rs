//! PostgREST select query builder
//!
//! Mirrors the subset of the supabase-js query chain the directory needs:
//! `from(table).select("*").eq(column, value).order(column, { ascending })`.

/// A read against a single PostgREST table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl SelectQuery {
    /// Select every column of `table`
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Keep rows where `column` equals `value`
    pub fn eq(mut self, column: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Sort by `column`. Replaces any earlier ordering.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{column}.{direction}"));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query-string pairs, `select` first and `order` last.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        params.push(("select".to_string(), self.columns.clone()));
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        params
    }
}
