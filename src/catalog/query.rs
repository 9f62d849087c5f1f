//! ServiceNow encoded query construction

use std::fmt;

/// An encoded query (`sysparm_query`), clauses joined by `^`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedQuery {
    clauses: Vec<String>,
}

impl EncodedQuery {
    /// Empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `field=value`
    #[must_use]
    pub fn eq(mut self, field: &str, value: &str) -> Self {
        self.clauses.push(format!("{field}={value}"));
        self
    }

    /// Add `field=value` when `value` is present and non-empty
    #[must_use]
    pub fn eq_opt(self, field: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    /// Add `aLIKEterm^ORbLIKEterm...` when `term` is present and non-empty
    #[must_use]
    pub fn like_any(mut self, fields: &[&str], term: Option<&str>) -> Self {
        if let Some(term) = term.filter(|t| !t.is_empty()) {
            let clause = fields
                .iter()
                .map(|f| format!("{f}LIKE{term}"))
                .collect::<Vec<_>>()
                .join("^OR");
            if !clause.is_empty() {
                self.clauses.push(clause);
            }
        }
        self
    }

    /// Whether no clause was added
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Encoded form, or `None` when there is nothing to filter on
    pub fn build(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl fmt::Display for EncodedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses.join("^"))
    }
}

/// Query parameters shared by the paged Table API listings
pub fn page_params(limit: u32, offset: u32, query: &EncodedQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sysparm_limit", limit.to_string()),
        ("sysparm_offset", offset.to_string()),
        ("sysparm_display_value", "true".to_string()),
        ("sysparm_exclude_reference_link", "true".to_string()),
    ];
    if let Some(q) = query.build() {
        params.push(("sysparm_query", q));
    }
    params
}
