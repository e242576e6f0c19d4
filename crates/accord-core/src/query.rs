//! List query model shared by the API, the data layer, and the client.
//!
//! A `ListQuery` is what arrives on the query string of every list route:
//! `?skip=0&limit=10&sortby=title:desc&search=acme`. `sortBy` is accepted as an
//! alias of `sortby` because the front-end sends the camel-case spelling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SortDirection;

/// Pagination, ordering and search parameters for a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListQuery {
    /// Number of matching rows to skip.
    #[serde(default)]
    pub skip: u32,

    /// Page size. `None` means the server's configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Sort expression in `column:direction` form.
    #[serde(default, alias = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sortby: Option<String>,

    /// Case-insensitive substring matched against the resource's text columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sortby: impl Into<String>) -> Self {
        self.sortby = Some(sortby.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Resolve the page size: the requested limit (or `default`), capped at `max`.
    #[must_use]
    pub fn effective_limit(&self, default: u32, max: u32) -> u32 {
        self.limit.unwrap_or(default).min(max)
    }

    /// The parsed sort expression, if it is well-formed.
    #[must_use]
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sortby.as_deref().and_then(SortSpec::parse)
    }

    /// The trimmed search term. Blank searches count as no search.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// A parsed `column:direction` sort expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse `column:direction`.
    ///
    /// Returns `None` unless the input has exactly one `:` and a non-blank
    /// column; malformed expressions fall back to the default ordering.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(column), Some(direction), None) if !column.trim().is_empty() => Some(Self {
                column: column.trim().to_string(),
                direction: SortDirection::parse_lenient(direction),
            }),
            _ => None,
        }
    }
}
