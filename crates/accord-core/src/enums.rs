//! Resource catalogue and sort direction.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Every resource stored in the contract-records schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vendor,
    Status,
    Msa,
    Sow,
    Invoice,
    Milestone,
    Deliverable,
}

impl EntityKind {
    pub const ALL: [Self; 7] = [
        Self::Vendor,
        Self::Status,
        Self::Msa,
        Self::Sow,
        Self::Invoice,
        Self::Milestone,
        Self::Deliverable,
    ];

    /// SQL table backing this resource.
    ///
    /// Uses exhaustive match, so adding a variant forces updating this.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Vendor => "vendors",
            Self::Status => "status",
            Self::Msa => "msas",
            Self::Sow => "sows",
            Self::Invoice => "invoices",
            Self::Milestone => "milestones",
            Self::Deliverable => "deliverables",
        }
    }

    /// URL path segment for this resource. Identical to the table name.
    #[must_use]
    pub const fn route(self) -> &'static str {
        self.table()
    }

    /// Human-readable singular label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Status => "status",
            Self::Msa => "MSA",
            Self::Sow => "SOW",
            Self::Invoice => "invoice",
            Self::Milestone => "milestone",
            Self::Deliverable => "deliverable",
        }
    }

    /// Indefinite article matching how the label is spoken ("an MSA", "a SOW").
    #[must_use]
    pub const fn article(self) -> &'static str {
        match self {
            Self::Msa | Self::Invoice => "An",
            Self::Vendor | Self::Status | Self::Sow | Self::Milestone | Self::Deliverable => "A",
        }
    }

    /// Message reported when a lookup by id finds nothing.
    #[must_use]
    pub fn not_found_message(self, id: i64) -> String {
        format!(
            "{} {} with an id of {id} was not found.",
            self.article(),
            self.label()
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    /// Accepts route segments (`msas`) as well as singular snake-case names (`msa`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.route() == needle
                    || serde_json::to_value(kind)
                        .ok()
                        .and_then(|v| v.as_str().map(|name| name == needle))
                        .unwrap_or(false)
            })
            .ok_or_else(|| CoreError::UnknownResource(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only `desc` (any case) sorts descending; everything else is ascending.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
