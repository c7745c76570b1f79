//! List filter and pagination types.
//!
//! [`ListFilter`] carries the validated list parameters to the storage layer.
//! The sort column is an enum, so only allow-listed columns can ever reach
//! the ORDER BY clause.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Columns a doctor listing may be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Specialty,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortColumn {
    /// All sortable columns.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Specialty,
        SortColumn::CreatedAt,
        SortColumn::UpdatedAt,
    ];

    /// Returns the SQL column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Specialty => "specialty",
            SortColumn::CreatedAt => "created_at",
            SortColumn::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| format!("unknown sort column: {}", s))
    }
}

/// Sort direction for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// Validated parameters for listing doctors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    /// 1-based page number.
    pub page: u64,
    /// Rows per page.
    pub page_size: u32,
    /// Free-text substring matched against name and email.
    pub query: Option<String>,
    /// Exact specialty match.
    pub specialty: Option<String>,
    /// Sort column.
    pub sort_by: SortColumn,
    /// Sort direction.
    pub sort_dir: SortDirection,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            query: None,
            specialty: None,
            sort_by: SortColumn::default(),
            sort_dir: SortDirection::default(),
        }
    }
}

impl ListFilter {
    /// Creates a filter for the given page with default sorting.
    pub fn new(page: u64, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    /// Sets the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the specialty filter.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Sets the sort column and direction.
    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_by = column;
        self.sort_dir = direction;
        self
    }

    /// Returns the number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(u64::from(self.page_size))
    }

    /// Returns the maximum number of rows to return.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// A page of rows plus the total number of rows matching the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The rows on this page.
    pub items: Vec<T>,
    /// Rows matching the filter, ignoring pagination.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Returns true if the page has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
