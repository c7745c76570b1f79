//! SQL query builder for doctor listings and partial updates.
//!
//! Translates a [`ListFilter`] into a parameterized WHERE clause, an ORDER BY
//! clause drawn only from [`SortColumn`], and a LIMIT/OFFSET pair. User input
//! only ever reaches the database as bound parameters.

use chrono::{DateTime, Utc};

use crate::types::{DoctorChanges, ListFilter};

/// Name of the doctors table.
pub const DOCTORS_TABLE: &str = "doctors";

/// Column list selected for every doctor read.
pub const DOCTOR_COLUMNS: &str =
    "id, name, specialty, email, phone, is_active, created_at, updated_at";

/// SQL dialect differences between backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `?N` placeholders, ASCII case-insensitive `LIKE`.
    Sqlite,
    /// `$N` placeholders, `ILIKE`.
    Postgres,
}

impl Dialect {
    /// Returns the placeholder for the 1-based parameter index.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Sqlite => format!("?{}", index),
            Dialect::Postgres => format!("${}", index),
        }
    }

    /// Returns the case-insensitive pattern match operator.
    pub fn like_operator(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "LIKE",
            Dialect::Postgres => "ILIKE",
        }
    }

    /// Returns the scalar function picking the larger of two values.
    pub fn greatest_function(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "MAX",
            Dialect::Postgres => "GREATEST",
        }
    }
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Text parameter.
    Text(String),
    /// Integer parameter.
    Integer(i64),
    /// Boolean parameter.
    Bool(bool),
    /// Timestamp parameter.
    Timestamp(DateTime<Utc>),
}

impl SqlParam {
    /// Creates a text parameter.
    pub fn text(s: impl Into<String>) -> Self {
        SqlParam::Text(s.into())
    }
}

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    /// The SQL clause.
    pub sql: String,
    /// Bound parameter values, in placeholder order.
    pub params: Vec<SqlParam>,
}

impl SqlFragment {
    /// Creates a fragment without parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Returns true if this fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// The pieces of a list request, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    dialect: Dialect,
    /// ` WHERE ...` including the leading space, or empty.
    pub where_clause: SqlFragment,
    /// ` ORDER BY ...` including the leading space.
    pub order_by: String,
    /// Maximum number of rows.
    pub limit: i64,
    /// Number of rows to skip.
    pub offset: i64,
}

impl ListQuery {
    /// Builds the count query. It shares the filter parameters of the page query.
    pub fn count_sql(&self) -> String {
        format!(
            "SELECT COUNT(*) FROM {}{}",
            DOCTORS_TABLE, self.where_clause.sql
        )
    }

    /// Returns the parameters for [`ListQuery::count_sql`].
    pub fn count_params(&self) -> &[SqlParam] {
        &self.where_clause.params
    }

    /// Builds the page query together with its full parameter list.
    pub fn page_query(&self) -> SqlFragment {
        let mut params = self.where_clause.params.clone();
        params.push(SqlParam::Integer(self.limit));
        let limit = self.dialect.placeholder(params.len());
        params.push(SqlParam::Integer(self.offset));
        let offset = self.dialect.placeholder(params.len());

        SqlFragment {
            sql: format!(
                "SELECT {} FROM {}{}{} LIMIT {} OFFSET {}",
                DOCTOR_COLUMNS, DOCTORS_TABLE, self.where_clause.sql, self.order_by, limit, offset
            ),
            params,
        }
    }
}

/// Builds parameterized SQL for a given dialect.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    dialect: Dialect,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Builds the list query for a filter.
    pub fn build_list(&self, filter: &ListFilter) -> ListQuery {
        ListQuery {
            dialect: self.dialect,
            where_clause: self.build_where(filter),
            order_by: self.build_order_by(filter),
            limit: i64::try_from(filter.limit()).unwrap_or(i64::MAX),
            offset: i64::try_from(filter.offset()).unwrap_or(i64::MAX),
        }
    }

    /// Builds the WHERE clause. Absent or blank filters add no condition.
    pub fn build_where(&self, filter: &ListFilter) -> SqlFragment {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(q) = filter.query.as_deref().filter(|q| !q.is_empty()) {
            params.push(SqlParam::Text(format!("%{}%", escape_like(q))));
            let p = self.dialect.placeholder(params.len());
            let op = self.dialect.like_operator();
            conditions.push(format!(
                "(name {op} {p} ESCAPE '\\' OR email {op} {p} ESCAPE '\\')"
            ));
        }

        if let Some(specialty) = filter.specialty.as_deref().filter(|s| !s.is_empty()) {
            params.push(SqlParam::text(specialty));
            conditions.push(format!(
                "specialty = {}",
                self.dialect.placeholder(params.len())
            ));
        }

        if conditions.is_empty() {
            return SqlFragment::default();
        }

        SqlFragment {
            sql: format!(" WHERE {}", conditions.join(" AND ")),
            params,
        }
    }

    /// Builds the ORDER BY clause from the allow-listed sort column.
    ///
    /// `id` breaks ties in the same direction so paging is stable.
    pub fn build_order_by(&self, filter: &ListFilter) -> String {
        let dir = filter.sort_dir.as_sql();
        format!(" ORDER BY {} {}, id {}", filter.sort_by.as_str(), dir, dir)
    }

    /// Builds the UPDATE statement for a partial update.
    ///
    /// Returns `None` when `changes` is empty. `updated_at` never moves
    /// backwards, even if the clock does.
    pub fn build_update(
        &self,
        id: i64,
        changes: &DoctorChanges,
        now: DateTime<Utc>,
    ) -> Option<SqlFragment> {
        if changes.is_empty() {
            return None;
        }

        let mut sets = Vec::new();
        let mut params = Vec::new();

        let text_fields = [
            ("name", &changes.name),
            ("specialty", &changes.specialty),
            ("email", &changes.email),
            ("phone", &changes.phone),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value {
                params.push(SqlParam::text(value.as_str()));
                sets.push(format!(
                    "{} = {}",
                    column,
                    self.dialect.placeholder(params.len())
                ));
            }
        }
        if let Some(active) = changes.is_active {
            params.push(SqlParam::Bool(active));
            sets.push(format!(
                "is_active = {}",
                self.dialect.placeholder(params.len())
            ));
        }

        params.push(SqlParam::Timestamp(now));
        sets.push(format!(
            "updated_at = {}({}, updated_at)",
            self.dialect.greatest_function(),
            self.dialect.placeholder(params.len())
        ));

        params.push(SqlParam::Integer(id));
        let id_placeholder = self.dialect.placeholder(params.len());

        Some(SqlFragment {
            sql: format!(
                "UPDATE {} SET {} WHERE id = {}",
                DOCTORS_TABLE,
                sets.join(", "),
                id_placeholder
            ),
            params,
        })
    }
}

/// Escapes LIKE wildcards so the value matches literally.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
