//! DoctorStorage implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::ToSqlOutput;
use rusqlite::{Connection, OptionalExtension, ToSql, params, params_from_iter};

use crate::core::DoctorStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::query::{DOCTOR_COLUMNS, DOCTORS_TABLE, Dialect, QueryBuilder, SqlParam};
use crate::types::{Doctor, DoctorChanges, ListFilter, NewDoctor, Page};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

/// Formats a timestamp the way it is stored: UTC, microseconds, `Z` suffix.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: &str, value: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| serialization_error(format!("Failed to parse {}: {}", column, e)))
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Text(s) => s.to_sql(),
            SqlParam::Integer(i) => i.to_sql(),
            SqlParam::Bool(b) => b.to_sql(),
            SqlParam::Timestamp(ts) => Ok(ToSqlOutput::from(format_timestamp(ts))),
        }
    }
}

/// Raw column values, decoded into a [`Doctor`] outside the row callback.
struct DoctorRow {
    id: i64,
    name: String,
    specialty: String,
    email: String,
    phone: String,
    is_active: bool,
    created_at: String,
    updated_at: String,
}

impl DoctorRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            specialty: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
            is_active: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn into_doctor(self) -> StorageResult<Doctor> {
        Ok(Doctor {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            email: self.email,
            phone: self.phone,
            is_active: self.is_active,
            created_at: parse_timestamp("created_at", &self.created_at)?,
            updated_at: parse_timestamp("updated_at", &self.updated_at)?,
        })
    }
}

fn read_doctor(conn: &Connection, id: i64) -> StorageResult<Option<Doctor>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ?1",
        DOCTOR_COLUMNS, DOCTORS_TABLE
    );
    let row = conn
        .query_row(&sql, params![id], DoctorRow::from_row)
        .optional()
        .map_err(|e| internal_error(format!("Failed to read doctor: {}", e)))?;

    row.map(DoctorRow::into_doctor).transpose()
}

fn not_found(id: i64) -> StorageError {
    StorageError::Resource(ResourceError::NotFound { id: id.to_string() })
}

#[async_trait]
impl DoctorStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self, filter: &ListFilter) -> StorageResult<Page<Doctor>> {
        let query = QueryBuilder::new(Dialect::Sqlite).build_list(filter);

        self.with_connection(move |conn| {
            let total: i64 = conn
                .query_row(
                    &query.count_sql(),
                    params_from_iter(query.count_params()),
                    |row| row.get(0),
                )
                .map_err(|e| internal_error(format!("Failed to count doctors: {}", e)))?;

            let page = query.page_query();
            let mut stmt = conn
                .prepare(&page.sql)
                .map_err(|e| internal_error(format!("Failed to prepare list query: {}", e)))?;
            let rows = stmt
                .query_map(params_from_iter(page.params.iter()), DoctorRow::from_row)
                .map_err(|e| internal_error(format!("Failed to list doctors: {}", e)))?;

            let mut items = Vec::new();
            for row in rows {
                let row = row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?;
                items.push(row.into_doctor()?);
            }

            Ok(Page::new(items, u64::try_from(total).unwrap_or_default()))
        })
        .await
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Doctor>> {
        self.with_connection(move |conn| read_doctor(conn, id))
            .await
    }

    async fn create(&self, doctor: NewDoctor) -> StorageResult<Doctor> {
        self.with_connection(move |conn| {
            let now = format_timestamp(&Utc::now());

            // Unique violations convert to DuplicateEmail through `From`
            conn.execute(
                "INSERT INTO doctors (name, specialty, email, phone, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    doctor.name,
                    doctor.specialty,
                    doctor.email,
                    doctor.phone,
                    doctor.is_active(),
                    now
                ],
            )?;

            let id = conn.last_insert_rowid();
            tracing::debug!(id, "Inserted doctor");

            read_doctor(conn, id)?
                .ok_or_else(|| internal_error(format!("Inserted doctor {} not readable", id)))
        })
        .await
    }

    async fn update(&self, id: i64, changes: DoctorChanges) -> StorageResult<Doctor> {
        let statement = QueryBuilder::new(Dialect::Sqlite).build_update(id, &changes, Utc::now());

        self.with_connection(move |conn| {
            let Some(statement) = statement else {
                return read_doctor(conn, id)?.ok_or_else(|| not_found(id));
            };

            let affected = conn
                .execute(&statement.sql, params_from_iter(statement.params.iter()))?;
            if affected == 0 {
                return Err(not_found(id));
            }

            tracing::debug!(id, fields = changes.field_count(), "Updated doctor");

            read_doctor(conn, id)?.ok_or_else(|| not_found(id))
        })
        .await
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        self.with_connection(move |conn| {
            let affected = conn
                .execute("DELETE FROM doctors WHERE id = ?1", params![id])
                .map_err(|e| internal_error(format!("Failed to delete doctor: {}", e)))?;

            if affected == 0 {
                return Err(not_found(id));
            }

            tracing::debug!(id, "Deleted doctor");
            Ok(())
        })
        .await
    }

    async fn ping(&self) -> StorageResult<()> {
        self.with_connection(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))
                .map_err(|e| internal_error(format!("Ping failed: {}", e)))
        })
        .await
    }
}
