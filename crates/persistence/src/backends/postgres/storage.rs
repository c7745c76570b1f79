//! DoctorStorage implementation for PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

use crate::core::DoctorStorage;
use crate::error::{ResourceError, StorageError, StorageResult};
use crate::query::{DOCTOR_COLUMNS, DOCTORS_TABLE, Dialect, QueryBuilder, SqlParam};
use crate::types::{Doctor, DoctorChanges, ListFilter, NewDoctor, Page};

use super::PostgresBackend;

/// Borrows bound parameters in the form tokio-postgres expects.
fn pg_params(params: &[SqlParam]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|param| match param {
            SqlParam::Text(s) => s as &(dyn ToSql + Sync),
            SqlParam::Integer(i) => i as &(dyn ToSql + Sync),
            SqlParam::Bool(b) => b as &(dyn ToSql + Sync),
            SqlParam::Timestamp(ts) => ts as &(dyn ToSql + Sync),
        })
        .collect()
}

fn row_to_doctor(row: &Row) -> StorageResult<Doctor> {
    Ok(Doctor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        specialty: row.try_get("specialty")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn not_found(id: i64) -> StorageError {
    StorageError::Resource(ResourceError::NotFound { id: id.to_string() })
}

#[async_trait]
impl DoctorStorage for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, filter: &ListFilter) -> StorageResult<Page<Doctor>> {
        let query = QueryBuilder::new(Dialect::Postgres).build_list(filter);
        let client = self.get_client().await?;

        let total: i64 = client
            .query_one(&query.count_sql(), &pg_params(query.count_params()))
            .await?
            .try_get(0)?;

        let page = query.page_query();
        let rows = client.query(&page.sql, &pg_params(&page.params)).await?;
        let items = rows
            .iter()
            .map(row_to_doctor)
            .collect::<StorageResult<Vec<_>>>()?;

        Ok(Page::new(items, u64::try_from(total).unwrap_or_default()))
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Doctor>> {
        let client = self.get_client().await?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            DOCTOR_COLUMNS, DOCTORS_TABLE
        );

        client
            .query_opt(&sql, &[&id])
            .await?
            .as_ref()
            .map(row_to_doctor)
            .transpose()
    }

    async fn create(&self, doctor: NewDoctor) -> StorageResult<Doctor> {
        let client = self.get_client().await?;
        let now = Utc::now();
        let is_active = doctor.is_active();
        let sql = format!(
            "INSERT INTO {} (name, specialty, email, phone, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {}",
            DOCTORS_TABLE, DOCTOR_COLUMNS
        );

        let row = client
            .query_one(
                &sql,
                &[
                    &doctor.name,
                    &doctor.specialty,
                    &doctor.email,
                    &doctor.phone,
                    &is_active,
                    &now,
                ],
            )
            .await?;

        let created = row_to_doctor(&row)?;
        tracing::debug!(id = created.id, "Inserted doctor");
        Ok(created)
    }

    async fn update(&self, id: i64, changes: DoctorChanges) -> StorageResult<Doctor> {
        let Some(statement) =
            QueryBuilder::new(Dialect::Postgres).build_update(id, &changes, Utc::now())
        else {
            return self.read(id).await?.ok_or_else(|| not_found(id));
        };

        let client = self.get_client().await?;
        let sql = format!("{} RETURNING {}", statement.sql, DOCTOR_COLUMNS);
        let row = client
            .query_opt(&sql, &pg_params(&statement.params))
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::debug!(id, fields = changes.field_count(), "Updated doctor");
        row_to_doctor(&row)
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let client = self.get_client().await?;
        let affected = client
            .execute("DELETE FROM doctors WHERE id = $1", &[&id])
            .await?;

        if affected == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "Deleted doctor");
        Ok(())
    }

    async fn ping(&self) -> StorageResult<()> {
        let client = self.get_client().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}
