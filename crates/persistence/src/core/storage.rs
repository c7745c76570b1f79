//! Doctor storage trait.
//!
//! This module defines the [`DoctorStorage`] trait, which provides the CRUD
//! and listing operations over the doctors table.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Doctor, DoctorChanges, ListFilter, NewDoctor, Page};

/// Storage operations for doctors.
///
/// Create and update re-read the row after writing, so the returned
/// [`Doctor`] always carries database-computed values (`id`, timestamps).
///
/// # Example
///
/// ```ignore
/// use clinic_persistence::core::DoctorStorage;
/// use clinic_persistence::types::{ListFilter, NewDoctor};
///
/// async fn example<S: DoctorStorage>(storage: &S) -> StorageResult<()> {
///     let created = storage
///         .create(NewDoctor {
///             name: "Ada Lovelace".into(),
///             specialty: "Cardiology".into(),
///             email: "ada@example.com".into(),
///             phone: "555-0100".into(),
///             is_active: None,
///         })
///         .await?;
///
///     let page = storage.list(&ListFilter::default()).await?;
///     assert_eq!(page.total, 1);
///
///     storage.delete(created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DoctorStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns one page of doctors plus the total matching the filter.
    ///
    /// A page past the end yields no rows; it is not an error.
    async fn list(&self, filter: &ListFilter) -> StorageResult<Page<Doctor>>;

    /// Reads a doctor by id.
    async fn read(&self, id: i64) -> StorageResult<Option<Doctor>>;

    /// Inserts a doctor and returns the stored row.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(DuplicateEmail)` - If the email is taken
    async fn create(&self, doctor: NewDoctor) -> StorageResult<Doctor>;

    /// Applies a partial update and returns the stored row.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no row has this id
    /// * `StorageError::Resource(DuplicateEmail)` - If the new email is taken
    async fn update(&self, id: i64, changes: DoctorChanges) -> StorageResult<Doctor>;

    /// Hard-deletes a doctor.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no row has this id
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Checks whether the underlying database answers queries.
    async fn ping(&self) -> StorageResult<()>;
}
