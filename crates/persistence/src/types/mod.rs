//! Core types for the persistence layer.
//!
//! - [`Doctor`] - A stored doctor row with database-assigned metadata
//! - [`NewDoctor`], [`DoctorChanges`] - Validated create and partial-update payloads
//! - [`ListFilter`], [`SortColumn`], [`SortDirection`] - Typed list parameters
//! - [`Page`] - A page of rows together with the unpaged total
//!
//! # Example
//!
//! ```
//! use clinic_persistence::types::{ListFilter, SortColumn, SortDirection};
//!
//! let filter = ListFilter::new(2, 25)
//!     .with_query("smith")
//!     .with_sort(SortColumn::Name, SortDirection::Asc);
//!
//! assert_eq!(filter.offset(), 25);
//! assert_eq!(filter.limit(), 25);
//! ```

mod doctor;
mod pagination;

pub use doctor::{Doctor, DoctorChanges, NewDoctor};
pub use pagination::{ListFilter, Page, SortColumn, SortDirection};
