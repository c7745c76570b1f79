//! Parameterized SQL construction shared by the relational backends.
//!
//! The [`QueryBuilder`] turns typed list filters and partial updates into
//! [`SqlFragment`]s for a given [`Dialect`]. Column names come from enums and
//! typed fields, never from request strings.

mod builder;

pub use builder::{
    DOCTOR_COLUMNS, DOCTORS_TABLE, Dialect, ListQuery, QueryBuilder, SqlFragment, SqlParam,
    escape_like,
};
