//! `SQLite` single-column binding for [`TriState<T>`].
//!
//! rusqlite's [`ToSql`] and [`FromSql`] traits play the role of the per-type
//! conversion hook and the generic null-aware scan: any `T` the driver layer
//! already knows how to bind or read (integers, reals, text, blobs, chrono
//! timestamps, or a type with its own impls) works inside a `TriState<T>`
//! with no further glue. A `TriState` can therefore sit directly in a
//! `params![]` list or be read back with `row.get(..)`.

use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, Value, ValueRef};
use tracing::debug;

use crate::error::Result;
use crate::value::TriState;

impl<T: ToSql> ToSql for TriState<T> {
    /// Binds `Value(v)` through `v`'s own conversion.
    ///
    /// `Null` binds SQL `NULL`. `Absent` also binds SQL `NULL`: an absent
    /// field carries no value, and callers that want to skip the column
    /// entirely must do so at the statement level before binding.
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Value(v) => v.to_sql(),
            Self::Absent | Self::Null => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

impl<T: FromSql> FromSql for TriState<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::Null),
            other => T::column_result(other).map(Self::Value),
        }
    }
}

impl<T: FromSql> TriState<T> {
    /// Populates a container from a raw column value, outside of rusqlite's
    /// own row machinery.
    ///
    /// A `NULL` source yields `Null`; any other source must convert into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TriStateError::Scan`](crate::TriStateError::Scan) if the
    /// source value does not convert into the payload type.
    pub fn scan(src: ValueRef<'_>) -> Result<Self> {
        Self::column_result(src).map_err(|err| {
            debug!(%err, "tri-state column scan failed");
            err.into()
        })
    }
}
