//! Per-resource descriptors driving the generic CRUD layer.
//!
//! Every content type is described once: its table, key type, list ordering,
//! row mapping, and (for writable resources) which columns an input writes.
//! The repository and the HTTP handlers are written against these traits only.

pub mod catalog;
pub mod content;
pub mod pages;
pub mod showcase;
pub mod site;

pub use catalog::{Brands, Categories, Products};
pub use content::{BlogPosts, Services, TeamMembers};
pub use pages::{AboutUs, ContactInfo, CorporateInfo};
pub use showcase::{CertificateSettings, Certificates, ClientSettings, Clients};
pub use site::{Settings, SocialLinks, Stats, Subscribers};

use crate::domain::{encode_list, flag_to_int, StatusParseError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::database::HasArguments;
use sqlx::encode::IsNull;
use sqlx::sqlite::{SqliteRow, SqliteTypeInfo};
use sqlx::{Encode, Sqlite, Type};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Fixed primary key of every singleton table.
pub const SINGLETON_ID: i64 = 1;

/// Identifier type of a resource: an auto-increment integer or a fixed text key.
pub trait ResourceKey:
    Clone
    + Display
    + Send
    + Sync
    + DeserializeOwned
    + for<'q> Encode<'q, Sqlite>
    + Type<Sqlite>
    + 'static
{
}

impl<T> ResourceKey for T where
    T: Clone
        + Display
        + Send
        + Sync
        + DeserializeOwned
        + for<'q> Encode<'q, Sqlite>
        + Type<Sqlite>
        + 'static
{
}

/// A readable (and deletable) table.
pub trait Resource: Send + Sync + 'static {
    type Key: ResourceKey;
    type Record: Serialize + Send + Sync;

    /// Table name. Interpolated into SQL, so it must be a literal.
    const TABLE: &'static str;
    /// Human-readable name used in audit entries.
    const NOUN: &'static str;
    /// `ORDER BY` clause for list queries.
    const ORDER_BY: &'static str;

    fn list_sql() -> String {
        format!("SELECT * FROM {} ORDER BY {}", Self::TABLE, Self::ORDER_BY)
    }

    /// Map a row to the wire record.
    ///
    /// # Errors
    /// Returns an error if a column is missing or has an incompatible type.
    fn from_row(row: &SqliteRow) -> Result<Self::Record, sqlx::Error>;

    fn deleted_details(key: &Self::Key) -> String {
        format!("{} with id {} deleted", Self::NOUN, key)
    }
}

/// A resource whose rows are written from request bodies.
pub trait Writable: Resource {
    type Input: DeserializeOwned + Send + Sync;

    /// Columns written for an input, in a fixed order.
    ///
    /// Create skips fields whose value is `None` so the column default applies;
    /// update writes every field, `None` as NULL.
    ///
    /// # Errors
    /// Returns an error if a list field fails to serialize.
    fn fields(input: &Self::Input) -> Result<Vec<Field>, serde_json::Error>;

    /// Name of the entity for audit entries, when it has one.
    fn display_name(_input: &Self::Input) -> Option<String> {
        None
    }

    fn created_details(input: &Self::Input) -> String {
        match Self::display_name(input) {
            Some(name) => format!("{} added: {}", Self::NOUN, name),
            None => format!("New {} added", Self::NOUN.to_lowercase()),
        }
    }

    fn updated_details(key: &Self::Key, input: &Self::Input) -> String {
        match Self::display_name(input) {
            Some(name) => format!("{} details changed: {}", Self::NOUN, name),
            None => format!("{} {} details changed", Self::NOUN, key),
        }
    }
}

/// A writable table constrained to the single row `id = 1`.
pub trait Singleton: Writable<Key = i64> {}

/// A value bound into a parameterized statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(&self, buf: &mut <Sqlite as HasArguments<'q>>::ArgumentBuffer) -> IsNull {
        match self {
            SqlValue::Integer(v) => <i64 as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
            SqlValue::Real(v) => <f64 as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
            SqlValue::Text(v) => <String as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<SqliteTypeInfo> {
        Some(match self {
            SqlValue::Integer(_) => <i64 as Type<Sqlite>>::type_info(),
            SqlValue::Real(_) => <f64 as Type<Sqlite>>::type_info(),
            SqlValue::Text(_) => <String as Type<Sqlite>>::type_info(),
        })
    }
}

/// One column written by an insert or update.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub column: &'static str,
    pub value: Option<SqlValue>,
}

impl Field {
    pub fn text(column: &'static str, value: &Option<String>) -> Self {
        Field {
            column,
            value: value.clone().map(SqlValue::Text),
        }
    }

    pub fn integer(column: &'static str, value: Option<i64>) -> Self {
        Field {
            column,
            value: value.map(SqlValue::Integer),
        }
    }

    pub fn real(column: &'static str, value: Option<f64>) -> Self {
        Field {
            column,
            value: value.map(SqlValue::Real),
        }
    }

    pub fn flag(column: &'static str, value: Option<bool>) -> Self {
        Field {
            column,
            value: value.map(|b| SqlValue::Integer(flag_to_int(b))),
        }
    }

    pub fn status<S: AsRef<str>>(column: &'static str, value: Option<S>) -> Self {
        Field {
            column,
            value: value.map(|s| SqlValue::Text(s.as_ref().to_string())),
        }
    }

    /// # Errors
    /// Returns an error if an element fails to serialize.
    pub fn list<T: Serialize>(
        column: &'static str,
        value: &Option<Vec<T>>,
    ) -> Result<Self, serde_json::Error> {
        let value = match value {
            Some(items) => Some(SqlValue::Text(encode_list(items)?)),
            None => None,
        };
        Ok(Field { column, value })
    }
}

/// Read a status column, treating unknown text as absent.
pub(crate) fn read_status<S>(table: &str, raw: Option<String>) -> Option<S>
where
    S: FromStr<Err = StatusParseError>,
{
    let raw = raw?;
    match S::from_str(&raw) {
        Ok(status) => Some(status),
        Err(e) => {
            warn!(table, status = %raw, error = %e, "Unknown stored status, reporting none");
            None
        }
    }
}
