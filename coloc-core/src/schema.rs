//! Table layout for the colocalization store.
//!
//! This is metadata only: the column lists below describe how one entity maps
//! onto one storage row. A caller-supplied prefix lets the same entity be
//! embedded more than once in a wider row (`locus_id1_*`, `locus_id2_*`).
//! Nothing here talks to a database.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    /// Bounded text of the given width.
    String(usize),
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Float => write!(f, "FLOAT"),
            ColumnType::String(width) => write!(f, "VARCHAR({})", width),
        }
    }
}

///
/// One column of a storage row.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
}

impl Column {
    pub fn new(prefix: Option<&str>, name: &str, kind: ColumnType) -> Self {
        Column {
            name: format!("{}{}", prefix.unwrap_or(""), name),
            kind,
            nullable: false,
            primary_key: false,
            auto_increment: false,
        }
    }

    ///
    /// Auto-increment integer primary key, assigned by the store.
    ///
    pub fn id(prefix: Option<&str>) -> Self {
        Column {
            primary_key: true,
            auto_increment: true,
            ..Column::new(prefix, "id", ColumnType::Integer)
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }
}

///
/// A single cell of a storage row.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(u64),
    Float(f64),
    Text(String),
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

///
/// Maps an entity onto one storage row.
///
/// `values()` is aligned 1:1 with `columns(None)`: the n-th value belongs in
/// the n-th column. Auto-increment columns receive [Value::Null].
///
pub trait ToRow {
    fn columns(prefix: Option<&str>) -> Vec<Column>;

    fn values(&self) -> Vec<Value>;
}
