//! Database value and result types.

use crate::DbError;
use serde::de::DeserializeOwned;

/// A database value usable as a query parameter or result cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Integer view of the cell. Real cells truncate, anything else is `None`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Real(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Float view of the cell. Integer cells widen.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Text view of the cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the cell is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(v.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// One result row: column names paired with their cells.
#[derive(Debug, Clone)]
pub struct Row {
    names: Vec<String>,
    cells: Vec<Value>,
}

impl Row {
    pub fn new(names: Vec<String>, cells: Vec<Value>) -> Self {
        Self { names, cells }
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.names
            .iter()
            .zip(&self.cells)
            .find(|(name, _)| *name == column)
            .map(|(_, cell)| cell)
    }

    /// Deserialize the row into `T` through a JSON object bridge.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DbError> {
        let mut object = serde_json::Map::with_capacity(self.names.len());
        for (name, cell) in self.names.iter().zip(&self.cells) {
            object.insert(name.clone(), json_cell(cell));
        }
        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| DbError::Deserialize(e.to_string()))
    }
}

/// All rows returned by one query.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, if any.
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Deserialize every row into `T`.
    pub fn deserialize_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, DbError> {
        self.iter().map(Row::deserialize).collect()
    }
}

/// Bridge one cell into the JSON object fed to serde.
///
/// Blobs bridge as lossy UTF-8 text; this layer only ever reads text and
/// numeric columns, so a non-UTF-8 blob surfacing here is already a schema
/// mismatch the deserializer will reject.
fn json_cell(cell: &Value) -> serde_json::Value {
    use serde_json::Value as Json;
    match cell {
        Value::Null => Json::Null,
        Value::Integer(i) => Json::from(*i),
        Value::Real(f) => Json::from(*f),
        Value::Text(s) => Json::from(s.as_str()),
        Value::Blob(b) => Json::from(String::from_utf8_lossy(b).into_owned()),
    }
}
