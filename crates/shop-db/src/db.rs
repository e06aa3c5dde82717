//! Database connection and query execution.

use crate::{DbError, QueryResult, Value};
use serde::de::DeserializeOwned;

#[cfg(target_arch = "wasm32")]
use crate::Row;

/// SQLite database connection.
///
/// Backed by `spin_sdk::sqlite` on WASM; on other targets the connection is
/// an inert stub returning empty results so the API stays compilable for
/// host-side tests.
pub struct Db {
    #[cfg(target_arch = "wasm32")]
    conn: spin_sdk::sqlite::Connection,
    #[cfg(not(target_arch = "wasm32"))]
    _phantom: std::marker::PhantomData<()>,
}

#[cfg(target_arch = "wasm32")]
impl Db {
    /// Open the default SQLite database.
    pub fn open_default() -> Result<Self, DbError> {
        spin_sdk::sqlite::Connection::open_default()
            .map(|conn| Self { conn })
            .map_err(|e| DbError::Open(e.to_string()))
    }

    /// Execute a SQL statement that doesn't return rows.
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<(), DbError> {
        self.run(sql, params).map(|_| ())
    }

    /// Execute a SQL query and return raw result rows.
    pub fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DbError> {
        let raw = self.run(sql, params)?;
        let columns = raw.columns.clone();
        let rows = raw
            .rows
            .iter()
            .map(|r| Row::new(columns.clone(), r.values.iter().map(Value::from).collect()))
            .collect();
        Ok(QueryResult::new(columns, rows))
    }

    /// Execute a SQL query and deserialize every row into `T`.
    pub fn query_as<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<T>, DbError> {
        self.query(sql, params)?.deserialize_all()
    }

    fn run(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<spin_sdk::sqlite::QueryResult, DbError> {
        let params: Vec<spin_sdk::sqlite::Value> =
            params.iter().map(spin_sdk::sqlite::Value::from).collect();
        self.conn
            .execute(sql, params.as_slice())
            .map_err(|e| DbError::Query(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<&Value> for spin_sdk::sqlite::Value {
    fn from(v: &Value) -> Self {
        use spin_sdk::sqlite::Value as Spin;
        match v {
            Value::Null => Spin::Null,
            Value::Integer(i) => Spin::Integer(*i),
            Value::Real(f) => Spin::Real(*f),
            Value::Text(s) => Spin::Text(s.clone()),
            Value::Blob(b) => Spin::Blob(b.clone()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<&spin_sdk::sqlite::Value> for Value {
    fn from(v: &spin_sdk::sqlite::Value) -> Self {
        use spin_sdk::sqlite::Value as Spin;
        match v {
            Spin::Null => Value::Null,
            Spin::Integer(i) => Value::Integer(*i),
            Spin::Real(f) => Value::Real(*f),
            Spin::Text(s) => Value::Text(s.clone()),
            Spin::Blob(b) => Value::Blob(b.clone()),
        }
    }
}

// Non-WASM stubs for development and testing.
#[cfg(not(target_arch = "wasm32"))]
impl Db {
    pub fn open_default() -> Result<Self, DbError> {
        Ok(Self {
            _phantom: std::marker::PhantomData,
        })
    }

    pub fn execute(&self, _sql: &str, _params: &[Value]) -> Result<(), DbError> {
        Ok(())
    }

    pub fn query(&self, _sql: &str, _params: &[Value]) -> Result<QueryResult, DbError> {
        Ok(QueryResult::new(vec![], vec![]))
    }

    pub fn query_as<T: DeserializeOwned>(
        &self,
        _sql: &str,
        _params: &[Value],
    ) -> Result<Vec<T>, DbError> {
        Ok(vec![])
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_host_stub_is_inert() {
        let db = Db::open_default().unwrap();
        db.execute("INSERT INTO bundles (bundle_id) VALUES (?)", params!["b1"])
            .unwrap();
        let result = db.query("SELECT * FROM bundles", params![]).unwrap();
        assert!(result.is_empty());
        let rows: Vec<serde_json::Value> = db.query_as("SELECT * FROM bundles", params![]).unwrap();
        assert!(rows.is_empty());
    }
}
