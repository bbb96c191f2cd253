use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio_postgres::{types::ToSql, Client, NoTls, Statement};
use tracing::{debug, error};

use crate::error::{Result, SqlRigError};
use crate::traits::{DatabaseDriver, StatementId};
use crate::types::{RawQueryResult, SqlValue};

/// PostgreSQL driver implementation using tokio-postgres.
///
/// Prepared statements are retained in an id table so callers (notably the
/// statement cache) can re-execute them without re-preparing. SQL handed to
/// this driver must use `$N` placeholders.
pub struct TokioPostgresDriver {
    client: Client,
    statements: Mutex<HashMap<u64, Statement>>,
    next_id: AtomicU64,
}

impl TokioPostgresDriver {
    /// Connect to a PostgreSQL database.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|e| SqlRigError::ConnectionFailed(e.to_string()))?;

        // Spawn the connection handler
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!(error = %e, "postgres connection error");
            }
        });

        Ok(Self {
            client,
            statements: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        })
    }

    fn statement(&self, id: StatementId) -> Result<Statement> {
        self.statements
            .lock()
            .unwrap()
            .get(&id.0)
            .cloned()
            .ok_or(SqlRigError::UnknownStatement(id.0))
    }
}

#[async_trait]
impl DatabaseDriver for TokioPostgresDriver {
    async fn prepare(&self, sql: &str) -> Result<StatementId> {
        let statement = self
            .client
            .prepare(sql)
            .await
            .map_err(|e| SqlRigError::PrepareFailed(e.to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.statements.lock().unwrap().insert(id, statement);
        debug!(id, "prepared statement");
        Ok(StatementId(id))
    }

    async fn execute_prepared(
        &self,
        statement: StatementId,
        params: &[SqlValue],
    ) -> Result<RawQueryResult> {
        let statement = self.statement(statement)?;
        let converted_params: Vec<Box<dyn ToSql + Sync + Send>> =
            params.iter().map(sql_value_to_tosql).collect();

        let param_refs: Vec<&(dyn ToSql + Sync)> = converted_params
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(&statement, &param_refs)
            .await
            .map_err(|e| SqlRigError::QueryFailed(e.to_string()))?;

        Ok(rows_to_raw_result(&rows))
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult> {
        let converted_params: Vec<Box<dyn ToSql + Sync + Send>> =
            params.iter().map(sql_value_to_tosql).collect();

        let param_refs: Vec<&(dyn ToSql + Sync)> = converted_params
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(sql, &param_refs)
            .await
            .map_err(|e| SqlRigError::QueryFailed(e.to_string()))?;

        Ok(rows_to_raw_result(&rows))
    }
}

/// Convert a SqlValue to a boxed ToSql trait object.
fn sql_value_to_tosql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(None::<String>),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Int32(i) => Box::new(*i),
        SqlValue::Int64(i) => Box::new(*i),
        SqlValue::Float64(f) => Box::new(*f),
        SqlValue::Bool(b) => Box::new(*b),
    }
}

/// Convert tokio-postgres rows into the driver-agnostic result shape.
fn rows_to_raw_result(rows: &[tokio_postgres::Row]) -> RawQueryResult {
    let columns: Vec<String> = if rows.is_empty() {
        Vec::new()
    } else {
        rows[0]
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    };

    let result_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..row.columns().len())
                .map(|i| row_value_to_string(row, i))
                .collect()
        })
        .collect();

    RawQueryResult::new(columns, result_rows)
}

/// Convert a row value at a given index to a string.
fn row_value_to_string(row: &tokio_postgres::Row, index: usize) -> String {
    // Try common types and convert to string
    // This is a simplified implementation - a production version would handle more types

    // Try as i32
    if let Ok(val) = row.try_get::<_, i32>(index) {
        return val.to_string();
    }

    // Try as i64
    if let Ok(val) = row.try_get::<_, i64>(index) {
        return val.to_string();
    }

    // Try as String
    if let Ok(val) = row.try_get::<_, String>(index) {
        return val;
    }

    // Try as bool
    if let Ok(val) = row.try_get::<_, bool>(index) {
        return val.to_string();
    }

    // Try as f64
    if let Ok(val) = row.try_get::<_, f64>(index) {
        return val.to_string();
    }

    // Try as Option<String> for NULL handling
    if let Ok(val) = row.try_get::<_, Option<String>>(index) {
        return val.unwrap_or_else(|| "NULL".to_string());
    }

    // Fallback
    "UNKNOWN".to_string()
}
