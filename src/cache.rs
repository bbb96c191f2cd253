//! Prepared-statement cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::Result;
use crate::traits::{DatabaseDriver, StatementId};
use crate::types::{RawQueryResult, SqlValue};

/// Wraps a driver and memoizes prepared statements by exact SQL text, so
/// repeated queries with identical text skip re-preparation.
///
/// The cache implements [`DatabaseDriver`] itself and can be used anywhere
/// the wrapped driver could be; its `execute` always goes through the
/// prepared path. Statements are kept until [`clear`](StmtCache::clear).
pub struct StmtCache {
    driver: Arc<dyn DatabaseDriver>,
    statements: Mutex<HashMap<String, StatementId>>,
}

impl StmtCache {
    /// Create a cache over `driver`.
    pub fn new(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self {
            driver,
            statements: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct statements currently cached.
    pub fn cached(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    /// Forget every cached statement. Subsequent queries re-prepare.
    pub fn clear(&self) {
        self.statements.lock().unwrap().clear();
    }
}

#[async_trait]
impl DatabaseDriver for StmtCache {
    async fn prepare(&self, sql: &str) -> Result<StatementId> {
        // The lock is never held across an await. Two tasks may race to
        // prepare the same text; the later statement simply replaces the
        // earlier id in the map.
        if let Some(id) = self.statements.lock().unwrap().get(sql) {
            trace!(statement = ?id, "statement cache hit");
            return Ok(*id);
        }

        let id = self.driver.prepare(sql).await?;
        debug!(statement = ?id, "prepared and cached statement");
        self.statements.lock().unwrap().insert(sql.to_string(), id);
        Ok(id)
    }

    async fn execute_prepared(
        &self,
        statement: StatementId,
        params: &[SqlValue],
    ) -> Result<RawQueryResult> {
        self.driver.execute_prepared(statement, params).await
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult> {
        let statement = self.prepare(sql).await?;
        self.driver.execute_prepared(statement, params).await
    }
}
