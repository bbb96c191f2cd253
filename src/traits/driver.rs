use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RawQueryResult, SqlValue};

/// Opaque handle to a prepared statement held by a driver.
///
/// Ids are only meaningful to the driver that issued them; passing an id to
/// a different driver instance yields `SqlRigError::UnknownStatement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatementId(pub u64);

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Connecting to the database
/// - Preparing statements and retaining them for later execution
/// - Converting SqlValue parameters to native types
/// - Executing queries and converting results to RawQueryResult
///
/// SQL text is passed through verbatim; whatever placeholder style the text
/// was built with must match what the target engine accepts.
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Prepare a statement and return a handle for later execution.
    async fn prepare(&self, sql: &str) -> Result<StatementId>;

    /// Execute a previously prepared statement with the given parameters.
    async fn execute_prepared(
        &self,
        statement: StatementId,
        params: &[SqlValue],
    ) -> Result<RawQueryResult>;

    /// Execute a SQL query directly, without going through the prepared
    /// statement path.
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult>;
}
