//! sqlrig - shared datasource wiring for SQL query building
//!
//! Wires a database connection, a prepared-statement cache, and a type-safe
//! query builder into a shared [`Registry`], so request handlers can pull
//! them back out with typed accessors instead of threading handles through
//! every call.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//!
//! use sqlrig::datasource::{self, Config};
//! use sqlrig::drivers::TokioPostgresDriver;
//! use sqlrig::{Registry, WhereClause};
//!
//! // At startup: connect and wire everything into the registry.
//! let mut registry = Registry::new();
//! let conn = TokioPostgresDriver::connect("postgres://localhost/mydb").await?;
//! datasource::setup(&mut registry, Arc::new(conn), Config::POSTGRES);
//!
//! // In any handler: build and run a query through the shared builder.
//! let row = datasource::builder(&registry)
//!     .select()
//!     .columns(&[&Users::columns().id, &Users::columns().name])
//!     .from(Users)
//!     .where_(WhereClause::eq(&Users::columns().name, "John"))
//!     .execute()
//!     .await?
//!     .single_row()?;
//!
//! // Or run hand-written SQL through the statement cache.
//! let rows = datasource::runner(&registry)
//!     .execute("SELECT * FROM users LIMIT 10", &[])
//!     .await?;
//! ```

pub mod builders;
pub mod cache;
pub mod clauses;
pub mod datasource;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod querier;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export main types for convenient access
pub use cache::StmtCache;
pub use clauses::WhereClause;
pub use datasource::Config;
pub use dialect::PlaceholderFormat;
pub use error::{Result, SqlRigError};
pub use querier::Querier;
pub use registry::{DatasourceKey, Registry};
pub use traits::{Column, ColumnRef, DatabaseDriver, StatementId, Table};
pub use types::{QueryResult, RawQueryResult, Row, SqlValue};
