//! Datasource wiring.
//!
//! Registers a database connection, a statement cache over it, and a query
//! builder bound to that cache into a [`Registry`], then lets any handler
//! holding the registry fetch them back through the typed accessors.
//!
//! `setup` is called once during application initialization, before request
//! handling begins; that ordering is what makes the lock-free accessor
//! reads safe.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//!
//! use sqlrig::datasource::{self, Config};
//! use sqlrig::drivers::TokioPostgresDriver;
//! use sqlrig::Registry;
//!
//! let mut registry = Registry::new();
//! let conn = TokioPostgresDriver::connect("postgres://localhost/mydb").await?;
//! datasource::setup(&mut registry, Arc::new(conn), Config::POSTGRES);
//!
//! // Later, from any handler that can see the registry:
//! let result = datasource::builder(&registry)
//!     .select()
//!     .columns(&[&Users::columns().id, &Users::columns().name])
//!     .from(Users)
//!     .execute()
//!     .await?;
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::cache::StmtCache;
use crate::dialect::PlaceholderFormat;
use crate::querier::Querier;
use crate::registry::{DatasourceKey, Registry};
use crate::traits::DatabaseDriver;

/// Configuration options for [`setup`].
///
/// Predefined configurations for Postgres and MySQL are provided as
/// associated constants; `Config::default()` leaves the builder on the
/// library default placeholder format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Placeholder format for the registered builder, or `None` to keep
    /// the library default.
    pub placeholder: Option<PlaceholderFormat>,
}

impl Config {
    /// Predefined config for Postgres defaults.
    pub const POSTGRES: Config = Config {
        placeholder: Some(PlaceholderFormat::Dollar),
    };

    /// Predefined config for MySQL defaults.
    pub const MYSQL: Config = Config {
        placeholder: Some(PlaceholderFormat::Question),
    };
}

/// Wire `connection` into `registry`.
///
/// Builds a [`StmtCache`] over the connection and a [`Querier`] that
/// executes through the cache, then publishes four entries: the raw
/// connection, the cache (usable anywhere a driver is), the querier, and
/// the placeholder format in effect.
///
/// Never fails: an unreachable database or bad credentials surface on the
/// first query execution, not here. Running setup again on the same
/// registry replaces all four entries.
pub fn setup(registry: &mut Registry, connection: Arc<dyn DatabaseDriver>, config: Config) {
    let cache = Arc::new(StmtCache::new(Arc::clone(&connection)));

    let mut querier = Querier::new(Arc::clone(&cache) as Arc<dyn DatabaseDriver>);
    if let Some(placeholder) = config.placeholder {
        querier = querier.placeholder_format(placeholder);
    }
    let dialect = querier.placeholder();

    registry.put(DatasourceKey::Connection, connection);
    registry.put(DatasourceKey::Runner, cache);
    registry.put(DatasourceKey::Builder, querier);
    registry.put(DatasourceKey::Dialect, dialect);

    debug!(%dialect, "registered datasources");
}

/// Fetch the raw connection handle.
///
/// Panics if [`setup`] was never run on this registry.
pub fn db(registry: &Registry) -> Arc<dyn DatabaseDriver> {
    Arc::clone(registry.expect::<Arc<dyn DatabaseDriver>>(DatasourceKey::Connection))
}

/// Fetch the statement cache.
///
/// The cache implements [`DatabaseDriver`], so it can run hand-written SQL
/// directly while still memoizing preparation:
///
/// ```ignore
/// datasource::runner(&registry).execute("SELECT 1", &[]).await?;
/// ```
///
/// Panics if [`setup`] was never run on this registry.
pub fn runner(registry: &Registry) -> Arc<StmtCache> {
    Arc::clone(registry.expect::<Arc<StmtCache>>(DatasourceKey::Runner))
}

/// Fetch the shared query builder factory.
///
/// Usage:
///
/// ```ignore
/// datasource::builder(&registry).select().star().from(Foo).execute().await?;
/// ```
///
/// Panics if [`setup`] was never run on this registry.
pub fn builder(registry: &Registry) -> Querier {
    registry.expect::<Querier>(DatasourceKey::Builder).clone()
}

/// Fetch the placeholder format the registered builder renders.
///
/// Panics if [`setup`] was never run on this registry.
pub fn dialect(registry: &Registry) -> PlaceholderFormat {
    *registry.expect::<PlaceholderFormat>(DatasourceKey::Dialect)
}
