use std::sync::Arc;

use crate::builders::Select;
use crate::dialect::PlaceholderFormat;
use crate::traits::DatabaseDriver;

/// Query builder factory.
///
/// Bound to a runner (usually the statement cache) and a placeholder
/// format. A shared `Querier` is never mutated by query building; each call
/// site starts a fresh chain with `select()`, so one instance can serve any
/// number of handlers.
#[derive(Clone)]
pub struct Querier {
    driver: Arc<dyn DatabaseDriver>,
    placeholder: PlaceholderFormat,
}

impl Querier {
    /// Create a querier that executes against `driver` using the library
    /// default placeholder format.
    pub fn new(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self {
            driver,
            placeholder: PlaceholderFormat::default(),
        }
    }

    /// Set the placeholder format used for bound parameters.
    pub fn placeholder_format(mut self, placeholder: PlaceholderFormat) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// The placeholder format this querier renders.
    pub fn placeholder(&self) -> PlaceholderFormat {
        self.placeholder
    }

    /// Start building a SELECT query.
    pub fn select(&self) -> Select {
        Select::new(Arc::clone(&self.driver), self.placeholder)
    }
}
