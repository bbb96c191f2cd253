//! Shared datasource registry.
//!
//! A registry is a small type-erased store the host application owns, used
//! to hand long-lived database handles to request handlers without threading
//! them through every call. Entries are keyed by [`DatasourceKey`] rather
//! than free-form strings, so a lookup can only name a slot that exists.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// The fixed slots a registry can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasourceKey {
    /// The raw database connection handle.
    Connection,
    /// The statement cache, usable anywhere a driver is expected.
    Runner,
    /// The shared query builder factory.
    Builder,
    /// The placeholder format in effect for the registered builder.
    Dialect,
}

impl fmt::Display for DatasourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasourceKey::Connection => "connection",
            DatasourceKey::Runner => "runner",
            DatasourceKey::Builder => "builder",
            DatasourceKey::Dialect => "dialect",
        };
        write!(f, "{}", name)
    }
}

/// Type-erased key/value store for shared datasources.
///
/// Values must be `Send + Sync` since everything registered here is shared
/// across request handlers for the registry's whole lifetime.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<DatasourceKey, Box<dyn Any + Send + Sync>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a value under `key`, replacing any previous entry.
    pub fn put<T>(&mut self, key: DatasourceKey, value: T)
    where
        T: Any + Send + Sync,
    {
        self.entries.insert(key, Box::new(value));
    }

    /// Look up the value under `key`.
    ///
    /// Returns `None` when the slot is empty or holds a value of a
    /// different type.
    pub fn get<T>(&self, key: DatasourceKey) -> Option<&T>
    where
        T: Any + Send + Sync,
    {
        self.entries
            .get(&key)
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Look up the value under `key`, panicking on misuse.
    ///
    /// An empty or wrong-typed slot means setup was never run on this
    /// registry (or ran against a different one); this aborts the calling
    /// path rather than return a degraded value.
    pub fn expect<T>(&self, key: DatasourceKey) -> &T
    where
        T: Any + Send + Sync,
    {
        let entry = self.entries.get(&key).unwrap_or_else(|| {
            panic!("no `{}` datasource registered; was setup run on this registry?", key)
        });
        entry.downcast_ref::<T>().unwrap_or_else(|| {
            panic!(
                "`{}` datasource is not a {}",
                key,
                std::any::type_name::<T>()
            )
        })
    }

    /// Returns true if `key` holds a value of any type.
    pub fn contains(&self, key: DatasourceKey) -> bool {
        self.entries.contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let mut registry = Registry::new();
        registry.put(DatasourceKey::Connection, 42_u32);

        assert_eq!(registry.get::<u32>(DatasourceKey::Connection), Some(&42));
        assert!(registry.contains(DatasourceKey::Connection));
        assert!(!registry.contains(DatasourceKey::Runner));
    }

    #[test]
    fn test_put_overwrites() {
        let mut registry = Registry::new();
        registry.put(DatasourceKey::Dialect, "first".to_string());
        registry.put(DatasourceKey::Dialect, "second".to_string());

        assert_eq!(
            registry.get::<String>(DatasourceKey::Dialect).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_get_wrong_type_is_none() {
        let mut registry = Registry::new();
        registry.put(DatasourceKey::Runner, 1_i64);

        assert_eq!(registry.get::<String>(DatasourceKey::Runner), None);
    }

    #[test]
    #[should_panic(expected = "no `builder` datasource registered")]
    fn test_expect_panics_on_empty_slot() {
        let registry = Registry::new();
        registry.expect::<u32>(DatasourceKey::Builder);
    }

    #[test]
    #[should_panic(expected = "`connection` datasource is not a")]
    fn test_expect_panics_on_wrong_type() {
        let mut registry = Registry::new();
        registry.put(DatasourceKey::Connection, 42_u32);
        registry.expect::<String>(DatasourceKey::Connection);
    }
}
