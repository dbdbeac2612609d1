//! Process-wide singleton registry.
//!
//! A [`Registry`] holds at most one instance per type, created lazily on
//! first access. The usual entry point is [`instance`], which goes through
//! the [`global`] registry:
//!
//! ```
//! use tessera_registry::instance;
//!
//! struct Config {
//!     retries: u32,
//! }
//!
//! let first = instance(|| Config { retries: 3 });
//! // Later initializers are ignored; the first instance wins.
//! let second = instance(|| Config { retries: 99 });
//!
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(second.retries, 3);
//! ```
//!
//! Lazy initialization is guarded by the registry's write lock with a
//! re-check, so two threads racing on first access still observe a single
//! instance. The global registry lives for the process lifetime and exposes
//! no invalidation API; scoped [`Registry`] values can be used instead where
//! tests or composition roots need isolation.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry used by [`instance`].
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Return the process-wide singleton for `T`, constructing it on first call.
///
/// Shorthand for `global().get_or_init(init)`.
pub fn instance<T, F>(init: F) -> Arc<T>
where
    T: Any + Send + Sync,
    F: FnOnce() -> T,
{
    GLOBAL.get_or_init(init)
}

/// A registry of singleton instances keyed by type identity.
#[derive(Default)]
pub struct Registry {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// Return the singleton for `T`, constructing it on first call.
    ///
    /// Every later call returns the cached instance and never runs `init`,
    /// whatever that closure captures. Initialization holds the write lock,
    /// so exactly one instance is constructed even under contention.
    pub fn get_or_init<T, F>(&self, init: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let type_id = TypeId::of::<T>();
        if let Some(existing) = self.lookup::<T>(type_id) {
            return existing;
        }

        let mut instances = self.instances.write();
        // Re-check: another thread may have initialized between the read
        // above and acquiring the write lock.
        if let Some(existing) = instances
            .get(&type_id)
            .and_then(|any| any.clone().downcast::<T>().ok())
        {
            log::trace!("singleton already initialized: {}", std::any::type_name::<T>());
            return existing;
        }

        let created = Arc::new(init());
        instances.insert(type_id, created.clone());
        log::debug!("singleton initialized: {}", std::any::type_name::<T>());
        created
    }

    /// The singleton for `T`, if one has been initialized.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.lookup(TypeId::of::<T>())
    }

    /// Whether a singleton for `T` has been initialized.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.instances.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of initialized singletons.
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    /// Whether no singleton has been initialized yet.
    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    fn lookup<T: Any + Send + Sync>(&self, type_id: TypeId) -> Option<Arc<T>> {
        self.instances
            .read()
            .get(&type_id)
            .and_then(|any| any.clone().downcast::<T>().ok())
    }
}
