//! Attribute-style key/value stores for app- and group-scoped state.
//!
//! The app owns one flat [`Context`]; each group owns a [`ScopedContext`]
//! that is linked to the app context exactly once, at registration time.
//! Lookups check the local store first and fall through to the global one;
//! a key absent from both (or present with a different type) is `None`.
//!
//! Both stores hold type-erased `Send + Sync` values, so extensions can be
//! anything from configuration structs to function pointers. They are
//! populated during startup registration and read-only during serving.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::OnceCell;
use tracing::warn;

type AnyValue = Arc<dyn Any + Send + Sync>;

/// Shared key → value store for app-wide state and extensions.
///
/// Cloning a `Context` clones a handle: the app and every linked group
/// observe the same underlying map, so an extension registered after group
/// registration is still visible through every scoped fallback.
#[derive(Clone, Default)]
pub struct Context {
    values: Arc<RwLock<HashMap<String, AnyValue>>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous value.
    pub fn insert<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.into(), Arc::new(value));
        }
    }

    /// Look up `key`, downcasting to `T`.
    ///
    /// `None` means the key is absent or stored with a different type —
    /// the "attribute not found" condition.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let values = self.values.read().ok()?;
        let value = values.get(key)?;
        Arc::clone(value).downcast::<T>().ok()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values
            .read()
            .map(|values| values.contains_key(key))
            .unwrap_or(false)
    }
}

/// A group-scoped store with one-time fallback linkage to the app context.
///
/// Before linkage only local keys resolve; after `App::register_group` runs,
/// lookups that miss locally fall through to the global context.
#[derive(Default)]
pub struct ScopedContext {
    local: Context,
    global: OnceCell<Context>,
}

impl ScopedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value in the local scope.
    pub fn insert<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T) {
        self.local.insert(key, value);
    }

    /// Look up `key` locally, falling through to the linked global context.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.local
            .get(key)
            .or_else(|| self.global.get()?.get(key))
    }

    /// Whether this scope has been linked to a global context yet.
    pub fn is_linked(&self) -> bool {
        self.global.get().is_some()
    }

    /// Link this scope to the app's global context.
    ///
    /// Happens exactly once, at group registration; a second attempt is
    /// refused and leaves the original linkage intact.
    pub(crate) fn link(&self, global: Context) {
        if self.global.set(global).is_err() {
            warn!("scoped context is already linked to a global context; link refused");
        }
    }
}
