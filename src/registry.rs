// src/registry.rs

//! Profile manager registry
//!
//! Profile implementations register themselves here, conventionally from a
//! startup routine of the build tool that embeds them, and commands look
//! managers up by profile name. Registration is write-once per name: a
//! second registration under the same name is a programming error (two
//! profile implementations collided) and aborts the process rather than
//! silently shadowing a manager, which would cause silently wrong installs
//! later.
//!
//! The registry is a passive shared structure: one mutex guards the
//! name→manager map, held only for the duration of a single operation and
//! never across a manager's install/uninstall work.

use crate::error::{Error, Result};
use crate::manager::Manager;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A profile manager stored behind the capability trait
///
/// Shared so lookups can hand out the manager without holding the registry
/// lock; the same instance may be registered under several names.
pub type SharedManager = Arc<dyn Manager>;

/// A thread-safe, write-once-per-name mapping from profile name to manager
///
/// The process-wide instance behind [`register`]/[`lookup_manager`] covers
/// the common plugin-style flow; embedders that want isolation can hold
/// their own `Registry`.
pub struct Registry {
    managers: Mutex<BTreeMap<String, SharedManager>>,
}

impl Registry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            managers: Mutex::new(BTreeMap::new()),
        }
    }

    /// Register `manager` under `name`
    ///
    /// # Panics
    ///
    /// Panics if a manager is already registered under `name`. Registering
    /// the same manager instance under distinct names is allowed.
    pub fn register(&self, name: impl Into<String>, manager: SharedManager) {
        let name = name.into();
        let mut managers = self.lock();
        if managers.contains_key(&name) {
            panic!("a profile manager is already registered for: {}", name);
        }
        debug!("registered profile manager: {}", name);
        managers.insert(name, manager);
    }

    /// The names of all registered managers, in lexicographic order
    ///
    /// A snapshot of the map at the time of the call, not a live view.
    pub fn managers(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Look up the manager registered under `name`
    pub fn lookup(&self, name: &str) -> Option<SharedManager> {
        let manager = self.lock().get(name).cloned();
        if manager.is_none() {
            debug!("no profile manager registered for: {}", name);
        }
        manager
    }

    /// Look up the manager registered under `name`, reporting absence as
    /// [`Error::UnknownProfile`]
    pub fn get(&self, name: &str) -> Result<SharedManager> {
        self.lookup(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, SharedManager>> {
        // A poisoning panic can only be the duplicate-registration abort,
        // which leaves the map fully consistent.
        self.managers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry used by plugin-style self-registration
static REGISTRY: Registry = Registry::new();

/// Register a profile manager in the process-wide registry
///
/// # Panics
///
/// Panics if a manager is already registered under `name`; see
/// [`Registry::register`].
pub fn register(name: impl Into<String>, manager: SharedManager) {
    REGISTRY.register(name, manager);
}

/// The names, in lexicographic order, of all currently registered profile
/// managers
pub fn managers() -> Vec<String> {
    REGISTRY.managers()
}

/// Look up a profile manager in the process-wide registry
pub fn lookup_manager(name: &str) -> Option<SharedManager> {
    REGISTRY.lookup(name)
}
