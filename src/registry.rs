use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::{Lazy, OnceCell};

use login_config_core::logging::{debug, info};

use crate::source::{DelegatingSource, DriverDefaultSource, EmptySource, SharedSource};

static GLOBAL_REGISTRY: Lazy<ConfigurationRegistry> = Lazy::new(ConfigurationRegistry::new);

/// The process-wide registry. Any code in the process may replace its
/// contents at any time.
pub fn global() -> &'static ConfigurationRegistry {
    &GLOBAL_REGISTRY
}

/// A slot holding the currently active configuration source.
///
/// Reads and replacements go through an atomically swapped pointer, so a
/// reader always sees either the old or the new source in full.
pub struct ConfigurationRegistry {
    slot: ArcSwap<SharedSource>,
    driver_installed: OnceCell<()>,
}

impl ConfigurationRegistry {
    pub fn new() -> Self {
        Self::with_source(Arc::new(EmptySource))
    }

    pub fn with_source(source: SharedSource) -> Self {
        Self {
            slot: ArcSwap::from_pointee(source),
            driver_installed: OnceCell::new(),
        }
    }

    pub fn current(&self) -> SharedSource {
        Arc::clone(&**self.slot.load())
    }

    /// Installs `source`, discarding whatever was there. Wrap the previous
    /// source in a [`DelegatingSource`] first to keep its other contexts.
    pub fn replace(&self, source: SharedSource) {
        debug!(source = ?source, "replacing active login configuration");
        self.slot.store(Arc::new(source));
    }

    /// Wraps the current source in a [`DelegatingSource`] the first time it
    /// is called on this registry. Returns whether this call did the install.
    pub fn install_driver_delegation(&self, driver: &DriverDefaultSource) -> bool {
        let mut installed = false;
        self.driver_installed.get_or_init(|| {
            self.slot.rcu(|prior| {
                let delegating: SharedSource =
                    Arc::new(DelegatingSource::with_driver_default(Arc::clone(&**prior), driver.clone()));
                Arc::new(delegating)
            });
            installed = true;
        });
        if installed {
            info!(family = ?driver.family(), "installed driver login configuration");
        }
        installed
    }

    pub fn driver_installed(&self) -> bool {
        self.driver_installed.get().is_some()
    }
}

impl Default for ConfigurationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ConfigurationRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationRegistry")
            .field("current", &self.current())
            .field("driver_installed", &self.driver_installed())
            .finish()
    }
}
