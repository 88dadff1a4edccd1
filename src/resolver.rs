use std::sync::Arc;

use serde::{Deserialize, Serialize};

use login_config_core::logging::{debug, trace};
use login_config_core::LoginConfigResult;

use crate::context::ContextName;
use crate::platform::{HostPlatform, PlatformProbe};
use crate::registry::{self, ConfigurationRegistry};
use crate::settings::KerberosAuthSettings;
use crate::source::{DriverDefaultSource, SharedSource};

/// Where a connection attempt takes its login configuration from.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum ConnectionAuthMode {
    /// The driver's built-in source; never reads the registry.
    UseDriverDefault,
    /// Whatever the registry holds at resolution time.
    UseGlobalRegistry,
}

impl ConnectionAuthMode {
    pub fn from_flag(use_driver_default: bool) -> Self {
        if use_driver_default {
            Self::UseDriverDefault
        } else {
            Self::UseGlobalRegistry
        }
    }
}

/// Outcome of resolving a connection's Kerberos settings.
#[derive(Debug, Clone)]
pub enum AuthResolution {
    LoginModules {
        context: ContextName,
        mode: ConnectionAuthMode,
        source: SharedSource,
    },
    /// Native credential requested; login modules are not consulted.
    NativeCredential,
}

/// Picks the configuration source for each connection attempt.
///
/// Creating a resolver counts as first use of the driver: it installs the
/// driver's delegating source into its registry unless that already happened.
#[derive(Debug)]
pub struct ConnectionAuthResolver<'r> {
    registry: &'r ConfigurationRegistry,
    driver_default: Arc<DriverDefaultSource>,
}

impl ConnectionAuthResolver<'static> {
    /// A resolver over the process-wide registry for the running host.
    pub fn global() -> LoginConfigResult<Self> {
        Self::new(registry::global(), &HostPlatform)
    }
}

impl<'r> ConnectionAuthResolver<'r> {
    pub fn new<P: PlatformProbe + ?Sized>(registry: &'r ConfigurationRegistry, probe: &P) -> LoginConfigResult<Self> {
        let driver_default = DriverDefaultSource::from_platform(probe)?;
        registry.install_driver_delegation(&driver_default);
        Ok(Self {
            registry,
            driver_default: Arc::new(driver_default),
        })
    }

    pub fn driver_default(&self) -> &DriverDefaultSource {
        &self.driver_default
    }

    pub fn resolve(&self, use_driver_default: bool) -> SharedSource {
        self.resolve_mode(ConnectionAuthMode::from_flag(use_driver_default))
    }

    pub fn resolve_mode(&self, mode: ConnectionAuthMode) -> SharedSource {
        trace!(mode = ?mode, "resolving login configuration source");
        match mode {
            ConnectionAuthMode::UseDriverDefault => Arc::clone(&self.driver_default) as SharedSource,
            ConnectionAuthMode::UseGlobalRegistry => self.registry.current(),
        }
    }

    pub fn resolve_settings(&self, settings: &KerberosAuthSettings) -> AuthResolution {
        if settings.use_default_gss_credential() {
            debug!("native GSS credential requested, skipping login configuration");
            return AuthResolution::NativeCredential;
        }
        let mode = ConnectionAuthMode::from_flag(settings.use_default_jaas_config());
        debug!(mode = ?mode, context = %settings.jaas_configuration_name(), "resolved login configuration");
        AuthResolution::LoginModules {
            context: settings.jaas_configuration_name().clone(),
            mode,
            source: self.resolve_mode(mode),
        }
    }
}
