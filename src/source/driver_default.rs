use login_config_core::LoginConfigResult;

use crate::context::DRIVER_CONTEXT_NAME;
use crate::descriptor::{ControlFlag, LoginModuleDescriptor};
use crate::platform::{PlatformProbe, RuntimeFamily};
use crate::source::ConfigurationSource;

/// The driver's built-in configuration: one required Kerberos login module
/// under [`DRIVER_CONTEXT_NAME`] and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDefaultSource {
    family: RuntimeFamily,
    descriptor: LoginModuleDescriptor,
}

impl DriverDefaultSource {
    pub fn new(family: RuntimeFamily) -> Self {
        Self {
            family,
            descriptor: LoginModuleDescriptor::new(family.login_module(), ControlFlag::Required),
        }
    }

    /// Fails when the probe cannot name a known runtime family.
    pub fn from_platform<P: PlatformProbe + ?Sized>(probe: &P) -> LoginConfigResult<Self> {
        Ok(Self::new(probe.runtime_family()?))
    }

    pub fn family(&self) -> RuntimeFamily {
        self.family
    }

    pub fn descriptor(&self) -> &LoginModuleDescriptor {
        &self.descriptor
    }
}

impl ConfigurationSource for DriverDefaultSource {
    fn lookup(&self, context: &str) -> Vec<LoginModuleDescriptor> {
        if context == DRIVER_CONTEXT_NAME {
            vec![self.descriptor.clone()]
        } else {
            Vec::new()
        }
    }
}
