use login_config_core::error::LoginConfigError;
use login_config_core::LoginConfigResult;

use crate::context::ContextName;
use crate::descriptor::LoginModuleDescriptor;
use crate::native::NativeGss;
use crate::resolver::{AuthResolution, ConnectionAuthMode, ConnectionAuthResolver};
use crate::settings::KerberosAuthSettings;

/// What the Kerberos handshake should log in with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginPlan {
    LoginModules {
        context: ContextName,
        mode: ConnectionAuthMode,
        modules: Vec<LoginModuleDescriptor>,
    },
    NativeCredential,
}

/// Called by the handshake right before GSSAPI context establishment.
///
/// Fails with `ConfigurationUnavailable` when the resolved source has no
/// login modules for the connection's context, and with
/// `UnsupportedNativeCredential` when a native credential is requested but
/// the capability is off.
pub fn prepare_login(
    resolver: &ConnectionAuthResolver<'_>,
    settings: &KerberosAuthSettings,
    native: NativeGss,
) -> LoginConfigResult<LoginPlan> {
    match resolver.resolve_settings(settings) {
        AuthResolution::NativeCredential => {
            native.ensure_enabled()?;
            Ok(LoginPlan::NativeCredential)
        }
        AuthResolution::LoginModules { context, mode, source } => {
            let modules = source.lookup(context.as_str());
            if modules.is_empty() {
                return Err(LoginConfigError::configuration_unavailable(context.as_str()));
            }
            Ok(LoginPlan::LoginModules { context, mode, modules })
        }
    }
}
