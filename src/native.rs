use login_config_core::error::LoginConfigError;
use login_config_core::LoginConfigResult;

/// Environment variable that enables native GSS credentials for the process.
pub const NATIVE_GSS_VAR: &str = "KRB5_USE_NATIVE_GSS";

/// Whether the process was started with native GSS credentials enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeGss {
    enabled: bool,
}

impl NativeGss {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn from_env() -> Self {
        let enabled = std::env::var(NATIVE_GSS_VAR)
            .map(|value| {
                let value = value.trim();
                value == "1" || value.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn ensure_enabled(&self) -> LoginConfigResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(LoginConfigError::unsupported_native_credential(NATIVE_GSS_VAR))
        }
    }
}

/// Acquires the default Kerberos initiator credential from the system
/// credential cache.
#[cfg(feature = "native-gss")]
pub fn acquire_default_credential(native: NativeGss) -> LoginConfigResult<libgssapi::credential::Cred> {
    use libgssapi::credential::{Cred, CredUsage};
    use libgssapi::oid::{OidSet, GSS_MECH_KRB5};

    native.ensure_enabled()?;
    let mut desired_mechs = OidSet::new().map_err(LoginConfigError::native_credential)?;
    desired_mechs.add(&GSS_MECH_KRB5).map_err(LoginConfigError::native_credential)?;
    Cred::acquire(None, None, CredUsage::Initiate, Some(&desired_mechs))
        .map_err(LoginConfigError::native_credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_capability_is_reported() {
        match NativeGss::new(false).ensure_enabled() {
            Err(LoginConfigError::UnsupportedNativeCredential(x)) => assert_eq!(x.capability(), NATIVE_GSS_VAR),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn enabled_capability_passes() {
        assert!(NativeGss::new(true).ensure_enabled().is_ok());
        assert!(!NativeGss::default().is_enabled());
    }
}
