use serde::{Deserialize, Serialize};

use login_config_core::error::LoginConfigError;
use login_config_core::LoginConfigResult;

pub const MIT_KRB5_LOGIN_MODULE: &str = "krb5::mit::Krb5LoginModule";
pub const HEIMDAL_KRB5_LOGIN_MODULE: &str = "krb5::heimdal::Krb5LoginModule";

/// Environment variable overriding runtime family detection (`mit` or `heimdal`).
pub const RUNTIME_FAMILY_VAR: &str = "KRB5_RUNTIME_FAMILY";

/// The two Kerberos runtime families the driver knows how to log in with.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeFamily {
    Mit,
    Heimdal,
}

impl RuntimeFamily {
    pub fn login_module(&self) -> &'static str {
        match self {
            Self::Mit => MIT_KRB5_LOGIN_MODULE,
            Self::Heimdal => HEIMDAL_KRB5_LOGIN_MODULE,
        }
    }

    pub fn from_name(name: &str) -> LoginConfigResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "heimdal" => Ok(Self::Heimdal),
            _ => Err(LoginConfigError::platform_module_resolution(name)),
        }
    }

    /// Maps a `std::env::consts::OS` value to the Kerberos implementation its
    /// system libraries ship.
    pub fn for_target_os(os: &str) -> LoginConfigResult<Self> {
        match os {
            "macos" | "ios" | "freebsd" | "netbsd" | "dragonfly" => Ok(Self::Heimdal),
            "linux" | "android" | "solaris" | "illumos" => Ok(Self::Mit),
            _ => Err(LoginConfigError::platform_module_resolution(os)),
        }
    }
}

/// Determines which runtime family is active in this process.
pub trait PlatformProbe {
    fn runtime_family(&self) -> LoginConfigResult<RuntimeFamily>;
}

impl PlatformProbe for RuntimeFamily {
    fn runtime_family(&self) -> LoginConfigResult<RuntimeFamily> {
        Ok(*self)
    }
}

/// Probes the running host: the [`RUNTIME_FAMILY_VAR`] override first, then
/// the target operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn runtime_family(&self) -> LoginConfigResult<RuntimeFamily> {
        let family_override = std::env::var(RUNTIME_FAMILY_VAR).ok();
        host_family(family_override.as_deref(), std::env::consts::OS)
    }
}

fn host_family(family_override: Option<&str>, os: &str) -> LoginConfigResult<RuntimeFamily> {
    match family_override {
        Some(name) if !name.trim().is_empty() => RuntimeFamily::from_name(name),
        _ => RuntimeFamily::for_target_os(os),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_map_to_distinct_modules() {
        assert_eq!(RuntimeFamily::Mit.login_module(), MIT_KRB5_LOGIN_MODULE);
        assert_eq!(RuntimeFamily::Heimdal.login_module(), HEIMDAL_KRB5_LOGIN_MODULE);
        assert_ne!(MIT_KRB5_LOGIN_MODULE, HEIMDAL_KRB5_LOGIN_MODULE);
    }

    #[test]
    fn family_names_parse() {
        assert_eq!(RuntimeFamily::from_name("MIT").unwrap(), RuntimeFamily::Mit);
        assert_eq!(RuntimeFamily::from_name(" heimdal ").unwrap(), RuntimeFamily::Heimdal);
    }

    #[test]
    fn unknown_family_name_fails() {
        match RuntimeFamily::from_name("sspi") {
            Err(LoginConfigError::PlatformModuleResolution(x)) => assert_eq!(x.platform(), "sspi"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn target_os_mapping() {
        assert_eq!(RuntimeFamily::for_target_os("linux").unwrap(), RuntimeFamily::Mit);
        assert_eq!(RuntimeFamily::for_target_os("macos").unwrap(), RuntimeFamily::Heimdal);
        assert_eq!(RuntimeFamily::for_target_os("freebsd").unwrap(), RuntimeFamily::Heimdal);
        assert!(RuntimeFamily::for_target_os("windows").is_err());
    }

    #[test]
    fn host_override_wins_over_target_os() {
        assert_eq!(host_family(Some("heimdal"), "linux").unwrap(), RuntimeFamily::Heimdal);
        assert_eq!(host_family(Some("MIT"), "windows").unwrap(), RuntimeFamily::Mit);
    }

    #[test]
    fn blank_host_override_falls_back_to_target_os() {
        assert_eq!(host_family(Some("  "), "macos").unwrap(), RuntimeFamily::Heimdal);
        assert_eq!(host_family(None, "linux").unwrap(), RuntimeFamily::Mit);
    }

    #[test]
    fn unknown_host_platform_fails() {
        assert!(matches!(host_family(None, "windows"), Err(LoginConfigError::PlatformModuleResolution(_))));
        match host_family(Some("sspi"), "linux") {
            Err(LoginConfigError::PlatformModuleResolution(x)) => assert_eq!(x.platform(), "sspi"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn host_platform_agrees_with_its_inputs() {
        let family_override = std::env::var(RUNTIME_FAMILY_VAR).ok();
        let expected = host_family(family_override.as_deref(), std::env::consts::OS).ok();
        assert_eq!(HostPlatform.runtime_family().ok(), expected);
    }

    #[test]
    fn fixed_family_probe() {
        assert_eq!(RuntimeFamily::Heimdal.runtime_family().unwrap(), RuntimeFamily::Heimdal);
    }
}
