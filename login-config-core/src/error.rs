use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LoginConfigError {
    ConfigurationUnavailable(ConfigurationUnavailableError),
    UnsupportedNativeCredential(UnsupportedNativeCredentialError),
    PlatformModuleResolution(PlatformModuleResolutionError),
    InvalidContextName(InvalidContextNameError),
    InvalidProperty(InvalidPropertyError),
    NativeCredential(NativeCredentialError),
}

impl LoginConfigError {
    pub fn configuration_unavailable<T: Into<ConfigurationUnavailableError>>(context: T) -> Self {
        Self::ConfigurationUnavailable(context.into())
    }

    pub fn unsupported_native_credential<T: Into<UnsupportedNativeCredentialError>>(capability: T) -> Self {
        Self::UnsupportedNativeCredential(capability.into())
    }

    pub fn platform_module_resolution<T: Into<PlatformModuleResolutionError>>(platform: T) -> Self {
        Self::PlatformModuleResolution(platform.into())
    }

    pub fn invalid_context_name<T: Into<InvalidContextNameError>>(message: T) -> Self {
        Self::InvalidContextName(message.into())
    }

    pub fn invalid_property<T: Into<String>, U: Into<String>>(key: T, value: U) -> Self {
        Self::InvalidProperty((key, value).into())
    }

    pub fn native_credential<T: Into<NativeCredentialError>>(error: T) -> Self {
        Self::NativeCredential(error.into())
    }
}

/// The resolved configuration source has no login modules for the context
/// the handshake asked for.
#[derive(Debug)]
pub struct ConfigurationUnavailableError {
    context: String,
}

impl ConfigurationUnavailableError {
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl<T: Into<String>> From<T> for ConfigurationUnavailableError {
    fn from(value: T) -> Self {
        Self {
            context: value.into()
        }
    }
}

impl Display for ConfigurationUnavailableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "No login modules configured for the driver context '{}'", self.context)
    }
}

#[derive(Debug)]
pub struct UnsupportedNativeCredentialError {
    capability: String,
}

impl UnsupportedNativeCredentialError {
    pub fn capability(&self) -> &str {
        &self.capability
    }
}

impl<T: Into<String>> From<T> for UnsupportedNativeCredentialError {
    fn from(value: T) -> Self {
        Self {
            capability: value.into()
        }
    }
}

impl Display for UnsupportedNativeCredentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Native GSS credentials were requested but {} is not enabled", self.capability)
    }
}

#[derive(Debug)]
pub struct PlatformModuleResolutionError {
    platform: String,
}

impl PlatformModuleResolutionError {
    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl<T: Into<String>> From<T> for PlatformModuleResolutionError {
    fn from(value: T) -> Self {
        Self {
            platform: value.into()
        }
    }
}

impl Display for PlatformModuleResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unable to determine a Kerberos login module for platform '{}'", self.platform)
    }
}

#[derive(Debug)]
pub struct InvalidContextNameError {
    message: String,
}

impl<T: Into<String>> From<T> for InvalidContextNameError {
    fn from(value: T) -> Self {
        Self {
            message: value.into()
        }
    }
}

impl Display for InvalidContextNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid context name: {}", self.message)
    }
}

#[derive(Debug)]
pub struct InvalidPropertyError {
    key: String,
    value: String,
}

impl InvalidPropertyError {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<T: Into<String>, U: Into<String>> From<(T, U)> for InvalidPropertyError {
    fn from(value: (T, U)) -> Self {
        Self {
            key: value.0.into(),
            value: value.1.into(),
        }
    }
}

impl Display for InvalidPropertyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid value '{}' for connection property '{}'", self.value, self.key)
    }
}

#[derive(Debug)]
pub struct NativeCredentialError {
    error: Box<dyn Error + Send + Sync>,
}

impl<T: Into<Box<dyn Error + Send + Sync>>> From<T> for NativeCredentialError {
    fn from(value: T) -> Self {
        Self {
            error: value.into()
        }
    }
}

impl Display for NativeCredentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Native credential acquisition failed with error: {}", self.error)
    }
}

impl Display for LoginConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationUnavailable(x) => write!(f, "{}", x),
            Self::UnsupportedNativeCredential(x) => write!(f, "{}", x),
            Self::PlatformModuleResolution(x) => write!(f, "{}", x),
            Self::InvalidContextName(x) => write!(f, "{}", x),
            Self::InvalidProperty(x) => write!(f, "{}", x),
            Self::NativeCredential(x) => write!(f, "{}", x),
        }
    }
}

impl Error for LoginConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NativeCredential(x) => Some(&*x.error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_unavailable_names_context() {
        let err = LoginConfigError::configuration_unavailable("SQLDriver");
        assert_eq!(err.to_string(), "No login modules configured for the driver context 'SQLDriver'");
        match err {
            LoginConfigError::ConfigurationUnavailable(x) => assert_eq!(x.context(), "SQLDriver"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unsupported_native_credential_names_capability() {
        let err = LoginConfigError::unsupported_native_credential("KRB5_USE_NATIVE_GSS");
        assert!(err.to_string().contains("KRB5_USE_NATIVE_GSS"));
    }

    #[test]
    fn invalid_property_reports_key_and_value() {
        let err = LoginConfigError::invalid_property("useDefaultJaasConfig", "maybe");
        assert_eq!(err.to_string(), "Invalid value 'maybe' for connection property 'useDefaultJaasConfig'");
    }

    #[test]
    fn native_credential_exposes_source() {
        let err = LoginConfigError::native_credential("no credentials cache found");
        assert!(err.source().is_some());
        assert!(err.to_string().ends_with("no credentials cache found"));
    }
}
