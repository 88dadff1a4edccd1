use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use login_config_core::error::LoginConfigError;
use login_config_core::LoginConfigResult;

use crate::context::ContextName;

pub const USE_DEFAULT_JAAS_CONFIG: &str = "useDefaultJaasConfig";
pub const USE_DEFAULT_GSS_CREDENTIAL: &str = "useDefaultGSSCredential";
pub const JAAS_CONFIGURATION_NAME: &str = "jaasConfigurationName";

/// Kerberos related settings of a single connection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", default)]
#[serde(rename_all = "camelCase", default)]
pub struct KerberosAuthSettings {
    /// Log in with the driver's built-in configuration instead of the
    /// process-wide registry.
    use_default_jaas_config: bool,
    /// Use the native GSS credential and skip login modules entirely.
    #[serde(rename = "useDefaultGSSCredential")]
    use_default_gss_credential: bool,
    jaas_configuration_name: ContextName,
}

impl KerberosAuthSettings {
    /// Reads the Kerberos settings out of already split connection
    /// properties. Keys match case-insensitively; unrelated keys are skipped.
    pub fn from_properties<I, K, V>(properties: I) -> LoginConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, value) in properties {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key.eq_ignore_ascii_case(USE_DEFAULT_JAAS_CONFIG) {
                settings.use_default_jaas_config = parse_bool(key, value)?;
            } else if key.eq_ignore_ascii_case(USE_DEFAULT_GSS_CREDENTIAL) {
                settings.use_default_gss_credential = parse_bool(key, value)?;
            } else if key.eq_ignore_ascii_case(JAAS_CONFIGURATION_NAME) {
                settings.jaas_configuration_name = ContextName::new(value.trim())
                    .map_err(|_e| LoginConfigError::invalid_property(key, value))?;
            }
        }
        Ok(settings)
    }

    pub fn use_default_jaas_config(&self) -> bool {
        self.use_default_jaas_config
    }

    pub fn use_default_gss_credential(&self) -> bool {
        self.use_default_gss_credential
    }

    pub fn jaas_configuration_name(&self) -> &ContextName {
        &self.jaas_configuration_name
    }
}

fn parse_bool(key: &str, value: &str) -> LoginConfigResult<bool> {
    match value.trim() {
        x if x.eq_ignore_ascii_case("true") => Ok(true),
        x if x.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(LoginConfigError::invalid_property(key, value)),
    }
}
