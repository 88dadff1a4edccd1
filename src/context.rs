use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use login_config_core::error::LoginConfigError;
use login_config_core::LoginConfigResult;

/// Context name the driver registers its own Kerberos login under.
pub const DRIVER_CONTEXT_NAME: &str = "SQLDriver";

/// Key identifying a named set of login modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContextName(String);

impl ContextName {
    pub fn new<T: Into<String>>(name: T) -> LoginConfigResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoginConfigError::invalid_context_name("context name must not be empty"));
        }
        Ok(Self(name))
    }

    /// The driver's reserved context name.
    pub fn driver() -> Self {
        Self(DRIVER_CONTEXT_NAME.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_driver(&self) -> bool {
        self.0 == DRIVER_CONTEXT_NAME
    }
}

impl Default for ContextName {
    fn default() -> Self {
        Self::driver()
    }
}

impl TryFrom<String> for ContextName {
    type Error = LoginConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContextName> for String {
    fn from(value: ContextName) -> Self {
        value.0
    }
}

impl AsRef<str> for ContextName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ContextName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for ContextName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(ContextName::new(""), Err(LoginConfigError::InvalidContextName(_))));
    }

    #[test]
    fn default_is_driver_context() {
        let name = ContextName::default();
        assert!(name.is_driver());
        assert_eq!(name, DRIVER_CONTEXT_NAME);
    }

    #[test]
    fn other_names_are_not_driver() {
        let name = ContextName::new("CLIENT_CONTEXT_NAME").unwrap();
        assert!(!name.is_driver());
        assert_eq!(name.to_string(), "CLIENT_CONTEXT_NAME");
    }

    #[test]
    fn deserialization_rejects_empty_name() {
        assert!(serde_json::from_str::<ContextName>("\"\"").is_err());
        let name: ContextName = serde_json::from_str("\"Kafka\"").unwrap();
        assert_eq!(name, "Kafka");
    }
}
