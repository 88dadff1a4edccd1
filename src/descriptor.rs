use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use login_config_core::error::LoginConfigError;

/// How a login module's outcome contributes to the overall login.
#[repr(u8)]
#[derive(Debug, Eq, PartialEq, TryFromPrimitive, Serialize, Deserialize, Copy, Clone, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ControlFlag {
    Required = 0x0,
    Requisite = 0x1,
    Sufficient = 0x2,
    Optional = 0x3,
}

impl ControlFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Requisite => "requisite",
            Self::Sufficient => "sufficient",
            Self::Optional => "optional",
        }
    }
}

impl FromStr for ControlFlag {
    type Err = LoginConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "requisite" => Ok(Self::Requisite),
            "sufficient" => Ok(Self::Sufficient),
            "optional" => Ok(Self::Optional),
            _ => Err(LoginConfigError::invalid_property("controlFlag", s)),
        }
    }
}

impl Display for ControlFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Module specific option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single login module entry: which module to run, how its result counts,
/// and the options handed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginModuleDescriptor {
    module: String,
    control_flag: ControlFlag,
    #[serde(default)]
    options: HashMap<String, OptionValue>,
}

impl LoginModuleDescriptor {
    pub fn new<T: Into<String>>(module: T, control_flag: ControlFlag) -> Self {
        Self {
            module: module.into(),
            control_flag,
            options: HashMap::new(),
        }
    }

    pub fn with_option<K: Into<String>, V: Into<OptionValue>>(mut self, key: K, value: V) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn control_flag(&self) -> ControlFlag {
        self.control_flag
    }

    pub fn options(&self) -> &HashMap<String, OptionValue> {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }
}
