use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::LoginModuleDescriptor;
use crate::source::ConfigurationSource;

/// An in-memory table of context names to login modules.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticSource {
    entries: HashMap<String, Vec<LoginModuleDescriptor>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry<T: Into<String>>(mut self, context: T, descriptors: Vec<LoginModuleDescriptor>) -> Self {
        self.entries.insert(context.into(), descriptors);
        self
    }

    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T: Into<String>> FromIterator<(T, Vec<LoginModuleDescriptor>)> for StaticSource {
    fn from_iter<I: IntoIterator<Item = (T, Vec<LoginModuleDescriptor>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(context, descriptors)| (context.into(), descriptors)).collect(),
        }
    }
}

impl ConfigurationSource for StaticSource {
    fn lookup(&self, context: &str) -> Vec<LoginModuleDescriptor> {
        self.entries.get(context).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ControlFlag;

    #[test]
    fn lookup_returns_registered_entries_in_order() {
        let first = LoginModuleDescriptor::new("krb5", ControlFlag::Requisite);
        let second = LoginModuleDescriptor::new("ldap", ControlFlag::Optional);
        let source = StaticSource::new().with_entry("Kafka", vec![first.clone(), second.clone()]);
        assert_eq!(source.lookup("Kafka"), vec![first, second]);
        assert!(source.lookup("Other").is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let source: StaticSource = vec![("A", vec![LoginModuleDescriptor::new("krb5", ControlFlag::Required)])]
            .into_iter()
            .collect();
        assert_eq!(source.contexts().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn deserializes_from_context_table() {
        let json = r#"{"CLIENT_CONTEXT_NAME":[{"module":"krb5","control_flag":"required"}]}"#;
        let source: StaticSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.lookup("CLIENT_CONTEXT_NAME").len(), 1);
    }
}
