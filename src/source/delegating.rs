use crate::context::DRIVER_CONTEXT_NAME;
use crate::descriptor::LoginModuleDescriptor;
use crate::platform::RuntimeFamily;
use crate::source::{ConfigurationSource, DriverDefaultSource, SharedSource};

/// Answers the driver context itself and forwards every other context to the
/// source that was active before the driver installed this wrapper.
#[derive(Debug, Clone)]
pub struct DelegatingSource {
    driver: DriverDefaultSource,
    prior: SharedSource,
}

impl DelegatingSource {
    pub fn new(prior: SharedSource, family: RuntimeFamily) -> Self {
        Self::with_driver_default(prior, DriverDefaultSource::new(family))
    }

    pub fn with_driver_default(prior: SharedSource, driver: DriverDefaultSource) -> Self {
        Self { driver, prior }
    }
}

impl ConfigurationSource for DelegatingSource {
    fn lookup(&self, context: &str) -> Vec<LoginModuleDescriptor> {
        // The prior source is never consulted for the driver context.
        if context == DRIVER_CONTEXT_NAME {
            self.driver.lookup(context)
        } else {
            self.prior.lookup(context)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::descriptor::ControlFlag;
    use crate::platform::MIT_KRB5_LOGIN_MODULE;
    use crate::source::{EmptySource, StaticSource};

    fn prior() -> StaticSource {
        StaticSource::new()
            .with_entry("Kafka", vec![LoginModuleDescriptor::new("kafka.Krb5", ControlFlag::Sufficient)])
            .with_entry(DRIVER_CONTEXT_NAME, vec![LoginModuleDescriptor::new("custom.Module", ControlFlag::Optional)])
    }

    #[test]
    fn forwards_other_contexts_verbatim() {
        let prior = prior();
        let source = DelegatingSource::new(Arc::new(prior.clone()), RuntimeFamily::Mit);
        assert_eq!(source.lookup("Kafka"), prior.lookup("Kafka"));
        assert_eq!(source.lookup("Missing"), prior.lookup("Missing"));
        assert!(source.lookup("Missing").is_empty());
    }

    #[test]
    fn overrides_driver_context_even_when_prior_has_entry() {
        let source = DelegatingSource::new(Arc::new(prior()), RuntimeFamily::Mit);
        let modules = source.lookup(DRIVER_CONTEXT_NAME);
        assert_eq!(modules, vec![LoginModuleDescriptor::new(MIT_KRB5_LOGIN_MODULE, ControlFlag::Required)]);
    }

    #[test]
    fn wraps_empty_prior() {
        let source = DelegatingSource::new(Arc::new(EmptySource), RuntimeFamily::Mit);
        assert_eq!(source.lookup(DRIVER_CONTEXT_NAME).len(), 1);
        assert!(source.lookup("Kafka").is_empty());
    }
}
