use crate::descriptor::LoginModuleDescriptor;
use crate::source::ConfigurationSource;

/// A source with no entries for any context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmptySource;

impl ConfigurationSource for EmptySource {
    fn lookup(&self, _context: &str) -> Vec<LoginModuleDescriptor> {
        Vec::new()
    }
}
