use std::fmt::Debug;
use std::sync::Arc;

pub use delegating::*;
pub use driver_default::*;
pub use empty::*;
pub use static_source::*;

use crate::descriptor::LoginModuleDescriptor;

mod delegating;
mod driver_default;
mod empty;
mod static_source;

/// Supplies the login modules registered under a context name.
///
/// An unknown context yields an empty list; lookups never fail.
pub trait ConfigurationSource: Debug + Send + Sync {
    fn lookup(&self, context: &str) -> Vec<LoginModuleDescriptor>;
}

pub type SharedSource = Arc<dyn ConfigurationSource>;
