//! Log macros for the login configuration crates.
//!
//! Built with the `tracing` feature these are `tracing`'s own macros. Without
//! it every call expands to `()` and its arguments are never evaluated. The
//! disabled forms are exported under hidden names so the crate root does not
//! grow bare `trace!`/`debug!`/`info!` macros.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __login_config_log_disabled {
    ($($t:tt)*) => {()};
}

#[cfg(not(feature = "tracing"))]
pub use crate::__login_config_log_disabled as debug;
#[cfg(not(feature = "tracing"))]
pub use crate::__login_config_log_disabled as info;
#[cfg(not(feature = "tracing"))]
pub use crate::__login_config_log_disabled as trace;

#[cfg(test)]
mod tests {
    use super::{debug, info, trace};

    #[test]
    fn macros_accept_structured_fields() {
        let family = "mit";
        trace!(family = ?family, "probing runtime family");
        debug!(context = %family, "resolved");
        info!("installed");
    }
}
