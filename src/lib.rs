//! # krb5_login_config
//!
//! Decides which Kerberos login-module configuration a database connection
//! logs in with.
//!
//! A process can hold several competing configurations: the process-wide
//! [`registry`] that any code may overwrite, the driver's own built-in
//! [`DriverDefaultSource`], and the native GSS credential that bypasses login
//! modules altogether. This crate provides:
//! - **Sources** ([`source`]): the [`ConfigurationSource`] trait and its
//!   empty, static, driver-default and delegating implementations.
//! - **Registry** ([`registry`]): the atomically swapped process-wide slot.
//! - **Resolver** ([`resolver`]): per-connection selection between the
//!   driver default and the registry, or the native credential.
//! - **Login preparation** ([`login`]): the entry point a handshake calls to
//!   obtain its login modules or a configuration error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use krb5_login_config::{prepare_login, ConnectionAuthResolver, KerberosAuthSettings, LoginPlan, NativeGss};
//!
//! fn main() -> login_config_core::LoginConfigResult<()> {
//!     let resolver = ConnectionAuthResolver::global()?;
//!     let settings = KerberosAuthSettings::from_properties([("useDefaultJaasConfig", "true")])?;
//!     if let LoginPlan::LoginModules { modules, .. } = prepare_login(&resolver, &settings, NativeGss::from_env())? {
//!         println!("logging in with {}", modules[0].module());
//!     }
//!     Ok(())
//! }
//! ```

pub use context::*;
pub use descriptor::*;
pub use login::*;
pub use native::*;
pub use platform::*;
pub use resolver::*;
pub use settings::*;
pub use source::*;

mod context;
mod descriptor;
/// Handshake-facing login preparation.
pub mod login;
mod native;
mod platform;
/// The process-wide configuration registry.
pub mod registry;
/// Per-connection configuration source selection.
pub mod resolver;
mod settings;
/// Configuration sources.
pub mod source;
