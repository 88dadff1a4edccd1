//! Shared error type and logging shims for the login configuration crates.

use error::LoginConfigError;

pub mod error;
pub mod logging;

pub type LoginConfigResult<T, E = LoginConfigError> = Result<T, E>;
