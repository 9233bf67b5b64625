//! Authentication module: password digesting, input validation, session keys.

mod password;
mod validate;

pub use password::{digest_password, verify_password};
pub use validate::{is_valid_email, is_valid_password};

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
