//! Well-known role name constants.
//!
//! These must match the statically provisioned accounts in the api crate's
//! server configuration.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_MANAGER: &str = "MANAGER";
pub const ROLE_VIEWER: &str = "VIEWER";
