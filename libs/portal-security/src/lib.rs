#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Shared security types for the portal.
//!
//! - [`Identity`] - the authenticated principal, if any
//! - [`Claims`] - typed view over the custom claims attached to a token
//! - [`admin_rule`] / [`platform_admin_grant`] - the admin rules used by the
//!   route guards and the server access verifier

pub mod claims;
pub mod constants;
pub mod identity;
pub mod rules;

pub use claims::{ClaimDecodeError, Claims, RawClaims, Role};
pub use identity::Identity;
pub use rules::{AdminRule, PlatformGrant, admin_rule, platform_admin_grant};
