#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Route guards.
//!
//! Guards run before a page is rendered and produce a [`GuardDecision`]:
//! either let the navigation through or redirect somewhere else. Decisions
//! are plain values; the routing layer applies them through a [`Navigator`].
//!
//! - [`GuestGuard`] - pages for signed-out users (login); fail-open
//! - [`AuthGuard`] - pages that need any signed-in user; fail-closed
//! - [`AdminGuard`] - admin-only pages; fail-closed
//! - [`RouteGuard`] - maps path patterns to a [`RouteClass`] and dispatches

pub mod decision;
pub mod error;
pub mod guards;
pub mod navigation;
pub mod navigator;
pub mod policy;
pub mod router;

#[cfg(test)]
mod test_support;

pub use decision::{GuardDecision, NavigationMode};
pub use error::{GuardConfigError, GuardError};
pub use guards::{AdminGuard, AuthGuard, GuestGuard};
pub use navigation::{Navigation, RenderSide};
pub use navigator::{Navigator, apply};
pub use policy::{ErrorPolicy, RouteClass};
pub use router::RouteGuard;

/// Application root.
pub const ROOT_PATH: &str = "/";
/// Sign-in page.
pub const LOGIN_PATH: &str = "/login";
/// Prefix of the admin section.
pub const ADMIN_PREFIX: &str = "/admin";
/// Query parameter carrying the post-login destination.
pub const REDIRECT_PARAM: &str = "redirect";
