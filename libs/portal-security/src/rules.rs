//! Admin rules shared by the route guards and the server access verifier.

use crate::claims::{Claims, Role};

/// The rule that justified admin access in [`admin_rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRule {
    /// `role == "admin"`.
    RoleAdmin,
    /// `admin == true`, whatever the role.
    AdminFlag,
    /// `role == "super"` inside the platform tenant.
    PlatformSuper,
}

/// Admin rule used for navigation into admin-only pages.
///
/// Rules are evaluated in order and the first match wins:
/// 1. `role` is `admin`
/// 2. the `admin` flag is set
/// 3. `role` is `super` and the tenant is the platform tenant
#[must_use]
pub fn admin_rule(claims: &Claims) -> Option<AdminRule> {
    if claims.role == Some(Role::Admin) {
        return Some(AdminRule::RoleAdmin);
    }
    if claims.admin {
        return Some(AdminRule::AdminFlag);
    }
    if claims.role == Some(Role::Super) && claims.is_platform_tenant() {
        return Some(AdminRule::PlatformSuper);
    }
    None
}

/// Outcome of [`platform_admin_grant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformGrant {
    /// Caller holds `super` inside the platform tenant.
    pub is_super: bool,
}

/// Admin rule used when verifying credentials on the server.
///
/// Stricter than [`admin_rule`]: admin privilege (`admin` or `super` in
/// `role`/`roles`, or the `admin` flag) only counts inside the platform tenant.
#[must_use]
pub fn platform_admin_grant(claims: &Claims) -> Option<PlatformGrant> {
    if !claims.is_platform_tenant() {
        return None;
    }

    let is_super = claims.has_role(Role::Super);
    let has_admin_privilege = is_super || claims.has_role(Role::Admin) || claims.admin;

    has_admin_privilege.then_some(PlatformGrant { is_super })
}
