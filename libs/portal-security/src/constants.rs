//! Well-known identifiers.

/// Tenant that owns the platform itself. Super admins are only honoured here.
pub const PLATFORM_TENANT_ID: &str = "ilytat-hq";

