//! Reserved tenant identifiers, display labels, and permission tokens.
//!
//! These are process-wide immutable values; nothing derives them at runtime.

/// Backend key of the global tenant.
pub const GLOBAL_TENANT_NAME: &str = "global_tenant";

/// Identifier the console uses for the global tenant.
pub const GLOBAL_TENANT_SYMBOL: &str = "";

/// Identifier of the caller's private tenant.
pub const PRIVATE_TENANT_SYMBOL: &str = "__user__";

/// Backend name of the default tenant.
pub const DEFAULT_TENANT: &str = "default";

/// Text shown for the global tenant in a saved-objects table cell.
pub const GLOBAL_TENANT_RENDERING_TEXT: &str = "Global";

/// Text shown for a private tenant in a saved-objects table cell.
pub const PRIVATE_TENANT_RENDERING_TEXT: &str = "Private";

/// Display name a tenant identifier resolves to for the global tenant.
pub const RESOLVED_GLOBAL_TENANT: &str = "Global";

/// Display name returned for the caller's private tenant.
pub const RESOLVED_PRIVATE_TENANT: &str = "Private";

/// Action granting read access to a tenant.
pub const TENANT_READ_PERMISSION: &str = "kibana_all_read";

/// Action granting write access to a tenant.
pub const TENANT_WRITE_PERMISSION: &str = "kibana_all_write";

/// Placeholder shown when a role's tenant permission cannot be tied to one tenant.
pub const ROLE_VIEW_TENANT_INVALID_TEXT: &str = "N/A";

/// Label, value, and description of a synthesized tenant row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantSentinel {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// The global tenant as listed in the tenant table.
pub const GLOBAL_TENANT: TenantSentinel = TenantSentinel {
    label: "Global",
    value: GLOBAL_TENANT_SYMBOL,
    description: "Everyone can see it",
};

/// The caller's private tenant as listed in the tenant table.
pub const PRIVATE_TENANT: TenantSentinel = TenantSentinel {
    label: "Private",
    value: PRIVATE_TENANT_SYMBOL,
    description: "Only visible to the current logged in user",
};
