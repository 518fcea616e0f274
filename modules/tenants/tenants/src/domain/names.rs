//! Tenant name resolution and reserved-tenant predicates.

use tenants_sdk::constants::{
    GLOBAL_TENANT, GLOBAL_TENANT_NAME, GLOBAL_TENANT_SYMBOL, PRIVATE_TENANT_SYMBOL,
    RESOLVED_GLOBAL_TENANT, RESOLVED_PRIVATE_TENANT,
};

/// Display name for the tenant a user is currently in.
///
/// An empty identifier, or the literal `"undefined"` a browser session may
/// have stored, is the global tenant. The user's own name and
/// `__user__` are the private tenant.
#[must_use]
pub fn resolve_tenant_name<'a>(tenant: &'a str, user_name: &str) -> &'a str {
    if tenant.is_empty() || tenant == "undefined" {
        return RESOLVED_GLOBAL_TENANT;
    }
    if tenant == user_name || tenant == PRIVATE_TENANT_SYMBOL {
        RESOLVED_PRIVATE_TENANT
    } else {
        tenant
    }
}

/// Maps the backend's `global_tenant` key to its display label.
///
/// Unlike [`resolve_tenant_name`] this looks at the backend name, not the
/// empty global symbol.
#[must_use]
pub fn format_tenant_name(tenant_name: &str) -> &str {
    if tenant_name == GLOBAL_TENANT_NAME {
        GLOBAL_TENANT.label
    } else {
        tenant_name
    }
}

#[must_use]
pub fn is_private_tenant(selected_tenant: Option<&str>) -> bool {
    selected_tenant == Some(PRIVATE_TENANT_SYMBOL)
}

/// Rendered private tenants may carry a suffix after `__user__`.
#[must_use]
pub fn is_rendering_private_tenant(selected_tenant: Option<&str>) -> bool {
    selected_tenant.is_some_and(|t| t.starts_with(PRIVATE_TENANT_SYMBOL))
}

#[must_use]
pub fn is_global_tenant(selected_tenant: Option<&str>) -> bool {
    selected_tenant == Some(GLOBAL_TENANT_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_empty_and_undefined_to_global() {
        assert_eq!(resolve_tenant_name("", "alice"), "Global");
        assert_eq!(resolve_tenant_name("undefined", "alice"), "Global");
    }

    #[test]
    fn resolve_maps_user_and_private_symbol_to_private() {
        assert_eq!(resolve_tenant_name("alice", "alice"), "Private");
        assert_eq!(resolve_tenant_name("__user__", "alice"), "Private");
    }

    #[test]
    fn resolve_keeps_other_tenants() {
        assert_eq!(resolve_tenant_name("finance", "alice"), "finance");
        // Global check wins over a user literally named "undefined"
        assert_eq!(resolve_tenant_name("undefined", "undefined"), "Global");
    }

    #[test]
    fn format_only_rewrites_backend_global_name() {
        assert_eq!(format_tenant_name("global_tenant"), "Global");
        assert_eq!(format_tenant_name(""), "");
        assert_eq!(format_tenant_name("Global"), "Global");
        assert_eq!(format_tenant_name("finance"), "finance");
    }

    #[test]
    fn predicates() {
        assert!(is_global_tenant(Some("")));
        assert!(!is_global_tenant(None));
        assert!(!is_global_tenant(Some("global_tenant")));

        assert!(is_private_tenant(Some("__user__")));
        assert!(!is_private_tenant(Some("__user__:extra")));
        assert!(!is_private_tenant(None));

        assert!(is_rendering_private_tenant(Some("__user__")));
        assert!(is_rendering_private_tenant(Some("__user__:extra")));
        assert!(!is_rendering_private_tenant(Some("finance")));
        assert!(!is_rendering_private_tenant(None));
    }
}
