//! Role tenant-permission classification and display join.

use tenants_sdk::constants::{
    ROLE_VIEW_TENANT_INVALID_TEXT, TENANT_READ_PERMISSION, TENANT_WRITE_PERMISSION,
};
use tenants_sdk::{
    RoleTenantPermission, RoleTenantPermissionDetail, RoleTenantPermissionView,
    TenantPermissionType, TenantView,
};

use super::names::format_tenant_name;

/// Classifies a set of allowed actions. Write implies read.
#[must_use]
pub fn get_tenant_permission_type<S: AsRef<str>>(actions: &[S]) -> TenantPermissionType {
    let has = |token: &str| actions.iter().any(|a| a.as_ref() == token);

    if has(TENANT_WRITE_PERMISSION) {
        TenantPermissionType::ReadWrite
    } else if has(TENANT_READ_PERMISSION) {
        TenantPermissionType::Read
    } else {
        TenantPermissionType::None
    }
}

#[must_use]
pub fn transform_role_tenant_permissions(
    role_tenant_permissions: &[RoleTenantPermission],
) -> Vec<RoleTenantPermissionView> {
    role_tenant_permissions
        .iter()
        .map(|p| RoleTenantPermissionView {
            tenant_patterns: p.tenant_patterns.clone(),
            permission_type: get_tenant_permission_type(&p.allowed_actions),
        })
        .collect()
}

/// Joins each permission with the tenant row it names.
///
/// Only a grant with exactly one pattern naming a listed tenant is joined.
/// Several patterns, wildcards and unknown names all produce the `N/A`
/// placeholder detail.
#[must_use]
pub fn transform_role_tenant_permission_data(
    tenant_permissions: &[RoleTenantPermissionView],
    tenant_list: &[TenantView],
) -> Vec<RoleTenantPermissionDetail> {
    tenant_permissions
        .iter()
        .map(|permission| {
            let tenant_item = match permission.tenant_patterns.as_slice() {
                [pattern] => {
                    let label = format_tenant_name(pattern);
                    tenant_list.iter().find(|t| t.tenant == label)
                }
                _ => None,
            };

            match tenant_item {
                Some(item) => RoleTenantPermissionDetail {
                    tenant_patterns: permission.tenant_patterns.clone(),
                    permission_type: permission.permission_type,
                    tenant: non_empty_or_invalid(&item.tenant),
                    reserved: item.reserved,
                    description: non_empty_or_invalid(&item.description),
                    tenant_value: item.tenant_value.clone(),
                },
                None => RoleTenantPermissionDetail::unresolved(permission.clone()),
            }
        })
        .collect()
}

fn non_empty_or_invalid(value: &str) -> String {
    if value.is_empty() {
        ROLE_VIEW_TENANT_INVALID_TEXT.to_owned()
    } else {
        value.to_owned()
    }
}
