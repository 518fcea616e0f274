//! Tenant and role-permission models shared by the client and the transformers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::ROLE_VIEW_TENANT_INVALID_TEXT;

/// A tenant as returned by the backend, keyed by its identifier in [`TenantMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRecord {
    /// Reserved tenants cannot be edited or deleted.
    pub reserved: bool,
    pub description: String,
}

/// Tenants keyed by identifier, in the order the backend listed them.
pub type TenantMap = IndexMap<String, TenantRecord>;

/// List envelope used by the configuration API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectsMessage<T> {
    #[serde(default)]
    pub total: Option<u64>,
    pub data: IndexMap<String, T>,
}

/// A display-ready tenant row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantView {
    /// Display label.
    pub tenant: String,
    pub reserved: bool,
    pub description: String,
    /// Identifier sent back to the backend when this row is selected.
    #[serde(rename = "tenantValue")]
    pub tenant_value: String,
}

/// Body of a tenant upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantUpdate {
    pub description: String,
}

/// Body of a tenant switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSelect {
    pub tenant: String,
    pub username: String,
}

/// A role's grant over a set of tenant patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTenantPermission {
    pub tenant_patterns: Vec<String>,
    pub allowed_actions: Vec<String>,
}

/// Access level a role has on its tenant patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TenantPermissionType {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "Read only")]
    Read,
    #[serde(rename = "Read and Write")]
    ReadWrite,
}

impl TenantPermissionType {
    /// Label shown in the role view.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TenantPermissionType::None => "",
            TenantPermissionType::Read => "Read only",
            TenantPermissionType::ReadWrite => "Read and Write",
        }
    }
}

impl std::fmt::Display for TenantPermissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role's tenant grant with its access level resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTenantPermissionView {
    pub tenant_patterns: Vec<String>,
    #[serde(rename = "permissionType")]
    pub permission_type: TenantPermissionType,
}

/// A [`RoleTenantPermissionView`] joined with the tenant it names.
///
/// When the grant does not name exactly one known tenant, `tenant`,
/// `description` and `tenant_value` hold [`ROLE_VIEW_TENANT_INVALID_TEXT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTenantPermissionDetail {
    pub tenant_patterns: Vec<String>,
    #[serde(rename = "permissionType")]
    pub permission_type: TenantPermissionType,
    pub tenant: String,
    pub reserved: bool,
    pub description: String,
    #[serde(rename = "tenantValue")]
    pub tenant_value: String,
}

impl RoleTenantPermissionDetail {
    /// Detail for a grant that does not resolve to a single known tenant.
    #[must_use]
    pub fn unresolved(view: RoleTenantPermissionView) -> Self {
        Self {
            tenant_patterns: view.tenant_patterns,
            permission_type: view.permission_type,
            tenant: ROLE_VIEW_TENANT_INVALID_TEXT.to_owned(),
            reserved: false,
            description: ROLE_VIEW_TENANT_INVALID_TEXT.to_owned(),
            tenant_value: ROLE_VIEW_TENANT_INVALID_TEXT.to_owned(),
        }
    }
}
