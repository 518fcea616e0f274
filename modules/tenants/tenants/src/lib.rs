//! Tenants module
//!
//! Console-side tenant administration over a security backend:
//!
//! - [`HttpTenantsClient`] - REST implementation of [`tenants_sdk::TenantsClient`]
//! - [`domain`] - pure transforms from backend data to table rows
//! - [`ui`] - the saved-objects "Tenant" column and message lookup
//! - [`TenantsClientConfig`] - backend client configuration

pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;

pub use config::TenantsClientConfig;
pub use domain::{
    format_tenant_name, get_tenant_permission_type, is_global_tenant, is_private_tenant,
    is_rendering_private_tenant, resolve_tenant_name, transform_role_tenant_permission_data,
    transform_role_tenant_permissions, transform_tenant_data,
};
pub use infra::HttpTenantsClient;
pub use ui::{
    MessageCatalog, PassthroughTranslator, RenderedCell, TENANT_COLUMN, TENANT_COLUMN_MESSAGE_ID,
    TenantColumn, Translator,
};
