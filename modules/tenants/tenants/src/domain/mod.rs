//! Pure transforms from backend tenant data to console view models.

pub mod names;
pub mod permissions;
pub mod view;

pub use names::{
    format_tenant_name, is_global_tenant, is_private_tenant, is_rendering_private_tenant,
    resolve_tenant_name,
};
pub use permissions::{
    get_tenant_permission_type, transform_role_tenant_permission_data,
    transform_role_tenant_permissions,
};
pub use view::transform_tenant_data;
