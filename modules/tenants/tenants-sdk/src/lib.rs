//! Tenants SDK
//!
//! Public contract of the `tenants` module:
//!
//! - [`TenantsClient`] - tenant repository trait
//! - [`TenantRecord`], [`TenantView`], [`RoleTenantPermissionDetail`], ... - models
//! - [`constants`] - reserved tenant identifiers and display labels
//! - [`TenantsError`] - error types

pub mod api;
pub mod constants;
pub mod error;
pub mod models;

pub use api::TenantsClient;
pub use constants::{GLOBAL_TENANT, PRIVATE_TENANT, TenantSentinel};
pub use error::TenantsError;
pub use models::{
    ObjectsMessage, RoleTenantPermission, RoleTenantPermissionDetail, RoleTenantPermissionView,
    TenantMap, TenantPermissionType, TenantRecord, TenantSelect, TenantUpdate, TenantView,
};
