//! Public API trait for tenant administration.
//!
//! Implementations talk to the security backend; consumers hold an
//! `Arc<dyn TenantsClient>` and never see the transport.

use async_trait::async_trait;

use crate::error::TenantsError;
use crate::models::{TenantMap, TenantSelect, TenantUpdate};

/// Tenant repository over the security backend.
///
/// ```ignore
/// let tenants = client.fetch_tenants().await?;
/// let rows = tenants::transform_tenant_data(&tenants, true);
///
/// let current = client.fetch_current_tenant().await?;
/// client.request_delete_tenant(&["finance".to_owned(), "ops".to_owned()]).await?;
/// ```
///
/// Failures are propagated as-is: nothing here retries, caches, or
/// translates backend errors.
#[async_trait]
pub trait TenantsClient: Send + Sync {
    /// Fetch every tenant visible to the caller, in backend order.
    ///
    /// # Errors
    ///
    /// - `Transport` on network failure, non-2xx status, or a malformed body
    async fn fetch_tenants(&self) -> Result<TenantMap, TenantsError>;

    /// Fetch the identifiers of every tenant, in backend order.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_tenants`](Self::fetch_tenants).
    async fn fetch_tenant_name_list(&self) -> Result<Vec<String>, TenantsError> {
        Ok(self.fetch_tenants().await?.into_keys().collect())
    }

    /// Fetch the tenant currently selected for the caller.
    ///
    /// # Errors
    ///
    /// - `Transport` on network failure or non-2xx status
    async fn fetch_current_tenant(&self) -> Result<String, TenantsError>;

    /// Create or update one tenant's metadata.
    ///
    /// # Errors
    ///
    /// - `Transport` on network failure or non-2xx status
    async fn update_tenant(&self, name: &str, update: &TenantUpdate) -> Result<(), TenantsError>;

    /// Delete tenants one at a time, in input order.
    ///
    /// Each delete completes before the next starts. The first failure stops
    /// the loop; tenants already deleted stay deleted.
    ///
    /// # Errors
    ///
    /// - `PartialDelete` naming the failed tenant and those deleted before it
    async fn request_delete_tenant(&self, names: &[String]) -> Result<(), TenantsError>;

    /// Switch the caller's active tenant.
    ///
    /// Returns the tenant the backend actually selected, which may be a
    /// normalized form of the requested one.
    ///
    /// # Errors
    ///
    /// - `Transport` on network failure or non-2xx status
    async fn select_tenant(&self, selection: &TenantSelect) -> Result<String, TenantsError>;
}
