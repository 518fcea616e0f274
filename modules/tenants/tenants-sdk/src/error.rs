//! Error types for the tenants module.

use thiserror::Error;

/// Errors returned by [`TenantsClient`](crate::TenantsClient) implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TenantsError {
    /// The transport failed (network, non-2xx status, malformed body).
    ///
    /// The transport's own error is kept as the source, unmodified.
    #[error("{operation} failed: {source}")]
    Transport {
        /// Repository operation that issued the request.
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configured backend URL cannot be used to address the endpoint.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A multi-tenant delete stopped part way.
    ///
    /// Tenants in `deleted` were removed before `failed` was attempted; they
    /// are not restored. Tenants after `failed` were not attempted.
    #[error("failed to delete tenant '{failed}' after deleting {} tenant(s): {source}", deleted.len())]
    PartialDelete {
        failed: String,
        deleted: Vec<String>,
        #[source]
        source: Box<TenantsError>,
    },
}

impl TenantsError {
    /// Wrap a transport failure for `operation`.
    #[must_use]
    pub fn transport(
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        TenantsError::Transport {
            operation,
            source: source.into(),
        }
    }
}
