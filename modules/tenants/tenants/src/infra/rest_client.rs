use async_trait::async_trait;
use tenancy_http::{HttpClient, HttpClientBuilder, HttpClientConfig, HttpError, TransportSecurity};
use tenants_sdk::{
    ObjectsMessage, TenantMap, TenantRecord, TenantSelect, TenantUpdate, TenantsClient,
    TenantsError,
};
use tracing::instrument;
use url::Url;

use crate::config::TenantsClientConfig;

/// REST adapter implementing [`TenantsClient`] against a dashboards backend.
///
/// Holds the parsed base URL and the two endpoint paths. `HttpClient` is
/// `Clone + Send + Sync`, so no external locking is needed.
#[derive(Debug, Clone)]
pub struct HttpTenantsClient {
    client: HttpClient,
    base_url: Url,
    tenants_endpoint: String,
    multitenancy_endpoint: String,
}

impl HttpTenantsClient {
    #[must_use]
    pub fn new(
        client: HttpClient,
        base_url: Url,
        tenants_endpoint: impl Into<String>,
        multitenancy_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url,
            tenants_endpoint: tenants_endpoint.into(),
            multitenancy_endpoint: multitenancy_endpoint.into(),
        }
    }

    /// Build the transport and the adapter from configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidEndpoint` if `base_url` does not parse
    /// - `Transport` if the HTTP client cannot be built (bad header, TLS setup)
    pub fn from_config(config: &TenantsClientConfig) -> Result<Self, TenantsError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TenantsError::InvalidEndpoint(format!("{}: {e}", config.base_url)))?;

        let mut http_config = HttpClientConfig {
            request_timeout: config.timeout,
            max_body_size: config.max_body_size,
            transport: if config.allow_insecure_http {
                TransportSecurity::AllowInsecureHttp
            } else {
                TransportSecurity::TlsOnly
            },
            default_headers: config
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            ..HttpClientConfig::default()
        };
        if let Some(user_agent) = &config.user_agent {
            http_config.user_agent.clone_from(user_agent);
        }

        let client = HttpClientBuilder::with_config(http_config)
            .build()
            .map_err(|e| TenantsError::transport("build_client", e))?;

        tracing::debug!(base_url = %base_url, "tenants backend client configured");

        Ok(Self::new(
            client,
            base_url,
            config.tenants_endpoint.clone(),
            config.multitenancy_endpoint.clone(),
        ))
    }

    /// `<base>/<endpoint>[/<resource>]`, with `resource` percent-encoded as
    /// a single path segment.
    ///
    /// `.` and `..` are refused: URL normalization would drop them and
    /// address the collection instead of a tenant.
    fn endpoint_url(&self, endpoint: &str, resource: Option<&str>) -> Result<Url, TenantsError> {
        if let Some(name @ ("." | "..")) = resource {
            return Err(TenantsError::InvalidEndpoint(format!(
                "tenant name '{name}' cannot be used as a path segment"
            )));
        }

        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TenantsError::InvalidEndpoint(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?;
            segments
                .pop_if_empty()
                .extend(endpoint.split('/').filter(|s| !s.is_empty()));
            if let Some(resource) = resource {
                segments.push(resource);
            }
        }
        Ok(url)
    }

    async fn delete_one(&self, name: &str) -> Result<(), TenantsError> {
        let url = self.endpoint_url(&self.tenants_endpoint, Some(name))?;

        self.client
            .delete(url.as_str())
            .send()
            .await
            .map_err(|e| log_and_convert("request_delete_tenant", e))?
            .checked_bytes()
            .await
            .map_err(|e| log_and_convert("request_delete_tenant", e))?;

        tracing::debug!(tenant = name, "tenant deleted");
        Ok(())
    }
}

fn log_and_convert(op: &'static str, e: HttpError) -> TenantsError {
    tracing::error!(operation = op, error = %e, "tenants backend call failed");
    TenantsError::transport(op, e)
}

/// The multitenancy endpoint answers with a bare tenant name, either as a
/// JSON string or as plain text.
fn parse_tenant_name(body: String) -> String {
    serde_json::from_str::<String>(&body).unwrap_or(body)
}

#[async_trait]
impl TenantsClient for HttpTenantsClient {
    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn fetch_tenants(&self) -> Result<TenantMap, TenantsError> {
        let url = self.endpoint_url(&self.tenants_endpoint, None)?;

        let message: ObjectsMessage<TenantRecord> = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| log_and_convert("fetch_tenants", e))?
            .json()
            .await
            .map_err(|e| log_and_convert("fetch_tenants", e))?;

        tracing::debug!(count = message.data.len(), "fetched tenants");
        Ok(message.data)
    }

    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn fetch_current_tenant(&self) -> Result<String, TenantsError> {
        let url = self.endpoint_url(&self.multitenancy_endpoint, None)?;

        let body = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| log_and_convert("fetch_current_tenant", e))?
            .text()
            .await
            .map_err(|e| log_and_convert("fetch_current_tenant", e))?;

        Ok(parse_tenant_name(body))
    }

    #[instrument(skip_all, fields(base_url = %self.base_url, tenant = name))]
    async fn update_tenant(&self, name: &str, update: &TenantUpdate) -> Result<(), TenantsError> {
        let url = self.endpoint_url(&self.tenants_endpoint, Some(name))?;

        self.client
            .post(url.as_str())
            .json(update)
            .map_err(|e| log_and_convert("update_tenant", e))?
            .send()
            .await
            .map_err(|e| log_and_convert("update_tenant", e))?
            .checked_bytes()
            .await
            .map_err(|e| log_and_convert("update_tenant", e))?;

        tracing::debug!("tenant updated");
        Ok(())
    }

    #[instrument(skip_all, fields(base_url = %self.base_url, count = names.len()))]
    async fn request_delete_tenant(&self, names: &[String]) -> Result<(), TenantsError> {
        let mut deleted = Vec::with_capacity(names.len());

        for name in names {
            if let Err(e) = self.delete_one(name).await {
                return Err(TenantsError::PartialDelete {
                    failed: name.clone(),
                    deleted,
                    source: Box::new(e),
                });
            }
            deleted.push(name.clone());
        }

        Ok(())
    }

    #[instrument(skip_all, fields(base_url = %self.base_url, tenant = %selection.tenant))]
    async fn select_tenant(&self, selection: &TenantSelect) -> Result<String, TenantsError> {
        let url = self.endpoint_url(&self.multitenancy_endpoint, None)?;

        let body = self
            .client
            .post(url.as_str())
            .json(selection)
            .map_err(|e| log_and_convert("select_tenant", e))?
            .send()
            .await
            .map_err(|e| log_and_convert("select_tenant", e))?
            .text()
            .await
            .map_err(|e| log_and_convert("select_tenant", e))?;

        Ok(parse_tenant_name(body))
    }
}
