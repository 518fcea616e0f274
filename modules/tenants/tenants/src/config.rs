//! Configuration for the tenants backend client.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default path of the tenants collection endpoint.
pub const DEFAULT_TENANTS_ENDPOINT: &str = "/api/v1/configuration/tenants";

/// Default path of the current-tenant endpoint.
pub const DEFAULT_MULTITENANCY_ENDPOINT: &str = "/api/v1/multitenancy/tenant";

/// Backend client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantsClientConfig {
    /// Base URL of the dashboards backend, e.g. `https://dashboards.example.com`.
    pub base_url: String,

    pub tenants_endpoint: String,

    pub multitenancy_endpoint: String,

    /// Per-request timeout, e.g. `"30s"`.
    #[serde(with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent override; the transport's default is used when unset.
    pub user_agent: Option<String>,

    /// Maximum accepted response body size in bytes.
    pub max_body_size: usize,

    /// Accept `http://` base URLs. Meant for local development backends.
    pub allow_insecure_http: bool,

    /// Headers sent with every request (e.g. `osd-xsrf: "true"`).
    pub headers: BTreeMap<String, String>,
}

impl Default for TenantsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:5601".to_owned(),
            tenants_endpoint: DEFAULT_TENANTS_ENDPOINT.to_owned(),
            multitenancy_endpoint: DEFAULT_MULTITENANCY_ENDPOINT.to_owned(),
            timeout: tenancy_http::DEFAULT_REQUEST_TIMEOUT,
            user_agent: None,
            max_body_size: tenancy_http::DEFAULT_MAX_BODY_SIZE,
            allow_insecure_http: false,
            headers: BTreeMap::from([("osd-xsrf".to_owned(), "true".to_owned())]),
        }
    }
}

/// Human-readable durations (`"500ms"`, `"30s"`, `"2m"`) for config fields.
pub mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    /// # Errors
    /// Fails when the value is not a humantime duration string.
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        humantime::parse_duration(&raw).map_err(de::Error::custom)
    }

    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&humantime::format_duration(*d).to_string())
    }
}
