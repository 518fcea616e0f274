//! Layered configuration for `tenantctl`.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables `TENANTCTL__<SECTION>__<KEY>`
//! 4. command-line overrides

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tenants::{MessageCatalog, TenantsClientConfig};

use crate::logging::LoggingConfig;

pub const ENV_PREFIX: &str = "TENANTCTL__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub client: TenantsClientConfig,
    pub logging: LoggingConfig,
    pub console: ConsoleConfig,
    pub i18n: I18nConfig,
}

/// Who the console acts as and how it lists tenants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Logged-in user; needed to select a tenant and to recognize the
    /// private tenant by name.
    pub username: Option<String>,
    /// List a Private row alongside the backend tenants.
    pub private_tenant_enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            username: None,
            private_tenant_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    pub messages: MessageCatalog,
}

/// Values given on the command line that override every other source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub verbose: u8,
}

impl AppConfig {
    /// Merge defaults, the optional YAML file, and `TENANTCTL__*` variables.
    ///
    /// # Errors
    /// Fails if the file is missing, a source does not parse, or a key is unknown.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.client.base_url.clone_from(base_url);
        }
        if let Some(username) = &overrides.username {
            self.console.username = Some(username.clone());
        }
        if let Some(level) = crate::logging::verbosity_level(overrides.verbose) {
            self.logging.level = level.to_owned();
        }
    }

    /// # Errors
    /// Propagates YAML serialization failures.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;
    use crate::logging::LogFormat;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        temp_env::with_vars_unset(["TENANTCTL__CLIENT__BASE_URL"], || {
            let config = AppConfig::load(None).unwrap();
            assert_eq!(config, AppConfig::default());
            assert!(config.console.private_tenant_enabled);
            assert_eq!(config.logging.level, "warn");
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let file = write_yaml(
            r#"
client:
  base_url: "https://dashboards.example.com"
  timeout: "5s"
logging:
  format: json
console:
  username: "alice"
  private_tenant_enabled: false
i18n:
  messages:
    "savedObjectsManagement.objectsTable.table.columnTenantName": "Mandant"
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.client.base_url, "https://dashboards.example.com");
        assert_eq!(config.client.timeout, Duration::from_secs(5));
        assert_eq!(
            config.client.tenants_endpoint,
            "/api/v1/configuration/tenants"
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.console.username.as_deref(), Some("alice"));
        assert!(!config.console.private_tenant_enabled);
        assert_eq!(
            config
                .i18n
                .messages
                .get("savedObjectsManagement.objectsTable.table.columnTenantName"),
            Some("Mandant")
        );
    }

    #[test]
    fn env_overrides_yaml() {
        let file = write_yaml(
            r#"
client:
  base_url: "https://from-file.example.com"
"#,
        );

        temp_env::with_vars(
            [
                (
                    "TENANTCTL__CLIENT__BASE_URL",
                    Some("https://from-env.example.com"),
                ),
                ("TENANTCTL__CONSOLE__USERNAME", Some("bob")),
            ],
            || {
                let config = AppConfig::load(Some(file.path())).unwrap();
                assert_eq!(config.client.base_url, "https://from-env.example.com");
                assert_eq!(config.console.username.as_deref(), Some("bob"));
            },
        );
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliOverrides {
            base_url: Some("https://cli.example.com".to_owned()),
            username: Some("carol".to_owned()),
            verbose: 2,
        });

        assert_eq!(config.client.base_url, "https://cli.example.com");
        assert_eq!(config.console.username.as_deref(), Some("carol"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/tenantctl.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_yaml("client:\n  retries: 3\n");

        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn yaml_output_reloads_to_same_config() {
        let mut config = AppConfig::default();
        config.console.username = Some("alice".to_owned());

        let yaml = config.to_yaml().unwrap();
        let reloaded: AppConfig = serde_saphyr::from_str(&yaml).unwrap();

        assert_eq!(reloaded, config);
    }
}
