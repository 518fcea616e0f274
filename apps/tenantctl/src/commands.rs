//! Subcommand implementations.
//!
//! Each command writes its result to `out` and returns; logging goes to
//! stderr through `tracing`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tenants::{
    MessageCatalog, TENANT_COLUMN, resolve_tenant_name, transform_role_tenant_permission_data,
    transform_role_tenant_permissions, transform_tenant_data,
};
use tenants_sdk::{RoleTenantPermission, TenantSelect, TenantUpdate, TenantsClient};

use crate::config::AppConfig;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the tenant table rows as JSON
    List(ListArgs),
    /// Print tenant identifiers, one per line
    Names,
    /// Print the display name of the current tenant
    Current,
    /// Switch the active tenant
    Select(SelectArgs),
    /// Create or update a tenant
    Update(UpdateArgs),
    /// Delete tenants one at a time, stopping at the first failure
    Delete(DeleteArgs),
    /// Render namespaces the way the saved-objects "Tenant" column shows them
    RenderCell(RenderCellArgs),
    /// Join role tenant permissions from a JSON file with the tenant list
    RolePermissions(RolePermissionsArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include the Private row even when disabled in config
    #[arg(long)]
    private: bool,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    tenant: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    name: String,
    #[arg(short, long)]
    description: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RenderCellArgs {
    /// Namespaces of one saved object; only the first is shown
    values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RolePermissionsArgs {
    /// JSON array of `{ "tenant_patterns": [..], "allowed_actions": [..] }`
    file: PathBuf,
}

impl Commands {
    /// `render-cell` is the only command that does not talk to the backend.
    #[must_use]
    pub fn needs_backend(&self) -> bool {
        !matches!(self, Commands::RenderCell(_))
    }

    /// # Errors
    /// Propagates backend failures and output write errors.
    pub async fn run(
        self,
        config: &AppConfig,
        client: &dyn TenantsClient,
        out: &mut dyn Write,
    ) -> Result<()> {
        match self {
            Commands::List(args) => list(config, client, &args, out).await,
            Commands::Names => names(client, out).await,
            Commands::Current => current(config, client, out).await,
            Commands::Select(args) => select(config, client, args, out).await,
            Commands::Update(args) => update(client, args, out).await,
            Commands::Delete(args) => delete(client, &args, out).await,
            Commands::RenderCell(args) => render_cell(config, args, out),
            Commands::RolePermissions(args) => role_permissions(config, client, &args, out).await,
        }
    }

    /// Run a command that needs no backend.
    ///
    /// # Errors
    /// Fails for backend commands and on output write errors.
    pub fn run_offline(self, config: &AppConfig, out: &mut dyn Write) -> Result<()> {
        let Commands::RenderCell(args) = self else {
            anyhow::bail!("command requires a backend client");
        };
        render_cell(config, args, out)
    }
}

async fn list(
    config: &AppConfig,
    client: &dyn TenantsClient,
    args: &ListArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let raw = client.fetch_tenants().await?;
    let rows = transform_tenant_data(&raw, args.private || config.console.private_tenant_enabled);
    writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    Ok(())
}

async fn names(client: &dyn TenantsClient, out: &mut dyn Write) -> Result<()> {
    for name in client.fetch_tenant_name_list().await? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

async fn current(config: &AppConfig, client: &dyn TenantsClient, out: &mut dyn Write) -> Result<()> {
    let tenant = client.fetch_current_tenant().await?;
    let user_name = config.console.username.as_deref().unwrap_or_default();
    writeln!(out, "{}", resolve_tenant_name(&tenant, user_name))?;
    Ok(())
}

async fn select(
    config: &AppConfig,
    client: &dyn TenantsClient,
    args: SelectArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let username = config
        .console
        .username
        .clone()
        .context("selecting a tenant needs a username (console.username or --username)")?;

    let selected = client
        .select_tenant(&TenantSelect {
            tenant: args.tenant,
            username,
        })
        .await?;
    tracing::info!(tenant = %selected, "tenant selected");
    writeln!(out, "{selected}")?;
    Ok(())
}

async fn update(client: &dyn TenantsClient, args: UpdateArgs, out: &mut dyn Write) -> Result<()> {
    client
        .update_tenant(
            &args.name,
            &TenantUpdate {
                description: args.description,
            },
        )
        .await?;
    writeln!(out, "updated {}", args.name)?;
    Ok(())
}

async fn delete(client: &dyn TenantsClient, args: &DeleteArgs, out: &mut dyn Write) -> Result<()> {
    client.request_delete_tenant(&args.names).await?;
    for name in &args.names {
        writeln!(out, "deleted {name}")?;
    }
    Ok(())
}

fn render_cell(config: &AppConfig, args: RenderCellArgs, out: &mut dyn Write) -> Result<()> {
    let catalog: &MessageCatalog = &config.i18n.messages;
    let rendered = (TENANT_COLUMN.render)(&[args.values], catalog);
    writeln!(out, "{rendered}")?;
    Ok(())
}

async fn role_permissions(
    config: &AppConfig,
    client: &dyn TenantsClient,
    args: &RolePermissionsArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let raw: Vec<RoleTenantPermission> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let views = transform_role_tenant_permissions(&raw);
    let tenants = client.fetch_tenants().await?;
    let tenant_list = transform_tenant_data(&tenants, config.console.private_tenant_enabled);
    let details = transform_role_tenant_permission_data(&views, &tenant_list);

    writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?;
    Ok(())
}
