//! The "Tenant" column of a saved-objects table.

use tenants_sdk::constants::{GLOBAL_TENANT_RENDERING_TEXT, PRIVATE_TENANT_RENDERING_TEXT};

use super::i18n::Translator;
use crate::domain::names::{is_global_tenant, is_rendering_private_tenant};

/// Message id under which the rendered tenant name is looked up.
pub const TENANT_COLUMN_MESSAGE_ID: &str =
    "savedObjectsManagement.objectsTable.table.columnTenantName";

/// Display text for one cell. Markup belongs to the caller.
pub type RenderedCell = String;

/// Static description of a table column.
#[derive(Clone, Copy)]
pub struct TenantColumn {
    pub id: &'static str,
    pub field: &'static str,
    pub name: &'static str,
    pub data_type: &'static str,
    pub render: fn(&[Vec<String>], &dyn Translator) -> RenderedCell,
    pub load_data: fn(),
}

impl std::fmt::Debug for TenantColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantColumn")
            .field("id", &self.id)
            .field("field", &self.field)
            .field("name", &self.name)
            .field("data_type", &self.data_type)
            .finish_non_exhaustive()
    }
}

pub const TENANT_COLUMN: TenantColumn = TenantColumn {
    id: "tenant_column",
    field: "namespaces",
    name: "Tenant",
    data_type: "string",
    render: render_tenant_cell,
    load_data: load_tenant_data,
};

/// Renders the namespaces of a saved object as a tenant name.
///
/// Only the first namespace is shown. The empty namespace is the global
/// tenant and any `__user__`-prefixed one is a private tenant. A cell with
/// no namespaces renders as an empty string.
#[must_use]
pub fn render_tenant_cell(value: &[Vec<String>], translator: &dyn Translator) -> RenderedCell {
    let Some(first) = value.iter().flatten().next() else {
        return RenderedCell::new();
    };

    let text = if is_global_tenant(Some(first.as_str())) {
        GLOBAL_TENANT_RENDERING_TEXT
    } else if is_rendering_private_tenant(Some(first.as_str())) {
        PRIVATE_TENANT_RENDERING_TEXT
    } else {
        first.as_str()
    };

    translator.translate(TENANT_COLUMN_MESSAGE_ID, text)
}

/// Nothing to preload; the cell value carries everything `render` needs.
pub fn load_tenant_data() {}
