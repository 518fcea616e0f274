use tenants_sdk::constants::{GLOBAL_TENANT, GLOBAL_TENANT_NAME, PRIVATE_TENANT};
use tenants_sdk::{TenantMap, TenantView};

/// Builds the tenant table rows from the backend's tenant map.
///
/// Rows follow the map's order. The `global_tenant` entry becomes the Global
/// row (its label, description and empty value); every other key is used
/// as both label and value. With `is_private_enabled`, a reserved Private row
/// is inserted at index 1 whether or not the backend knows a private tenant.
#[must_use]
pub fn transform_tenant_data(raw: &TenantMap, is_private_enabled: bool) -> Vec<TenantView> {
    let mut tenant_list: Vec<TenantView> = raw
        .iter()
        .map(|(key, record)| {
            if key == GLOBAL_TENANT_NAME {
                TenantView {
                    tenant: GLOBAL_TENANT.label.to_owned(),
                    reserved: record.reserved,
                    description: GLOBAL_TENANT.description.to_owned(),
                    tenant_value: GLOBAL_TENANT.value.to_owned(),
                }
            } else {
                TenantView {
                    tenant: key.clone(),
                    reserved: record.reserved,
                    description: record.description.clone(),
                    tenant_value: key.clone(),
                }
            }
        })
        .collect();

    if is_private_enabled {
        let at = tenant_list.len().min(1);
        tenant_list.insert(
            at,
            TenantView {
                tenant: PRIVATE_TENANT.label.to_owned(),
                reserved: true,
                description: PRIVATE_TENANT.description.to_owned(),
                tenant_value: PRIVATE_TENANT.value.to_owned(),
            },
        );
    }

    tenant_list
}
