//! Presentation-independent descriptors for tenant tables.

pub mod column;
pub mod i18n;

pub use column::{RenderedCell, TENANT_COLUMN, TENANT_COLUMN_MESSAGE_ID, TenantColumn};
pub use i18n::{MessageCatalog, PassthroughTranslator, Translator};
