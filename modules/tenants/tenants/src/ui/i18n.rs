//! Message lookup for user-visible labels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resolves a message id to display text.
///
/// Implementations must return `default_message` for ids they do not know.
pub trait Translator: Send + Sync {
    fn translate(&self, id: &str, default_message: &str) -> String;
}

/// Always answers with the default message.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, _id: &str, default_message: &str) -> String {
        default_message.to_owned()
    }
}

/// Message overrides keyed by id, loaded from the `i18n.messages` config section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    #[must_use]
    pub fn from_messages(messages: BTreeMap<String, String>) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, id: &str, default_message: &str) -> String {
        self.get(id).unwrap_or(default_message).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_returns_default() {
        assert_eq!(PassthroughTranslator.translate("any.id", "Global"), "Global");
    }

    #[test]
    fn catalog_overrides_known_ids_only() {
        let catalog = MessageCatalog::from_messages(BTreeMap::from([(
            "greeting".to_owned(),
            "Hallo".to_owned(),
        )]));

        assert_eq!(catalog.translate("greeting", "Hello"), "Hallo");
        assert_eq!(catalog.translate("farewell", "Bye"), "Bye");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_deserializes_from_plain_map() {
        let catalog: MessageCatalog =
            serde_json::from_str(r#"{"a.b": "x", "c": "y"}"#).unwrap();
        assert_eq!(catalog.get("a.b"), Some("x"));
        assert_eq!(catalog.get("c"), Some("y"));
        assert_eq!(catalog.get("missing"), None);
    }
}
