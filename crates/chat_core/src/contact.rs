//! Contacts, their webhook routing, and service option menus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// High-level grouping of a contact, shown as a tag in the sidebar.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    Retailer,
    Warehouse,
    Service,
}

/// Default webhook endpoints for a contact, one per language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WebhookConfig {
    pub en: String,
    pub ar: String,
}

impl WebhookConfig {
    /// The endpoint for an active language. Only English routes to the
    /// English endpoint; everything else falls through to Arabic, matching
    /// the contract that sends are guarded until a language is selected.
    pub fn url_for(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            _ => &self.ar,
        }
    }
}

/// A label in both supported languages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LocalizedLabel {
    pub en: String,
    pub ar: String,
}

impl LocalizedLabel {
    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.ar,
            _ => &self.en,
        }
    }
}

/// One selectable entry of a service option menu, as configured.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    /// Machine tag, e.g. `driveThru`.
    pub value: String,
    pub label: LocalizedLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl OptionSpec {
    /// Resolve the entry against the session language.
    pub fn localize(&self, language: Language) -> ChatOption {
        ChatOption {
            label: self.label.for_language(language).to_string(),
            value: self.value.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// A selectable option as presented to the user, already localized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Per-option webhook endpoints, keyed by option value within each language.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionWebhooks {
    #[serde(default)]
    pub en: HashMap<String, String>,
    #[serde(default)]
    pub ar: HashMap<String, String>,
}

impl OptionWebhooks {
    /// Pure lookup of the endpoint for a (language, option value) pair.
    pub fn url_for(&self, language: Language, value: &str) -> Option<&str> {
        let table = match language {
            Language::English => &self.en,
            Language::Arabic => &self.ar,
            Language::Unselected => return None,
        };
        table.get(value).map(String::as_str)
    }
}

/// Service option menu of a contact: the options themselves plus the
/// webhook table that routes each selection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionMenu {
    pub options: Vec<OptionSpec>,
    pub webhooks: OptionWebhooks,
}

/// A chat contact. Immutable, loaded from static configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub category: ContactCategory,
    /// Icon tag the rendering surface maps to an actual glyph.
    pub icon: String,
    pub webhooks: WebhookConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_menu: Option<OptionMenu>,
}

impl Contact {
    pub fn has_option_menu(&self) -> bool {
        self.option_menu.is_some()
    }

    /// The contact's options resolved for the given language. Empty for
    /// contacts without a menu.
    pub fn localized_options(&self, language: Language) -> Vec<ChatOption> {
        self.option_menu
            .as_ref()
            .map(|menu| menu.options.iter().map(|o| o.localize(language)).collect())
            .unwrap_or_default()
    }

    /// The default endpoint for free-form messages.
    pub fn default_webhook(&self, language: Language) -> &str {
        self.webhooks.url_for(language)
    }

    /// The option-specific endpoint, if one is configured.
    pub fn option_webhook(&self, language: Language, value: &str) -> Option<&str> {
        self.option_menu
            .as_ref()
            .and_then(|menu| menu.webhooks.url_for(language, value))
    }

    /// The localized display label of an option, if the contact has it.
    pub fn option_label(&self, language: Language, value: &str) -> Option<&str> {
        self.option_menu.as_ref().and_then(|menu| {
            menu.options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.for_language(language))
        })
    }
}
