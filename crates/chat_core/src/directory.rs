//! The static contact directory.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::contact::{
    Contact, ContactCategory, LocalizedLabel, OptionMenu, OptionSpec, OptionWebhooks,
    WebhookConfig,
};
use crate::error::ConfigError;

const MOCK_WEBHOOK_BASE: &str = "https://api.tradmak-clone.com/webhook";

const ELECTRICAL_EN: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/webhook-english-electrical";
const ELECTRICAL_AR: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/webhook-arabic-electrical";
const RESTAURANT_EN: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/english-resturant";
const RESTAURANT_AR: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/arabic-resturant";
const RESERVATION_EN: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/dine-in-reservation";
const RESERVATION_AR: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/dine-in-reservation-arabic";
const DRIVE_THRU_AR: &str = "https://n8n.srv1040836.hstgr.cloud/webhook/arabic-resturant-drivethru";

/// The read-only list of contacts the application serves.
///
/// Validated on construction: contact ids are unique, every webhook URL
/// parses, and each option-menu contact has an endpoint for every
/// (language, option) pair.
#[derive(Debug, Clone)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

#[derive(Serialize, Deserialize)]
struct DirectoryFile {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    pub fn new(contacts: Vec<Contact>) -> Result<Self, ConfigError> {
        validate(&contacts)?;
        Ok(Self { contacts })
    }

    /// Parse a TOML directory file, e.g. a `[[contacts]]` table per contact.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: DirectoryFile = toml::from_str(input)?;
        Self::new(file.contacts)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new(builtin_contacts()).expect("built-in contact directory")
    }
}

fn validate(contacts: &[Contact]) -> Result<(), ConfigError> {
    let mut seen = HashMap::new();
    for contact in contacts {
        if seen.insert(contact.id.as_str(), ()).is_some() {
            return Err(ConfigError::DuplicateContactId(contact.id.clone()));
        }
        check_url(contact, "en", &contact.webhooks.en)?;
        check_url(contact, "ar", &contact.webhooks.ar)?;

        let Some(menu) = &contact.option_menu else {
            continue;
        };
        if menu.options.is_empty() {
            return Err(ConfigError::EmptyOptionMenu {
                contact: contact.id.clone(),
            });
        }
        for option in &menu.options {
            for (language, table) in [("en", &menu.webhooks.en), ("ar", &menu.webhooks.ar)] {
                match table.get(&option.value) {
                    Some(url) => check_url(contact, language, url)?,
                    None => {
                        return Err(ConfigError::MissingOptionWebhook {
                            contact: contact.id.clone(),
                            language,
                            option: option.value.clone(),
                        })
                    }
                }
            }
        }
    }
    Ok(())
}

fn check_url(contact: &Contact, language: &'static str, url: &str) -> Result<(), ConfigError> {
    Url::parse(url)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidWebhookUrl {
            contact: contact.id.clone(),
            language,
            url: url.to_string(),
            source,
        })
}

fn mock_webhooks(path: &str) -> WebhookConfig {
    WebhookConfig {
        en: format!("{MOCK_WEBHOOK_BASE}/{path}/en"),
        ar: format!("{MOCK_WEBHOOK_BASE}/{path}/ar"),
    }
}

fn retailer(id: &str, name: &str, icon: &str, webhooks: WebhookConfig) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        category: ContactCategory::Retailer,
        icon: icon.to_string(),
        webhooks,
        last_message: None,
        option_menu: None,
    }
}

fn restaurant_menu() -> OptionMenu {
    OptionMenu {
        options: vec![
            OptionSpec {
                value: "driveThru".to_string(),
                label: LocalizedLabel {
                    en: "Drive Thru".to_string(),
                    ar: "الاستلام من السيارة".to_string(),
                },
                icon: Some("Car".to_string()),
            },
            OptionSpec {
                value: "dineIn".to_string(),
                label: LocalizedLabel {
                    en: "Dine In".to_string(),
                    ar: "تناول الطعام في الداخل".to_string(),
                },
                icon: Some("Utensils".to_string()),
            },
        ],
        webhooks: OptionWebhooks {
            // The reservation flow currently serves both English options.
            en: HashMap::from([
                ("driveThru".to_string(), RESERVATION_EN.to_string()),
                ("dineIn".to_string(), RESERVATION_EN.to_string()),
            ]),
            ar: HashMap::from([
                ("driveThru".to_string(), DRIVE_THRU_AR.to_string()),
                ("dineIn".to_string(), RESERVATION_AR.to_string()),
            ]),
        },
    }
}

fn builtin_contacts() -> Vec<Contact> {
    let mut electrical = retailer(
        "retailer-electrical",
        "Retailer - Electrical",
        "Zap",
        WebhookConfig {
            en: ELECTRICAL_EN.to_string(),
            ar: ELECTRICAL_AR.to_string(),
        },
    );
    electrical.last_message = Some("Circuit availability confirmed.".to_string());

    let mut plumbing = retailer(
        "retailer-plumbing",
        "Retailer - Plumbing",
        "Droplet",
        mock_webhooks("plumbing"),
    );
    plumbing.last_message = Some("New pipes in stock.".to_string());

    vec![
        electrical,
        plumbing,
        retailer(
            "retailer-hardware",
            "Retailer - Hardware / Tools",
            "Hammer",
            mock_webhooks("hardware"),
        ),
        retailer(
            "retailer-paint",
            "Retailer - Paint",
            "Paintbrush",
            mock_webhooks("paint"),
        ),
        retailer(
            "retailer-appliances",
            "Retailer - Home Appliances",
            "MonitorSmartphone",
            mock_webhooks("appliances"),
        ),
        Contact {
            id: "warehouses-gcc".to_string(),
            name: "Warehouses - GCC".to_string(),
            category: ContactCategory::Warehouse,
            icon: "Warehouse".to_string(),
            webhooks: mock_webhooks("warehouse"),
            last_message: None,
            option_menu: None,
        },
        Contact {
            id: "restaurant-general".to_string(),
            name: "Restaurant".to_string(),
            category: ContactCategory::Service,
            icon: "Utensils".to_string(),
            webhooks: WebhookConfig {
                en: RESTAURANT_EN.to_string(),
                ar: RESTAURANT_AR.to_string(),
            },
            last_message: None,
            option_menu: Some(restaurant_menu()),
        },
    ]
}
