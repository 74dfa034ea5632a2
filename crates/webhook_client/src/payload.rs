//! The JSON body POSTed to a contact webhook.

use chat_core::{Language, UserData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire payload of one outgoing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub message: String,
    pub language: Language,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
}
