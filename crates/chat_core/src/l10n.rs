//! Localized strings emitted by the conversation flow.
//!
//! The language prompt and the send warning are bilingual by design: both
//! are shown before the user has picked a language.

use crate::language::Language;

/// Text of the language-selector control message.
pub const LANGUAGE_PROMPT: &str = "Please select your language / يُرجى اختيار لغتك";

/// Warning returned when a send is attempted before a language is selected.
pub const LANGUAGE_REQUIRED_WARNING: &str =
    "Please select a language first / الرجاء اختيار لغة أولاً";

/// Confirmation appended when the user picks a language.
pub fn language_confirmation(language: Language) -> &'static str {
    match language {
        Language::Arabic => "تم اختيار اللغة العربية.",
        _ => "Language set to English.",
    }
}

/// Welcome shown after the details form, naming the submitted user.
pub fn welcome(language: Language, name: &str) -> String {
    match language {
        Language::Arabic => {
            format!("مرحبًا {name}! لقد استلمنا بياناتك. كيف يمكننا مساعدتك اليوم؟")
        }
        _ => format!("Welcome, {name}! We have received your details. How can we help you today?"),
    }
}

/// Text of the option-selector control message.
pub fn option_prompt(language: Language) -> &'static str {
    match language {
        Language::Arabic => "يرجى اختيار إحدى الخدمات التالية:",
        _ => "Please choose one of the following services:",
    }
}

/// Fixed reply substituted for any failed webhook call.
pub fn fallback_reply(language: Language) -> &'static str {
    match language {
        Language::Arabic => "عذراً، نواجه مشكلة في الاتصال بالخادم حالياً.",
        _ => "Sorry, we are having trouble connecting to the server right now.",
    }
}

/// Display label of an image message.
pub fn image_placeholder(language: Language) -> &'static str {
    match language {
        Language::Arabic => "صورة",
        _ => "Image",
    }
}
