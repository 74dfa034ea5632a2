//! The conversation flow controller.

use chat_core::{classify, l10n, Contact, ContactDirectory, Language, Message, UserData};
use chat_state::FlowEvent;
use chrono::Utc;
use session_store::{Session, SessionStore};
use uuid::Uuid;
use webhook_client::{WebhookDispatch, WebhookPayload};

use crate::error::{FlowError, Result};
use crate::outcome::{DetailsOutcome, LanguageOutcome, OptionOutcome, SendOutcome};

/// Drives every session through the conversation flow.
///
/// The controller owns the session store and mediates all writes to it;
/// the rendering surface only ever reads sessions and raises events
/// through these methods.
pub struct FlowController<D: WebhookDispatch> {
    directory: ContactDirectory,
    store: SessionStore,
    dispatcher: D,
}

impl<D: WebhookDispatch> FlowController<D> {
    pub fn new(directory: ContactDirectory, dispatcher: D) -> Self {
        Self {
            directory,
            store: SessionStore::new(),
            dispatcher,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        self.directory.contacts()
    }

    pub fn session(&self, contact_id: &str) -> Option<&Session> {
        self.store.get(contact_id)
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Open a contact, creating its session lazily.
    ///
    /// A fresh session gets the bilingual language prompt as its first
    /// message. Re-opening never re-issues the prompt.
    pub fn open_contact(&mut self, contact_id: &str) -> Result<&Session> {
        if self.directory.get(contact_id).is_none() {
            return Err(FlowError::UnknownContact(contact_id.to_string()));
        }

        let (session, created) = self.store.open(contact_id);
        if created {
            session.apply(FlowEvent::ContactOpened);
        }
        if session.language == Language::Unselected && session.messages.is_empty() {
            session.push(Message::language_selector(l10n::LANGUAGE_PROMPT));
        }
        Ok(session)
    }

    /// Record the user's language pick.
    ///
    /// Strips the pending selector and appends the localized confirmation;
    /// repeat picks only update the language, so the sequence never holds
    /// more than one confirmation.
    pub fn select_language(
        &mut self,
        contact_id: &str,
        language: Language,
    ) -> Result<LanguageOutcome> {
        let session = self.store.require_mut(contact_id)?;
        if !language.is_selected() {
            tracing::warn!(contact = contact_id, "ignoring unselected language pick");
            return Ok(if session.user_data.is_some() {
                LanguageOutcome::Ready
            } else {
                LanguageOutcome::DetailsNeeded
            });
        }

        session.language = language;
        if session.strip_language_selectors() > 0 {
            session.push(Message::system_text(l10n::language_confirmation(language)));
        }

        let details_on_file = session.user_data.is_some();
        session.apply(FlowEvent::LanguageSelected {
            language,
            details_on_file,
        });

        Ok(if details_on_file {
            LanguageOutcome::Ready
        } else {
            LanguageOutcome::DetailsNeeded
        })
    }

    /// Store the submitted user details and advance the flow.
    ///
    /// Option-menu contacts get an option selector; everyone else gets the
    /// animated welcome. Details are collected exactly once per session: a
    /// second submission changes nothing.
    pub fn submit_details(&mut self, contact_id: &str, details: UserData) -> Result<DetailsOutcome> {
        details.validate()?;
        let contact = self.require_contact(contact_id)?.clone();
        let session = self.store.require_mut(contact_id)?;

        if session.user_data.is_some() {
            return Ok(DetailsOutcome::AlreadyCollected);
        }

        let name = details.name.clone();
        session.user_data = Some(details);
        let has_option_menu = contact.has_option_menu();

        let outcome = if has_option_menu {
            let options = contact.localized_options(session.language);
            let selector_id = session.push(Message::option_selector(
                l10n::option_prompt(session.language),
                options,
            ));
            DetailsOutcome::OptionsPresented { selector_id }
        } else {
            let message_id = session.push(Message::bot_text(l10n::welcome(session.language, &name)));
            DetailsOutcome::Welcomed { message_id }
        };

        session.apply(FlowEvent::DetailsSubmitted { has_option_menu });
        Ok(outcome)
    }

    /// Act on a service-option pick.
    ///
    /// The (language, option) endpoint is resolved first; a missing entry
    /// drops the selection without touching the session. Otherwise the
    /// selector is replaced by a user confirmation, the session's webhook
    /// override is set, and the selection is announced to the endpoint as
    /// a synthetic outgoing message.
    pub async fn select_option(&mut self, contact_id: &str, value: &str) -> Result<OptionOutcome> {
        let contact = self.require_contact(contact_id)?.clone();
        let session = self.store.require_mut(contact_id)?;

        if !session.language.is_selected() || session.user_data.is_none() {
            return Ok(OptionOutcome::NotPending);
        }

        let Some(url) = contact.option_webhook(session.language, value) else {
            tracing::warn!(
                contact = contact_id,
                option = value,
                language = session.language.code(),
                "no webhook configured for option, dropping selection"
            );
            return Ok(OptionOutcome::NoRoute);
        };
        let url = url.to_string();
        let label = contact
            .option_label(session.language, value)
            .unwrap_or(value)
            .to_string();

        session.strip_option_selectors();
        session.push(Message::user_text(label));
        session.active_webhook_url = Some(url.clone());
        session.selected_option = Some(value.to_string());
        session.apply(FlowEvent::OptionSelected {
            value: value.to_string(),
        });

        let payload = payload_for(session, format!("User selected: {value}"));
        session.typing = true;
        let reply = self.dispatcher.dispatch(&url, &payload).await;
        session.typing = false;

        let reply_id = append_reply(session, reply);
        session.apply(FlowEvent::ReplyReceived);
        Ok(OptionOutcome::Replied { reply_id })
    }

    /// Send a free-form user message.
    ///
    /// Guarded: without a language the send is rejected with a localized
    /// warning, and without details the surface is told to re-open the
    /// form. Neither guard touches the session or the network.
    pub async fn send_text(&mut self, contact_id: &str, text: &str) -> Result<SendOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(SendOutcome::Empty);
        }

        let contact = self.require_contact(contact_id)?.clone();
        let session = self.store.require_mut(contact_id)?;

        if !session.language.is_selected() {
            return Ok(SendOutcome::LanguageRequired {
                warning: l10n::LANGUAGE_REQUIRED_WARNING,
            });
        }
        if session.user_data.is_none() {
            return Ok(SendOutcome::DetailsRequired);
        }

        session.push(Message::user_text(text));
        session.apply(FlowEvent::MessageDispatched);

        let url = session
            .active_webhook_url
            .clone()
            .unwrap_or_else(|| contact.default_webhook(session.language).to_string());

        let payload = payload_for(session, text.to_string());
        session.typing = true;
        let reply = self.dispatcher.dispatch(&url, &payload).await;
        session.typing = false;

        let reply_id = append_reply(session, reply);
        session.apply(FlowEvent::ReplyReceived);
        Ok(SendOutcome::Delivered { reply_id })
    }

    /// Clear a bot message's one-shot animate flag once its reveal has
    /// completed. Idempotent.
    pub fn mark_revealed(&mut self, contact_id: &str, message_id: Uuid) -> Result<bool> {
        let session = self.store.require_mut(contact_id)?;
        Ok(session.mark_revealed(message_id))
    }

    fn require_contact(&self, contact_id: &str) -> Result<&Contact> {
        self.directory
            .get(contact_id)
            .ok_or_else(|| FlowError::UnknownContact(contact_id.to_string()))
    }
}

fn payload_for(session: &Session, message: String) -> WebhookPayload {
    WebhookPayload {
        message,
        language: session.language,
        timestamp: Utc::now(),
        user_data: session.user_data.clone(),
        session_id: session.session_id().to_string(),
        selected_option: session.selected_option.clone(),
    }
}

/// Append the classified bot reply: an image message when the text is an
/// image URL, an animated text message otherwise.
fn append_reply(session: &mut Session, reply: String) -> Uuid {
    match classify::image_url(&reply) {
        Some(url) => {
            let url = url.to_string();
            session.push(Message::bot_image(
                url,
                l10n::image_placeholder(session.language),
            ))
        }
        None => session.push(Message::bot_text(reply)),
    }
}
