//! What each flow operation did, reported back to the rendering surface.

use uuid::Uuid;

/// Result of a language pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOutcome {
    /// Language stored; the surface should present the details form.
    DetailsNeeded,
    /// Language stored; details were already on file.
    Ready,
}

/// Result of a details submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsOutcome {
    /// The contact carries an option menu; a selector was appended.
    OptionsPresented { selector_id: Uuid },
    /// A welcome message was appended; the session is ready.
    Welcomed { message_id: Uuid },
    /// Details were already collected this session; nothing changed.
    AlreadyCollected,
}

/// Result of a service-option pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOutcome {
    /// The selection was dispatched and the bot reply appended.
    Replied { reply_id: Uuid },
    /// No webhook is configured for this (language, option) pair; the
    /// selection was dropped without touching the session.
    NoRoute,
    /// The session has not reached the option step; nothing changed.
    NotPending,
}

/// Result of a free-form send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message went out and the classified bot reply was appended.
    Delivered { reply_id: Uuid },
    /// No language selected yet: show the warning, nothing was sent.
    LanguageRequired { warning: &'static str },
    /// Details missing: re-open the details form, nothing was sent.
    DetailsRequired,
    /// Blank input; ignored.
    Empty,
}
