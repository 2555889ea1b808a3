//! Events module for keyboard input delivered through an environment
//!
//! Provides the structured key events that plugins listen for and the
//! event types they register against.

use serde::{Deserialize, Serialize};

/// Events dispatched to listeners registered on an environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyEvent {
    /// A key combo was pressed
    KeyDown {
        /// Key-combo identifier, e.g. `ctrl+shift+s`
        key: String,
    },

    /// A key combo was released
    KeyUp {
        /// Key-combo identifier
        key: String,
    },

    /// The environment lost focus; held keys should be treated as released
    Blur,
}

/// The kind of event a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    KeyDown,
    KeyUp,
    Blur,
}

impl KeyEvent {
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::KeyUp { key: key.into() }
    }

    /// The type listeners must register for to receive this event
    pub fn event_type(&self) -> EventType {
        match self {
            KeyEvent::KeyDown { .. } => EventType::KeyDown,
            KeyEvent::KeyUp { .. } => EventType::KeyUp,
            KeyEvent::Blur => EventType::Blur,
        }
    }

    /// The key-combo identifier carried by the event, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            KeyEvent::KeyDown { key } | KeyEvent::KeyUp { key } => Some(key),
            KeyEvent::Blur => None,
        }
    }
}

impl std::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyEvent::KeyDown { key } => write!(f, "KEY_DOWN ({})", key),
            KeyEvent::KeyUp { key } => write!(f, "KEY_UP ({})", key),
            KeyEvent::Blur => write!(f, "BLUR"),
        }
    }
}
