//! Built-in plugin that reports the hint for every pressed combo

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::runner::{Plugin, PluginError};
use super::teardown::Teardown;
use crate::environment::Environment;
use crate::events::{EventType, KeyEvent};
use crate::hotkey::{format_hint, Overrides};
use crate::keyboard::likely_with_keyboard;

/// A pressed combo together with its display hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub combo: String,
    pub hint: String,
}

/// Forwards a [`Hint`] for each `key_down` event to a channel
pub struct HintEcho {
    overrides: Overrides,
    hint_tx: mpsc::UnboundedSender<Hint>,
}

impl HintEcho {
    pub fn new(overrides: Overrides, hint_tx: mpsc::UnboundedSender<Hint>) -> Self {
        Self { overrides, hint_tx }
    }
}

impl Plugin for HintEcho {
    fn setup(&self, env: &Environment) -> Result<Teardown, PluginError> {
        if !likely_with_keyboard(env) {
            info!(user_agent = env.user_agent(), "no keyboard detected, hints disabled");
            return Ok(Teardown::noop());
        }

        let overrides = self.overrides.clone();
        let hint_tx = self.hint_tx.clone();
        let hint_env = env.clone();
        let id = env.add_listener(EventType::KeyDown, move |event: &KeyEvent| {
            let Some(combo) = event.key() else {
                return;
            };
            let hint = Hint {
                combo: combo.to_string(),
                hint: format_hint(&hint_env, combo, &overrides),
            };
            debug!(?hint, "hint formatted");
            // Receiver gone means the host is shutting down
            let _ = hint_tx.send(hint);
        });

        let env = env.clone();
        Ok(Teardown::new(move || {
            env.remove_listener(id);
        }))
    }

    fn name(&self) -> &str {
        "hint-echo"
    }
}
