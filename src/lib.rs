//! keyux: keyboard UX helpers for application hosts
//!
//! Provides:
//! - A plugin runner that starts keyboard behaviors against an environment
//!   and stops them all with one call
//! - A heuristic guessing whether the device has a physical keyboard
//! - Hotkey hints formatted for the platform (`⌘ S` or `Ctrl + S`)
//!
//! ```
//! use keyux::{format_hint, Environment, Overrides};
//!
//! let env = Environment::new("Mozilla/5.0", "Win32");
//! assert_eq!(format_hint(&env, "ctrl+shift+s", &Overrides::new()), "Ctrl + Shift + S");
//! ```

pub mod config;
pub mod environment;
pub mod events;
pub mod host;
pub mod hotkey;
pub mod keyboard;
pub mod lifecycle;
pub mod plugin;

pub use config::Config;
pub use environment::{Environment, ListenerId};
pub use events::{EventType, KeyEvent};
pub use hotkey::{format_hint, Overrides};
pub use keyboard::likely_with_keyboard;
pub use plugin::{start_key_ux, Plugin, PluginError, StopAll, Teardown};
