//! Hotkey module for displaying key combos
//!
//! Formats key-combo identifiers into platform-appropriate hints,
//! honoring user overrides.

mod hint;
mod keys;
mod overrides;

pub use hint::format_hint;
pub use keys::{title_case, Modifier, COMBO_SEPARATOR};
pub use overrides::Overrides;
