//! Human-readable hotkey hints
//!
//! Turns a key-combo identifier such as `ctrl+shift+s` into the text shown
//! next to a control: `Ctrl + Shift + S` on most platforms and glyphs on
//! Mac-like ones.

use std::sync::LazyLock;

use regex::Regex;

use super::keys::{title_case, Modifier, COMBO_SEPARATOR};
use super::overrides::Overrides;
use crate::environment::Environment;

/// Separator between title-cased tokens on non-Mac platforms
const HINT_SEPARATOR: &str = " + ";

/// One `(.*)KEYWORD(.*)` pattern per modifier, in substitution order
static MAC_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    Modifier::MAC_ORDER
        .iter()
        .map(|modifier| {
            let pattern = format!("(.*){}(.*)", modifier.keyword());
            let regex = Regex::new(&pattern).expect("Invalid modifier regex");
            let replacement = format!("{} ${{1}}${{2}}", modifier.glyph());
            (regex, replacement)
        })
        .collect()
});

/// Format `combo` for display in `env`.
///
/// If an override maps some alternate to `combo`, the first such
/// alternate is displayed instead. Malformed combos produce malformed
/// text rather than an error.
pub fn format_hint(env: &Environment, combo: &str, overrides: &Overrides) -> String {
    let combo = overrides.resolve(combo);
    let parts: Vec<String> = combo.split(COMBO_SEPARATOR).map(title_case).collect();

    if env.is_mac() {
        mac_glyphs(&parts.concat())
    } else {
        parts.join(HINT_SEPARATOR)
    }
}

/// Move each modifier keyword to the front of the string as its glyph.
///
/// Only the last occurrence of each keyword is replaced, and later
/// modifiers in `Modifier::MAC_ORDER` end up in front of earlier ones.
fn mac_glyphs(joined: &str) -> String {
    MAC_PATTERNS
        .iter()
        .fold(joined.to_string(), |text, (regex, replacement)| {
            regex.replace(&text, replacement.as_str()).into_owned()
        })
}
