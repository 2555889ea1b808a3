//! Modifier key definitions and key-name casing
//!
//! Provides the modifier keywords that appear in title-cased combos and
//! the glyphs Mac-like platforms display in their place.

/// Separator between tokens of a key-combo identifier
pub const COMBO_SEPARATOR: char = '+';

/// Modifier keys that get a glyph on Mac-like platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Command key
    Meta,
    Shift,
    /// Option key
    Alt,
    /// Control key
    Ctrl,
}

impl Modifier {
    /// Order in which glyph substitution is applied.
    ///
    /// Each step prefixes its glyph to the whole string, so the rendered
    /// glyphs appear in the reverse of this order.
    pub const MAC_ORDER: [Modifier; 4] =
        [Modifier::Meta, Modifier::Shift, Modifier::Alt, Modifier::Ctrl];

    /// Title-cased name as it appears in a joined combo
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Meta => "Meta",
            Modifier::Shift => "Shift",
            Modifier::Alt => "Alt",
            Modifier::Ctrl => "Ctrl",
        }
    }

    /// Mac symbol for this modifier
    pub fn glyph(self) -> char {
        match self {
            Modifier::Meta => '⌘',
            Modifier::Shift => '⇧',
            Modifier::Alt => '⌥',
            Modifier::Ctrl => '⌃',
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Upper-case the first character of a token, leaving the rest untouched.
///
/// An empty token stays empty.
pub fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("shift"), "Shift");
        assert_eq!(title_case("s"), "S");
        assert_eq!(title_case("pageUp"), "PageUp");
        assert_eq!(title_case("ARROWLEFT"), "ARROWLEFT");
    }

    #[test]
    fn test_title_case_edge_tokens() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("1"), "1");
        assert_eq!(title_case("ßig"), "SSig");
        assert_eq!(title_case("éclair"), "Éclair");
    }

    #[test]
    fn test_mac_order() {
        let keywords: Vec<_> = Modifier::MAC_ORDER.iter().map(|m| m.keyword()).collect();
        assert_eq!(keywords, ["Meta", "Shift", "Alt", "Ctrl"]);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Modifier::Meta.glyph(), '⌘');
        assert_eq!(Modifier::Shift.glyph(), '⇧');
        assert_eq!(Modifier::Alt.glyph(), '⌥');
        assert_eq!(Modifier::Ctrl.glyph(), '⌃');
        assert_eq!(Modifier::Ctrl.to_string(), "Ctrl");
    }
}
