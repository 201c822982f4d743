//! ANSI color-name resolution.

use std::fmt;

/// The 16 named colors zoneclock understands: the 8 standard ANSI foreground
/// colors plus their bright variants, mapped to SGR codes.
const COLOR_TABLE: [(&str, &str); 16] = [
    ("black", "30"),
    ("red", "31"),
    ("green", "32"),
    ("yellow", "33"),
    ("blue", "34"),
    ("magenta", "35"),
    ("cyan", "36"),
    ("white", "37"),
    ("bright_black", "90"),
    ("bright_red", "91"),
    ("bright_green", "92"),
    ("bright_yellow", "93"),
    ("bright_blue", "94"),
    ("bright_magenta", "95"),
    ("bright_cyan", "96"),
    ("bright_white", "97"),
];

/// A resolved terminal color, held as an SGR parameter string.
///
/// Constructed from a configured value: recognized color names resolve
/// through the fixed 16-entry table, while anything else passes through
/// unchanged so users can supply raw SGR parameters (e.g. `38;5;208`)
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCode(String);

impl ColorCode {
    /// Resolves a configured color value to an SGR parameter string.
    pub fn resolve(value: &str) -> Self {
        let code = COLOR_TABLE
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, code)| *code)
            .unwrap_or(value);

        ColorCode(code.to_string())
    }

    /// Returns the SGR parameter string (e.g. `"32"` for green).
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Returns the full escape sequence that switches the terminal to this
    /// color.
    pub fn prefix(&self) -> String {
        format!("\x1b[{}m", self.0)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
