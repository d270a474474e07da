//! ANSI foreground color decoration
//!
//! Entry names are wrapped with an SGR foreground prefix and the standard
//! reset sequence. Colors are selected by a palette index: 0-9 map to the
//! standard foreground codes 30-39, 10-19 to the bright variants 90-99.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const RESET: &str = "\x1b[0m";

/// Palette index used when the configured index falls outside [0, 19].
pub const DEFAULT_INDEX: i32 = 2;

/// Color selection, fixed at lister construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Whether entry names are decorated at all.
    pub enabled: bool,

    /// Palette index in [0, 19]; out-of-range values reset to
    /// [`DEFAULT_INDEX`].
    pub index: i32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            index: DEFAULT_INDEX,
        }
    }
}

impl ColorConfig {
    /// Resolve the configured index into the color actually emitted.
    pub fn resolved(&self) -> EntryColor {
        EntryColor::from_index(self.index)
    }
}

/// A resolved foreground color holding the SGR code actually written
/// (30-39 standard, 90-99 bright). Computed once, immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryColor {
    code: u8,
}

impl EntryColor {
    /// Resolve a palette index, applying the out-of-range reset and the
    /// bright offset.
    pub fn from_index(index: i32) -> Self {
        let index = if (0..=19).contains(&index) {
            index
        } else {
            DEFAULT_INDEX
        };
        let code = if index >= 10 {
            90 + (index - 10)
        } else {
            30 + index
        };
        Self { code: code as u8 }
    }

    /// The SGR code written in the prefix.
    #[allow(dead_code)]
    pub fn code(&self) -> u8 {
        self.code
    }

    #[allow(dead_code)]
    pub fn is_bright(&self) -> bool {
        self.code >= 90
    }

    /// Wrap a name with the color prefix and the terminal reset.
    pub fn decorate(&self, name: &str) -> String {
        format!("{self}{name}{RESET}")
    }
}

impl Display for EntryColor {
    /// SGR: set graphics mode command, `\x1b[{code}m`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{CSI}{code}{SGR}", code = self.code)
    }
}

/// Remove one color prefix and one trailing reset, recovering the raw
/// name. Undecorated text is returned unchanged.
#[allow(dead_code)]
pub fn strip(text: &str) -> &str {
    let text = text.strip_suffix(RESET).unwrap_or(text);
    match text.strip_prefix(CSI) {
        Some(rest) => rest.split_once(SGR).map(|(_, name)| name).unwrap_or(text),
        None => text,
    }
}
