//! Travel modes and per-link allowed-use sets.
//!
//! Two textual encodings exist for historical reasons. The symbol encoding
//! uses one character per mode with `a` as the wildcard (`"cb"`, `"a"`). The
//! token encoding uses short names with `all` as the wildcard
//! (`"auto;bike"`, `"all"`). Both parse into the same [`Mode`] and
//! [`AllowedUses`] types so the engine never sees the difference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Wildcard symbol of the single-character encoding
pub const ALL_MODES_SYMBOL: char = 'a';

/// Wildcard token of the multi-character encoding
pub const ALL_MODES_TOKEN: &str = "all";

/// Textual encoding used for modes and allowed uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeEncoding {
    /// One character per mode, `a` means all modes
    Symbol,
    /// Named tokens separated by `;`, `,` or whitespace, `all` means all modes
    #[default]
    Token,
}

/// The travel mode a search runs under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every link is traversable regardless of its allowed uses
    All,
    /// Only links permitting this mode (or the wildcard) are traversable
    Token(String),
}

impl Mode {
    /// Builds a mode from the single-character encoding
    pub fn from_symbol(symbol: char) -> Self {
        if symbol == ALL_MODES_SYMBOL {
            Mode::All
        } else {
            Mode::Token(symbol.to_string())
        }
    }

    /// Builds a mode from the token encoding
    pub fn from_token(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() || token.contains(is_separator) {
            return Err(Error::InvalidMode(token.to_string()));
        }
        if token == ALL_MODES_TOKEN {
            Ok(Mode::All)
        } else {
            Ok(Mode::Token(token.to_string()))
        }
    }

    /// Parses `text` in the given encoding
    pub fn parse(text: &str, encoding: ModeEncoding) -> Result<Self> {
        match encoding {
            ModeEncoding::Token => Mode::from_token(text),
            ModeEncoding::Symbol => {
                let mut chars = text.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Ok(Mode::from_symbol(symbol)),
                    _ => Err(Error::InvalidMode(text.to_string())),
                }
            }
        }
    }

    /// Returns true for the all-modes wildcard, however it was built
    pub fn is_all(&self) -> bool {
        match self {
            Mode::All => true,
            Mode::Token(token) => token == ALL_MODES_TOKEN,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::All
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::from_token(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::All => f.write_str(ALL_MODES_TOKEN),
            Mode::Token(token) => f.write_str(token),
        }
    }
}

/// The set of modes permitted on a link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedUses {
    /// Set when the wildcard was present
    all: bool,
    /// Sorted, deduplicated mode tokens
    tokens: Vec<String>,
}

impl AllowedUses {
    /// A set permitting every mode
    pub fn all() -> Self {
        AllowedUses { all: true, tokens: Vec::new() }
    }

    /// A set permitting no mode at all (only traversable under [`Mode::All`])
    pub fn none() -> Self {
        AllowedUses::default()
    }

    /// Parses the single-character encoding, e.g. `"cbw"`
    pub fn from_symbols(text: &str) -> Self {
        let mut uses = AllowedUses::default();
        for symbol in text.chars().filter(|c| !c.is_whitespace()) {
            if symbol == ALL_MODES_SYMBOL {
                uses.all = true;
            } else {
                uses.insert_token(symbol.to_string());
            }
        }
        uses
    }

    /// Parses the token encoding, e.g. `"auto;bike"` or `"all"`
    pub fn from_tokens(text: &str) -> Self {
        text.split(is_separator).filter(|t| !t.is_empty()).collect()
    }

    /// Parses `text` in the given encoding
    pub fn parse(text: &str, encoding: ModeEncoding) -> Self {
        match encoding {
            ModeEncoding::Symbol => AllowedUses::from_symbols(text),
            ModeEncoding::Token => AllowedUses::from_tokens(text),
        }
    }

    fn insert(&mut self, token: &str) {
        let token = token.trim();
        if token == ALL_MODES_TOKEN {
            self.all = true;
        } else if !token.is_empty() {
            self.insert_token(token.to_string());
        }
    }

    fn insert_token(&mut self, token: String) {
        if let Err(pos) = self.tokens.binary_search(&token) {
            self.tokens.insert(pos, token);
        }
    }

    /// Returns true if the wildcard is present
    pub fn permits_all(&self) -> bool {
        self.all
    }

    /// Returns true if `token` is listed explicitly
    pub fn contains(&self, token: &str) -> bool {
        self.tokens
            .binary_search_by(|t| t.as_str().cmp(token))
            .is_ok()
    }

    /// Iterates the explicit tokens in sorted order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Collects explicit tokens; `all` among them sets the wildcard
impl<S: AsRef<str>> FromIterator<S> for AllowedUses {
    fn from_iter<I: IntoIterator<Item = S>>(tokens: I) -> Self {
        let mut uses = AllowedUses::default();
        for token in tokens {
            uses.insert(token.as_ref());
        }
        uses
    }
}

impl FromStr for AllowedUses {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(AllowedUses::from_tokens(s))
    }
}

/// Decides whether a link with `uses` may be traversed under `mode`
#[inline]
pub fn is_traversable(mode: &Mode, uses: &AllowedUses) -> bool {
    match mode {
        Mode::All => true,
        Mode::Token(token) => token == ALL_MODES_TOKEN || uses.all || uses.contains(token),
    }
}

fn is_separator(c: char) -> bool {
    c == ';' || c == ',' || c.is_whitespace()
}
