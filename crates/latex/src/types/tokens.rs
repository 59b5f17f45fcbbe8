use core::fmt;
use core::str::FromStr as _;

use strum::{AsRefStr, Display, EnumString};

use crate::types::{ErrorLocationProvider, SourceLocation};

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Maximal run of letters.
    Word,
    /// A single digit.
    Number,
    /// Punctuation or a mathematical character.
    Symbol,
    /// Control word (`\alpha`) or control symbol (`\,`).
    Macro,
    /// `%` comment, up to but excluding the newline.
    Comment,
    /// Run of whitespace.
    Space,
    /// `{`
    Lbrace,
    /// `}`
    Rbrace,
    /// `[`
    Lbrack,
    /// `]`
    Rbrack,
    /// `(`
    Lparen,
    /// `)`
    Rparen,
    /// Characters the parser has no construct for (`&`, `#`, `~`, controls).
    Other,
    /// End of input.
    #[strum(serialize = "EOF")]
    Eof,
}

/// Token identities the parser gives a meaning of their own.
///
/// Resolved once when the token is built so the parser never compares raw
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Special {
    /// `$`, opens and closes inline math.
    #[strum(serialize = "$")]
    Dollar,
    /// `^`, superscript.
    #[strum(serialize = "^")]
    Hat,
    /// `_`, subscript.
    #[strum(serialize = "_")]
    Underscore,
    /// `\(`
    #[strum(serialize = r"\(")]
    OpenInlineMath,
    /// `\)`
    #[strum(serialize = r"\)")]
    CloseInlineMath,
    /// `\[`
    #[strum(serialize = r"\[")]
    OpenDisplayMath,
    /// `\]`
    #[strum(serialize = r"\]")]
    CloseDisplayMath,
    /// `\begin`
    #[strum(serialize = r"\begin")]
    Begin,
    /// `\end`
    #[strum(serialize = r"\end")]
    End,
}

impl Special {
    /// Returns the delimiter closing a math span opened by `self`, if `self`
    /// opens one the parser supports.
    #[must_use]
    pub const fn closing(self) -> Option<Self> {
        match self {
            Self::Dollar => Some(Self::Dollar),
            Self::OpenInlineMath => Some(Self::CloseInlineMath),
            Self::OpenDisplayMath => Some(Self::CloseDisplayMath),
            _ => None,
        }
    }
}

/// A lexical token produced by a [`TokenSource`](crate::lexer::TokenSource).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Source text of the token. Control words exclude swallowed spaces.
    pub text: String,
    /// Where the token was found.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub loc: SourceLocation,
    /// Special identity, for symbol and macro tokens the parser reacts to.
    pub special: Option<Special>,
}

impl Token {
    /// Builds a token, resolving its [`Special`] identity.
    #[must_use]
    pub fn new(kind: TokenKind, text: String, loc: SourceLocation) -> Self {
        let special = if matches!(kind, TokenKind::Symbol | TokenKind::Macro) {
            Special::from_str(&text).ok()
        } else {
            None
        };
        Self {
            kind,
            text,
            loc,
            special,
        }
    }

    /// Byte offset of the token in the source.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.loc.start
    }

    /// Whether this is the end-of-input token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str("EOF")
        } else {
            f.write_str(&self.text)
        }
    }
}

impl ErrorLocationProvider for Token {
    fn loc(&self) -> Option<&SourceLocation> {
        Some(&self.loc)
    }
}
