//! Core type definitions shared by the lexer, the parser and the macro
//! registry.

mod source_location;
pub use source_location::SourceLocation;

mod parse_error;
pub use parse_error::{ErrorLocationProvider, ParseError, ParseErrorKind};

mod tokens;
pub use tokens::{Special, Token, TokenKind};

mod settings;
pub use settings::{Settings, StrictMode};

use strum::{AsRefStr, Display};

/// Parsing mode of the expression being read.
///
/// The mode decides how whitespace and braces are interpreted: in
/// [`Mode::Normal`] a space is significant prose and a brace has no meaning,
/// while in [`Mode::Math`] whitespace is dropped and braces group atoms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mode {
    /// Ordinary prose.
    #[default]
    Normal,
    /// Inside a math-expression span.
    Math,
}
