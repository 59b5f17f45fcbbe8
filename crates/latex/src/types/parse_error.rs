//! Parse errors with source context.
//!
//! A [`ParseError`] carries the categorised [`ParseErrorKind`] together with
//! the offending span, and renders a short excerpt of the input with that
//! span underlined.

use core::fmt;

use thiserror::Error;

use crate::types::{Mode, SourceLocation, TokenKind};

/// Error returned when an expression cannot be parsed.
///
/// Every error is fatal to the parse call that produced it; no partial tree
/// is returned alongside.
#[derive(Debug, Error)]
#[error("parse error: {kind}{context}")]
pub struct ParseError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<ParseErrorKind>,
    /// Byte offset of the offending token, when known.
    pub position: Option<usize>,
    /// Byte length of the offending token, when known.
    pub length: Option<usize>,
    context: ParseErrorContext,
}

impl ParseError {
    /// Creates an error without location information.
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self::from_kind(kind.into(), ParseErrorContext::None, None, None)
    }

    /// Creates an error located at a token or span.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &dyn ErrorLocationProvider) -> Self {
        let mut position = None;
        let mut length = None;
        let context = token.loc().filter(|loc| loc.start() <= loc.end()).map_or(
            ParseErrorContext::None,
            |loc| {
                position = Some(loc.start());
                length = Some(loc.end() - loc.start());
                ParseErrorContext::Location(loc.clone())
            },
        );
        Self::from_kind(kind.into(), context, position, length)
    }

    fn from_kind(
        kind: ParseErrorKind,
        context: ParseErrorContext,
        position: Option<usize>,
        length: Option<usize>,
    ) -> Self {
        Self {
            kind: Box::new(kind),
            position,
            length,
            context,
        }
    }

    /// Returns the categorised reason for the failure.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// Describes the specific reason for a [`ParseError`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Message(&'static str),
    #[error("Undefined control sequence: {name}")]
    UnknownMacro { name: String },
    #[error("'{token}' is not allowed in {mode} mode")]
    UnsupportedContext { token: String, mode: Mode },
    #[error("Not implemented: '{token}'")]
    Unimplemented { token: String },
    #[error("Unsupported math-expression delimiter '{delimiter}'")]
    UnsupportedDelimiter { delimiter: String },
    #[error("Unterminated math expression opened by '{delimiter}'")]
    UnterminatedMathExpr { delimiter: String },
    #[error("Unterminated group, expected '}}'")]
    UnterminatedGroup,
    #[error("Unterminated argument to {macro_name}")]
    UnterminatedArg { macro_name: String },
    #[error("Expected '{expected}', got '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("No closing delimiter for {open}")]
    NoMatchingDelimiter { open: TokenKind },
    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("LaTeX-incompatible input and strict mode is set to 'error': {message} [{code}]")]
    StrictModeError { message: String, code: String },
}

impl From<&'static str> for ParseErrorKind {
    fn from(message: &'static str) -> Self {
        Self::Message(message)
    }
}

#[derive(Debug)]
enum ParseErrorContext {
    None,
    Location(SourceLocation),
}

impl fmt::Display for ParseErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Location(SourceLocation { input, start, end }) => {
                let input_len = input.len();
                let end = (*end).min(input_len);
                let start = (*start).min(end);
                if start == input_len {
                    write!(f, " at end of input: ")?;
                } else {
                    write!(f, " at position {}: ", start + 1)?;
                }

                let prefix_start = adjust_char_boundary(input, start.saturating_sub(15), false);
                if prefix_start > 0 {
                    write!(f, "\u{2026}")?;
                }
                write!(f, "{}", &input[prefix_start..start])?;
                for c in input[start..end].chars() {
                    write!(f, "{c}\u{0332}")?;
                }
                let suffix_end = adjust_char_boundary(input, (end + 15).min(input_len), true);
                write!(f, "{}", &input[end..suffix_end])?;
                if suffix_end < input_len {
                    write!(f, "\u{2026}")?;
                }
                Ok(())
            }
        }
    }
}

const fn adjust_char_boundary(input: &str, mut index: usize, forward: bool) -> usize {
    if forward {
        while index < input.len() && !input.is_char_boundary(index) {
            index += 1;
        }
    } else {
        while index > 0 && !input.is_char_boundary(index) {
            index -= 1;
        }
    }
    index
}

/// Types that can point a [`ParseError`] at a span of the input.
pub trait ErrorLocationProvider {
    /// Returns the source location, if one is known.
    fn loc(&self) -> Option<&SourceLocation>;
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::*;

    #[test]
    fn error_without_location_has_no_context() {
        let err = ParseError::new(ParseErrorKind::UnterminatedGroup);
        assert_eq!(err.to_string(), "parse error: Unterminated group, expected '}'");
        assert_eq!(err.position, None);
        assert_eq!(err.length, None);
    }

    #[test]
    fn error_underlines_offending_span() {
        let loc = SourceLocation::new(Arc::from(r"a \foo b"), 2, 6);
        let err = ParseError::with_token(
            ParseErrorKind::UnknownMacro {
                name: r"\foo".to_owned(),
            },
            &loc,
        );
        assert_eq!(err.position, Some(2));
        assert_eq!(err.length, Some(4));
        assert_eq!(
            err.to_string(),
            "parse error: Undefined control sequence: \\foo at position 3: a \\\u{332}f\u{332}o\u{332}o\u{332} b"
        );
    }

    #[test]
    fn error_at_end_of_input() {
        let loc = SourceLocation::new(Arc::from("$x"), 2, 2);
        let err = ParseError::with_token("unexpected end", &loc);
        assert_eq!(err.to_string(), "parse error: unexpected end at end of input: $x");
    }

    #[test]
    fn long_inputs_are_elided() {
        let input = "abcdefghijklmnopqrstuvwxyz0123456789abcdefghijklmnop";
        let loc = SourceLocation::new(Arc::from(input), 26, 27);
        let rendered = ParseError::with_token("bad", &loc).to_string();
        assert!(rendered.starts_with("parse error: bad at position 27: \u{2026}lmnopqrstuvwxyz0\u{332}"));
        assert!(rendered.ends_with('\u{2026}'));
    }

    #[test]
    fn mode_renders_lowercase() {
        let kind = ParseErrorKind::UnsupportedContext {
            token: "{".to_owned(),
            mode: Mode::Normal,
        };
        assert_eq!(kind.to_string(), "'{' is not allowed in normal mode");
    }
}
