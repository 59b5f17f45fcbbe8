//! Parser configuration.

use bon::bon;
use log::warn;
use strum::{AsRefStr, Display, EnumString};

use crate::types::{ErrorLocationProvider, ParseError, ParseErrorKind};

/// How to treat input that parses but is not valid LaTeX.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum StrictMode {
    /// Accept silently.
    Ignore,
    /// Accept and log a warning.
    #[default]
    Warn,
    /// Reject with [`ParseErrorKind::StrictModeError`].
    Error,
}

/// Options for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Policy for LaTeX-incompatible input.
    pub strict: StrictMode,
    /// Deepest nesting of math spans, groups, scripts and macro arguments
    /// accepted before failing with [`ParseErrorKind::NestingTooDeep`].
    /// `None` leaves recursion unbounded.
    pub max_nesting: Option<usize>,
}

#[bon]
impl Settings {
    /// Creates settings, filling unset options with their defaults.
    ///
    /// ```
    /// use latex::types::{Settings, StrictMode};
    ///
    /// let settings = Settings::builder()
    ///     .strict(StrictMode::Error)
    ///     .max_nesting(64)
    ///     .build();
    /// assert_eq!(settings.max_nesting, Some(64));
    /// ```
    #[builder]
    pub fn new(
        /// Policy for LaTeX-incompatible input.
        strict: Option<StrictMode>,
        /// Nesting limit.
        max_nesting: Option<usize>,
    ) -> Self {
        Self {
            strict: strict.unwrap_or_default(),
            max_nesting,
        }
    }

    /// Reports input that LaTeX itself would reject, according to
    /// [`Settings::strict`].
    ///
    /// `error_code` is a stable camel-case identifier such as `emptyScript`.
    pub fn report_nonstrict(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> Result<(), ParseError> {
        match self.strict {
            StrictMode::Ignore => Ok(()),
            StrictMode::Warn => {
                warn!(
                    "LaTeX-incompatible input and strict mode is set to 'warn': {error_msg} [{error_code}]"
                );
                Ok(())
            }
            StrictMode::Error => {
                let kind = ParseErrorKind::StrictModeError {
                    message: error_msg.to_owned(),
                    code: error_code.to_owned(),
                };
                Err(match token {
                    Some(t) => ParseError::with_token(kind, t),
                    None => ParseError::new(kind),
                })
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
