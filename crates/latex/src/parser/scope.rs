use core::ops::{Deref, DerefMut};

use crate::parser::Parser;
use crate::types::Mode;

/// Guard returned by [`Parser::enter`].
///
/// Dereferences to the parser. Dropping it restores the mode that was active
/// before and leaves the nesting level, on every exit path.
pub struct ModeScope<'p, 'a> {
    parser: &'p mut Parser<'a>,
    saved: Mode,
}

impl<'p, 'a> ModeScope<'p, 'a> {
    pub(super) fn new(parser: &'p mut Parser<'a>, mode: Mode) -> Self {
        let saved = parser.mode;
        parser.mode = mode;
        parser.depth += 1;
        Self { parser, saved }
    }
}

impl<'a> Deref for ModeScope<'_, 'a> {
    type Target = Parser<'a>;

    fn deref(&self) -> &Self::Target {
        self.parser
    }
}

impl DerefMut for ModeScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.parser
    }
}

impl Drop for ModeScope<'_, '_> {
    fn drop(&mut self) {
        self.parser.mode = self.saved;
        self.parser.depth -= 1;
    }
}
