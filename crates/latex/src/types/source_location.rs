use alloc::sync::Arc;
use core::ops::Range;

use crate::types::ErrorLocationProvider;

/// Span of a token in the expression it was lexed from.
///
/// Offsets are byte offsets into `input`. The input is shared between every
/// token of a parse, so cloning a location only bumps a reference count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Reference-counted source expression.
    pub input: Arc<str>,
    /// Zero-based inclusive start offset.
    pub start: usize,
    /// Zero-based exclusive end offset.
    pub end: usize,
}

impl SourceLocation {
    /// Creates a location covering `start..end` of `input`.
    ///
    /// ```
    /// use latex::types::SourceLocation;
    /// use std::sync::Arc;
    ///
    /// let loc = SourceLocation::new(Arc::from("x^2"), 1, 2);
    /// assert_eq!(loc.text(), "^");
    /// ```
    #[must_use]
    pub const fn new(input: Arc<str>, start: usize, end: usize) -> Self {
        Self { input, start, end }
    }

    /// Returns the start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the covered byte range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the source text covered by this location.
    ///
    /// Out-of-range or non-boundary offsets yield an empty string.
    #[must_use]
    pub fn text(&self) -> &str {
        self.input.get(self.range()).unwrap_or_default()
    }

    /// Returns a location spanning from the start of `self` to the end of
    /// `other`. Both locations must come from the same input.
    #[must_use]
    pub fn range_to(&self, other: &Self) -> Self {
        debug_assert!(Arc::ptr_eq(&self.input, &other.input));
        Self::new(Arc::clone(&self.input), self.start, other.end.max(self.start))
    }
}

impl ErrorLocationProvider for SourceLocation {
    fn loc(&self) -> Option<&SourceLocation> {
        Some(self)
    }
}
