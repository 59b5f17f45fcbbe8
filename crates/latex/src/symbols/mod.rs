//! Symbol tables.
//!
//! The sets below are generated at build time from `data/symbols.json`,
//! which follows the categories of matplotlib's mathtext parser. They drive
//! the zero-argument entries of the builtin macro catalogue and let tooling
//! classify symbols and macros.

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator as _};

include!(concat!(env!("OUT_DIR"), "/generated_symbol_sets.rs"));

/// Typesetting category of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SymbolClass {
    /// `+`, `\pm`, ...
    BinaryOperator,
    /// `=`, `\leq`, ...
    Relation,
    /// `\to`, `\mapsto`, ...
    Arrow,
    /// `,`, `;`, ...
    Punctuation,
    /// `\sum`, `\prod`, ...
    OverUnder,
    /// `\int`, `\oint`
    DropSub,
    /// `\sin`, `\log`, ...
    Function,
    /// `(`, `\langle`, ...
    LeftDelim,
    /// `)`, `\rangle`, ...
    RightDelim,
    /// `|`, `\Vert`, ...
    AmbiDelim,
    /// `\alpha`, `\Omega`, ...
    Greek,
    /// `\infty`, `\partial`, ...
    Misc,
}

impl SymbolClass {
    fn contains(self, text: &str) -> bool {
        match self {
            Self::BinaryOperator => BINARY_OPERATORS.contains(text),
            Self::Relation => RELATION_SYMBOLS.contains(text),
            Self::Arrow => ARROW_SYMBOLS.contains(text),
            Self::Punctuation => PUNCTUATION_SYMBOLS.contains(text),
            Self::OverUnder => OVERUNDER_SYMBOLS.contains(text),
            Self::DropSub => DROPSUB_SYMBOLS.contains(text),
            Self::Function => text.strip_prefix('\\').is_some_and(|name| {
                FUNCTION_NAMES.contains(name) || OVERUNDER_FUNCTIONS.contains(name)
            }),
            Self::LeftDelim => LEFT_DELIM.contains(text),
            Self::RightDelim => RIGHT_DELIM.contains(text),
            Self::AmbiDelim => AMBI_DELIM.contains(text),
            Self::Greek => GREEK_LETTERS.contains(text),
            Self::Misc => MISC_SYMBOLS.contains(text),
        }
    }
}

/// Returns the category of a symbol or macro name such as `+` or `\leq`.
///
/// A name listed in several sets (`\uparrow` is both an arrow and a
/// delimiter) gets the first matching class in declaration order.
///
/// ```
/// use latex::symbols::{classify, SymbolClass};
///
/// assert_eq!(classify(r"\leq"), Some(SymbolClass::Relation));
/// assert_eq!(classify(r"\sin"), Some(SymbolClass::Function));
/// assert_eq!(classify("x"), None);
/// ```
#[must_use]
pub fn classify(text: &str) -> Option<SymbolClass> {
    SymbolClass::iter().find(|class| class.contains(text))
}

/// Whether `name` can be lexed as a single macro token: a backslash followed
/// either by ASCII letters or by exactly one other character.
#[must_use]
pub fn is_macro_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('\\') else {
        return false;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphabetic()),
        Some(_) => chars.next().is_none(),
        None => false,
    }
}

/// Macro names contained in `set`, skipping plain characters.
pub fn macro_names(set: &'static phf::Set<&'static str>) -> impl Iterator<Item = &'static str> {
    set.iter().copied().filter(|name| is_macro_name(name))
}
