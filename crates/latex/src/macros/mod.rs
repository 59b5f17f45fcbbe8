//! Builtin macro catalogue.
//!
//! Each submodule registers one family of macros. Most rely on the generic
//! argument walk of [`parse_args`](crate::define_macro::parse_args); a few
//! (`\hspace*`, `\operatorname*`) install a handler to read a star.

mod accent;
mod delimsizing;
mod font;
mod genfrac;
mod spacing;
mod sqrt;
mod symbols;

use crate::LatexContext;
use crate::ast::Node;
use crate::define_macro::MacroContext;
use crate::types::{ParseError, TokenKind};

pub use accent::define_accent;
pub use delimsizing::define_delimsizing;
pub use font::define_font;
pub use genfrac::define_genfrac;
pub use spacing::define_spacing;
pub use sqrt::define_sqrt;
pub use symbols::define_symbols;

/// Registers every builtin macro family in `ctx`.
pub fn define_builtin_macros(ctx: &mut LatexContext) {
    define_symbols(ctx);
    define_spacing(ctx);
    define_font(ctx);
    define_accent(ctx);
    define_genfrac(ctx);
    define_sqrt(ctx);
    define_delimsizing(ctx);
}

/// Handler for macros with a starred variant: a `*` right after the name is
/// folded into the macro name, then the declared arguments are read.
pub(crate) fn parse_starred(mut context: MacroContext) -> Result<Node, ParseError> {
    let mut node = context.new_node();
    if context.parser.peek_char() == Some('*') {
        let star = context.parser.next_token();
        debug_assert_eq!(star.kind, TokenKind::Symbol);
        node.name.push_str(&star.text);
    }
    context.parse_declared_args(&mut node)?;
    Ok(Node::Macro(node))
}
