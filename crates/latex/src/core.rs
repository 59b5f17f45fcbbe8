//! Main entry points.

use std::sync::OnceLock;

use crate::LatexContext;
use crate::ast::Node;
use crate::parser::Parser;
use crate::types::{ParseError, Settings};

/// Builtin context shared by [`parse_expression`].
pub fn default_context() -> &'static LatexContext {
    static CONTEXT: OnceLock<LatexContext> = OnceLock::new();
    CONTEXT.get_or_init(LatexContext::default)
}

/// Parses `source` with the given registry and settings.
///
/// ```
/// use latex::{LatexContext, Settings, parse};
///
/// let ctx = LatexContext::default();
/// let tree = parse(&ctx, r"$\frac{1}{2}$", &Settings::default()).unwrap();
/// assert_eq!(tree.children().len(), 1);
/// ```
pub fn parse(ctx: &LatexContext, source: &str, settings: &Settings) -> Result<Node, ParseError> {
    Parser::new(source, settings, ctx).parse()
}

/// Parses `source` with the builtin macros and default settings.
///
/// ```
/// use latex::ast::Node;
///
/// let tree = latex::parse_expression("x^2").unwrap();
/// let Node::List(list) = tree else { unreachable!() };
/// assert_eq!(list.len(), 2);
/// ```
pub fn parse_expression(source: &str) -> Result<Node, ParseError> {
    parse(default_context(), source, &Settings::default())
}

/// Parses `source` and renders the tree back to canonical LaTeX.
pub fn render_to_string(
    ctx: &LatexContext,
    source: &str,
    settings: &Settings,
) -> Result<String, ParseError> {
    parse(ctx, source, settings).map(|node| node.to_string())
}
