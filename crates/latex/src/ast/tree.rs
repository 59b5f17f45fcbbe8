//! Indented, one-node-per-line dump of a syntax tree.
//!
//! ```
//! let node = latex::parse_expression("x^2").unwrap();
//! assert_eq!(
//!     latex::ast::tree::dump(&node),
//!     "List\n  Word \"x\" @0\n  Sup @1\n    Literal \"2\" @2\n"
//! );
//! ```

use core::fmt;

use super::Node;
use crate::symbols::classify;

/// Displays a node and its descendants, two spaces per level.
#[derive(Debug, Clone, Copy)]
pub struct TreeDump<'a>(pub &'a Node);

impl TreeDump<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", node.node_type(), indent = depth * 2)?;
        match node {
            Node::Word(_) | Node::Literal(_) | Node::Symbol(_) => {
                if let Some(text) = node.text() {
                    write!(f, " {text:?}")?;
                }
                write!(f, " @{}", node.pos())?;
            }
            Node::Macro(m) => write!(f, " {} @{}", m.name, m.pos)?,
            Node::MathExpr(expr) => write!(f, " {} @{}..{}", expr.delim, expr.left, expr.right)?,
            Node::Arg(arg) => write!(f, " @{}..{}", arg.lbrace, arg.rbrace)?,
            Node::OptArg(arg) => write!(f, " @{}..{}", arg.lbrack, arg.rbrack)?,
            Node::Sup(_) | Node::Sub(_) => write!(f, " @{}", node.pos())?,
            Node::List(_) => {}
        }
        if let Node::Symbol(_) | Node::Macro(_) = node
            && let Some(class) = node.text().and_then(classify)
        {
            write!(f, " ({class})")?;
        }
        writeln!(f)?;
        node.children()
            .iter()
            .try_for_each(|child| Self::write_node(f, child, depth + 1))
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.0, 0)
    }
}

/// Renders the tree dump of `node` into a string.
#[must_use]
pub fn dump(node: &Node) -> String {
    TreeDump(node).to_string()
}
