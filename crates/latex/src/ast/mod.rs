//! Abstract syntax tree produced by the [`Parser`](crate::parser::Parser).
//!
//! Nodes are built bottom-up and never mutated afterwards. Every position is
//! a byte offset into the parsed expression; spans are exposed through
//! [`Node::pos`] and [`Node::end`].

mod display;
pub mod tree;

use core::slice;

use strum::{AsRefStr, Display, EnumDiscriminants};

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(doc = "Kind of a [`Node`], without its payload.")]
#[strum_discriminants(name(NodeType), derive(Display, AsRefStr, Hash))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum Node {
    /// Run of letters.
    Word(Word),
    /// Numeric token.
    Literal(Literal),
    /// Punctuation, bracket or prose whitespace, rendered verbatim.
    Symbol(Symbol),
    /// A `$…$`, `\(…\)` or `\[…\]` span.
    MathExpr(MathExpr),
    /// Superscript.
    Sup(Sup),
    /// Subscript.
    Sub(Sub),
    /// Macro invocation with its arguments.
    Macro(Macro),
    /// Mandatory `{…}` macro argument.
    Arg(Arg),
    /// Optional `[…]` macro argument.
    OptArg(OptArg),
    /// Sequence of nodes: the top level, a math group or a braced script.
    List(List),
}

/// Plain prose token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Word {
    /// Offset of the first byte.
    pub pos: usize,
    /// Source text.
    pub text: String,
}

/// Numeric token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Literal {
    /// Offset of the first byte.
    pub pos: usize,
    /// Source text.
    pub text: String,
}

/// Symbol rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Symbol {
    /// Offset of the first byte.
    pub pos: usize,
    /// Source text.
    pub text: String,
}

/// Math-mode span. `list` never contains the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MathExpr {
    /// Opening delimiter: `$`, `\(` or `\[`.
    pub delim: String,
    /// Offset of the opening delimiter.
    pub left: usize,
    /// Offset of the closing delimiter.
    pub right: usize,
    /// Contents.
    pub list: List,
}

impl MathExpr {
    /// Closing delimiter matching [`MathExpr::delim`].
    #[must_use]
    pub fn closing_delim(&self) -> &'static str {
        match self.delim.as_str() {
            r"\(" => r"\)",
            r"\[" => r"\]",
            _ => "$",
        }
    }
}

/// Superscript: `^x` or `^{…}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sup {
    /// Offset of the `^`.
    pub hat: usize,
    /// The script. A braced script is a [`Node::List`].
    pub node: Box<Node>,
}

/// Subscript: `_x` or `_{…}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sub {
    /// Offset of the `_`.
    pub under: usize,
    /// The script. A braced script is a [`Node::List`].
    pub node: Box<Node>,
}

/// Macro invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Macro {
    /// Name including the backslash, e.g. `\frac`.
    pub name: String,
    /// Offset of the backslash.
    pub pos: usize,
    /// Arguments in source order: [`Arg`], [`OptArg`] or bare nodes.
    pub args: Vec<Node>,
}

impl Macro {
    /// Creates an invocation with no arguments yet.
    #[must_use]
    pub const fn new(name: String, pos: usize) -> Self {
        Self {
            name,
            pos,
            args: Vec::new(),
        }
    }
}

/// Mandatory argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arg {
    /// Offset of `{`.
    pub lbrace: usize,
    /// Offset of `}`.
    pub rbrace: usize,
    /// Contents.
    pub list: List,
}

/// Optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptArg {
    /// Offset of `[`.
    pub lbrack: usize,
    /// Offset of `]`.
    pub rbrack: usize,
    /// Contents.
    pub list: List,
}

/// Ordered sequence of nodes.
pub type List = Vec<Node>;

impl Node {
    /// Returns the variant's [`NodeType`].
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        NodeType::from(self)
    }

    /// Offset of the node's first byte. An empty list reports `0`.
    #[must_use]
    pub fn pos(&self) -> usize {
        match self {
            Self::Word(Word { pos, .. })
            | Self::Literal(Literal { pos, .. })
            | Self::Symbol(Symbol { pos, .. })
            | Self::Macro(Macro { pos, .. }) => *pos,
            Self::MathExpr(expr) => expr.left,
            Self::Sup(sup) => sup.hat,
            Self::Sub(sub) => sub.under,
            Self::Arg(arg) => arg.lbrace,
            Self::OptArg(arg) => arg.lbrack,
            Self::List(list) => list.first().map_or(0, Self::pos),
        }
    }

    /// Offset one past the node's last byte. An empty list reports `0`.
    ///
    /// The braces of a braced script are not recorded, so a braced script
    /// ends with its last child.
    #[must_use]
    pub fn end(&self) -> usize {
        match self {
            Self::Word(Word { pos, text })
            | Self::Literal(Literal { pos, text })
            | Self::Symbol(Symbol { pos, text }) => pos + text.len(),
            Self::MathExpr(expr) => expr.right + expr.closing_delim().len(),
            Self::Sup(Sup { hat: pos, node }) | Self::Sub(Sub { under: pos, node }) => {
                node.end().max(pos + 1)
            }
            Self::Macro(m) => m.args.last().map_or(m.pos + m.name.len(), Self::end),
            Self::Arg(arg) => arg.rbrace + 1,
            Self::OptArg(arg) => arg.rbrack + 1,
            Self::List(list) => list.last().map_or(0, Self::end),
        }
    }

    /// Children of the node, in source order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Word(_) | Self::Literal(_) | Self::Symbol(_) => &[],
            Self::MathExpr(MathExpr { list, .. })
            | Self::Arg(Arg { list, .. })
            | Self::OptArg(OptArg { list, .. })
            | Self::List(list) => list.as_slice(),
            Self::Sup(Sup { node, .. }) | Self::Sub(Sub { node, .. }) => {
                slice::from_ref(node.as_ref())
            }
            Self::Macro(m) => m.args.as_slice(),
        }
    }

    /// Source text of leaf nodes, name of macros.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Word(Word { text, .. })
            | Self::Literal(Literal { text, .. })
            | Self::Symbol(Symbol { text, .. }) => Some(text),
            Self::Macro(m) => Some(&m.name),
            Self::MathExpr(expr) => Some(&expr.delim),
            _ => None,
        }
    }
}
