//! Macro definition utilities.
//!
//! A macro's behaviour is a [`MacroSpec`]: the list of arguments it reads
//! and, optionally, a handler that replaces the generic argument walk. Specs
//! are registered under one or more names with
//! [`LatexContext::define_macro`](crate::LatexContext::define_macro).

use crate::ast::{Macro, Node};
use crate::parser::Parser;
use crate::types::{ParseError, SourceLocation, Token};

/// Kind of argument a macro reads after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// `[…]`, skipped when absent.
    Optional,
    /// `{…}`, required.
    Mandatory,
    /// The next token, parsed as a single node (`\left(`).
    Node,
}

/// Everything a [`MacroHandler`] needs to read its arguments.
pub struct MacroContext<'a, 'b> {
    /// Parser positioned right after the macro name.
    pub parser: &'a mut Parser<'b>,
    /// The macro token.
    pub token: &'a Token,
    /// Arguments declared for the macro.
    pub args: &'a [ArgKind],
}

impl MacroContext<'_, '_> {
    /// Location of the macro token.
    #[must_use]
    pub fn loc(&self) -> SourceLocation {
        self.token.loc.clone()
    }

    /// A macro node for this invocation, with no arguments yet.
    #[must_use]
    pub fn new_node(&self) -> Macro {
        Macro::new(self.token.text.clone(), self.token.pos())
    }

    /// Reads every declared argument into `node`, in order.
    pub fn parse_declared_args(&mut self, node: &mut Macro) -> Result<(), ParseError> {
        for arg in self.args {
            match arg {
                ArgKind::Optional => self.parser.parse_opt_arg(node)?,
                ArgKind::Mandatory => self.parser.parse_macro_arg(node)?,
                ArgKind::Node => self.parser.parse_bare_arg(node)?,
            }
        }
        Ok(())
    }
}

/// Custom parsing behaviour for a macro.
pub type MacroHandler = fn(context: MacroContext) -> Result<Node, ParseError>;

/// Registration request for [`LatexContext::define_macro`](crate::LatexContext::define_macro).
pub struct MacroDefSpec<'b> {
    /// Names sharing this behaviour, backslash included.
    pub names: &'b [&'b str],
    /// Arguments read after the name.
    pub args: &'b [ArgKind],
    /// Replaces the generic argument walk when set.
    pub handler: Option<MacroHandler>,
}

/// Registered behaviour of a macro.
#[derive(Debug, Clone)]
pub struct MacroSpec {
    /// Arguments read after the name.
    pub args: Vec<ArgKind>,
    /// Replaces the generic argument walk when set.
    pub handler: Option<MacroHandler>,
}

impl MacroSpec {
    /// Parses one invocation, the macro token having been consumed already.
    pub fn parse(&self, parser: &mut Parser<'_>, token: &Token) -> Result<Node, ParseError> {
        let context = MacroContext {
            parser,
            token,
            args: &self.args,
        };
        self.handler.unwrap_or(parse_args)(context)
    }
}

/// Generic behaviour: reads the declared arguments into a [`Node::Macro`].
pub fn parse_args(mut context: MacroContext) -> Result<Node, ParseError> {
    let mut node = context.new_node();
    context.parse_declared_args(&mut node)?;
    Ok(Node::Macro(node))
}
