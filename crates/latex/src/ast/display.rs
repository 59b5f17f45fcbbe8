//! Canonical LaTeX rendering of a syntax tree.
//!
//! The output re-parses into a structurally identical tree. Comments and the
//! whitespace a control word swallowed are not reproduced; a space is
//! inserted wherever two letters would otherwise merge into one token. Prose
//! whitespace kept after a control word (it was separated by a comment) is
//! preceded by an empty `%` comment so the control word cannot swallow it.

use core::fmt;

use super::{Arg, Node, OptArg};

struct Renderer<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    last: Option<char>,
    after_control_word: bool,
}

fn is_control_word(text: &str) -> bool {
    text.strip_prefix('\\')
        .is_some_and(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()))
}

impl Renderer<'_, '_> {
    fn write(&mut self, text: &str) -> fmt::Result {
        let Some(first) = text.chars().next() else {
            return Ok(());
        };
        if first.is_alphabetic() && self.last.is_some_and(char::is_alphabetic) {
            self.f.write_str(" ")?;
        }
        if first.is_whitespace() && self.after_control_word {
            self.f.write_str("%")?;
            if first != '\n' {
                self.f.write_str("\n")?;
            }
        }
        self.f.write_str(text)?;
        self.last = text.chars().next_back();
        self.after_control_word = is_control_word(text);
        Ok(())
    }

    fn list(&mut self, list: &[Node]) -> fmt::Result {
        list.iter().try_for_each(|node| self.node(node))
    }

    fn braced(&mut self, open: &str, list: &[Node], close: &str) -> fmt::Result {
        self.write(open)?;
        self.list(list)?;
        self.write(close)
    }

    fn node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Word(w) => self.write(&w.text),
            Node::Literal(l) => self.write(&l.text),
            Node::Symbol(s) => self.write(&s.text),
            Node::MathExpr(expr) => self.braced(&expr.delim, &expr.list, expr.closing_delim()),
            Node::Sup(sup) => {
                self.write("^")?;
                self.node(&sup.node)
            }
            Node::Sub(sub) => {
                self.write("_")?;
                self.node(&sub.node)
            }
            Node::Macro(m) => {
                self.write(&m.name)?;
                self.list(&m.args)
            }
            Node::Arg(Arg { list, .. }) | Node::List(list) => self.braced("{", list, "}"),
            Node::OptArg(OptArg { list, .. }) => self.braced("[", list, "]"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer {
            f,
            last: None,
            after_control_word: false,
        };
        match self {
            Self::List(list) => renderer.list(list),
            node => renderer.node(node),
        }
    }
}
