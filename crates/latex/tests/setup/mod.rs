#![allow(dead_code)]

use std::panic::{UnwindSafe, catch_unwind};

use latex::{
    LatexContext, ParseError, Settings,
    ast::{Arg, Literal, Macro, MathExpr, Node, OptArg, Sub, Sup, Symbol, Word},
    default_context, parse,
    types::{ParseErrorKind, StrictMode},
};

pub fn default_ctx() -> &'static LatexContext {
    default_context()
}

pub struct TestExpr<'a> {
    pub expr: String,
    pub ctx: &'a LatexContext,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

/// Zero every position so trees can be compared structurally.
pub fn strip_positions(node: &mut Node) {
    match node {
        Node::Word(Word { pos, .. })
        | Node::Literal(Literal { pos, .. })
        | Node::Symbol(Symbol { pos, .. }) => *pos = 0,
        Node::MathExpr(expr) => {
            expr.left = 0;
            expr.right = 0;
            strip_all(&mut expr.list);
        }
        Node::Sup(sup) => {
            sup.hat = 0;
            strip_positions(&mut sup.node);
        }
        Node::Sub(sub) => {
            sub.under = 0;
            strip_positions(&mut sub.node);
        }
        Node::Macro(m) => {
            m.pos = 0;
            strip_all(&mut m.args);
        }
        Node::Arg(arg) => {
            arg.lbrace = 0;
            arg.rbrace = 0;
            strip_all(&mut arg.list);
        }
        Node::OptArg(arg) => {
            arg.lbrack = 0;
            arg.rbrack = 0;
            strip_all(&mut arg.list);
        }
        Node::List(list) => strip_all(list),
    }
}

pub fn strip_all(nodes: &mut [Node]) {
    nodes.iter_mut().for_each(strip_positions);
}

impl<'a> TestExpr<'a> {
    pub fn with_ctx(self, ctx: &'a LatexContext) -> Self {
        TestExpr { ctx, ..self }
    }

    pub fn to_parse(self, settings: &Settings) -> Result<(), ParseError> {
        parse(self.ctx, &self.expr, settings).map(|_| ())
    }

    pub fn not_to_parse(self, settings: &Settings) -> Result<(), ParseError> {
        match parse(self.ctx, &self.expr, settings) {
            Ok(node) => panic!(
                "{}:{}: expected `{}` not to parse, got {node:?}",
                self.file, self.line, self.code
            ),
            Err(_) => Ok(()),
        }
    }

    pub fn to_fail_with(self, expected: ParseErrorKind, settings: &Settings) -> Result<(), ParseError> {
        match parse(self.ctx, &self.expr, settings) {
            Ok(node) => panic!(
                "{}:{}: expected `{}` to fail with {expected:?}, got {node:?}",
                self.file, self.line, self.code
            ),
            Err(err) => {
                assert_eq!(
                    *err.kind, expected,
                    "{}:{}: unexpected error for `{}`",
                    self.file, self.line, self.expr
                );
                Ok(())
            }
        }
    }

    /// Compares the top-level list against `expected`, positions aside.
    pub fn to_parse_as(self, expected: Vec<Node>, settings: &Settings) -> Result<(), ParseError> {
        let mut tree = parse(self.ctx, &self.expr, settings)?;
        strip_positions(&mut tree);
        assert_eq!(
            tree,
            Node::List(expected),
            "{}:{}: unexpected tree for `{}`",
            self.file,
            self.line,
            self.expr
        );
        Ok(())
    }

    pub fn to_parse_like(self, other: &str, settings: &Settings) -> Result<(), ParseError> {
        let mut tree1 = parse(self.ctx, &self.expr, settings)?;
        let mut tree2 = parse(self.ctx, other, settings)?;
        strip_positions(&mut tree1);
        strip_positions(&mut tree2);
        assert_eq!(
            tree1, tree2,
            "Parse trees do not match between '{}' and '{}'",
            self.expr, other
        );
        Ok(())
    }

    /// Renders the tree, checks the text, and checks that it re-parses into
    /// the same structure.
    pub fn to_render_as(self, rendered: &str, settings: &Settings) -> Result<(), ParseError> {
        let tree = parse(self.ctx, &self.expr, settings)?;
        assert_eq!(tree.to_string(), rendered, "rendering of `{}`", self.expr);
        let mut original = tree;
        let mut reparsed = parse(self.ctx, rendered, settings)?;
        strip_positions(&mut original);
        strip_positions(&mut reparsed);
        assert_eq!(original, reparsed, "round trip of `{rendered}`");
        Ok(())
    }
}

pub fn expect_impl(
    expr: &str,
    file: &'static str,
    line: u32,
    code: &'static str,
) -> TestExpr<'static> {
    TestExpr {
        expr: expr.to_owned(),
        ctx: default_ctx(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $expr:expr, $($arg:tt)+) => {
        let $pat = $expr else {
            panic!($($arg)+);
        };
    };
    ($pat:pat = $expr:expr) => {
        let $pat = $expr else {
            panic!(
                "assert_let failed: pattern `{}` did not match {} at {}:{} \n{:#?}",
                stringify!($pat), stringify!($expr),
                file!(), line!(),
                $expr
            );
        };
    };
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), ParseError> + UnwindSafe,
{
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test '{desc}' failed with Result::Err: {e}"),
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// Settings helpers
pub fn strict_settings() -> Settings {
    Settings::builder().strict(StrictMode::Error).build()
}

pub fn nonstrict_settings() -> Settings {
    Settings::builder().strict(StrictMode::Ignore).build()
}

pub fn get_parsed(expr: &str, settings: &Settings) -> Result<Vec<Node>, ParseError> {
    match parse(default_ctx(), expr, settings)? {
        Node::List(list) => Ok(list),
        other => panic!("top level of `{expr}` is not a list: {other:?}"),
    }
}

pub fn get_parsed_strict(expr: &str) -> Result<Vec<Node>, ParseError> {
    get_parsed(expr, &strict_settings())
}

/// Node builders with zeroed positions, for comparisons after
/// [`strip_positions`].
pub fn word(text: &str) -> Node {
    Node::Word(Word {
        pos: 0,
        text: text.to_owned(),
    })
}

pub fn lit(text: &str) -> Node {
    Node::Literal(Literal {
        pos: 0,
        text: text.to_owned(),
    })
}

pub fn sym(text: &str) -> Node {
    Node::Symbol(Symbol {
        pos: 0,
        text: text.to_owned(),
    })
}

pub fn math(delim: &str, list: Vec<Node>) -> Node {
    Node::MathExpr(MathExpr {
        delim: delim.to_owned(),
        left: 0,
        right: 0,
        list,
    })
}

pub fn sup(node: Node) -> Node {
    Node::Sup(Sup {
        hat: 0,
        node: Box::new(node),
    })
}

pub fn sub(node: Node) -> Node {
    Node::Sub(Sub {
        under: 0,
        node: Box::new(node),
    })
}

pub fn mac(name: &str, args: Vec<Node>) -> Node {
    Node::Macro(Macro {
        name: name.to_owned(),
        pos: 0,
        args,
    })
}

pub fn arg(list: Vec<Node>) -> Node {
    Node::Arg(Arg {
        lbrace: 0,
        rbrace: 0,
        list,
    })
}

pub fn opt(list: Vec<Node>) -> Node {
    Node::OptArg(OptArg {
        lbrack: 0,
        rbrack: 0,
        list,
    })
}

pub fn list(list: Vec<Node>) -> Node {
    Node::List(list)
}
