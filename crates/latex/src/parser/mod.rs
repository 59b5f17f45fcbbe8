//! Recursive-descent parser.
//!
//! The parser pulls tokens from a [`TokenSource`], tracks whether it is in
//! prose or math [`Mode`], and hands macro tokens to the behaviour registered
//! in the [`LatexContext`]. Those behaviours call back into the parser to read
//! their arguments.

mod scope;

use alloc::sync::Arc;

use log::{debug, trace};

use crate::ast::{Arg, List, Literal, Macro, MathExpr, Node, OptArg, Sub, Sup, Symbol, Word};
use crate::context::LatexContext;
use crate::lexer::{Lexer, TokenSource};
use crate::types::{
    Mode, ParseError, ParseErrorKind, Settings, SourceLocation, Special, Token, TokenKind,
};

pub use scope::ModeScope;

/// Parser over a single expression.
pub struct Parser<'a> {
    /// Current parsing mode.
    pub mode: Mode,
    /// Global parsing configuration.
    pub settings: &'a Settings,
    /// Registry of macro behaviours.
    pub ctx: &'a LatexContext,
    source: Box<dyn TokenSource + 'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser lexing `input`, starting in [`Mode::Normal`].
    ///
    /// ```
    /// use latex::parser::Parser;
    /// use latex::{LatexContext, Settings};
    ///
    /// let settings = Settings::default();
    /// let ctx = LatexContext::default();
    /// let mut parser = Parser::new(r"area $\pi r^2$", &settings, &ctx);
    /// let tree = parser.parse().unwrap();
    /// assert_eq!(tree.children().len(), 3);
    /// ```
    #[must_use]
    pub fn new(input: &str, settings: &'a Settings, ctx: &'a LatexContext) -> Self {
        Self::with_source(Box::new(Lexer::new(input)), settings, ctx)
    }

    /// Creates a parser over any token source.
    #[must_use]
    pub fn with_source(
        source: Box<dyn TokenSource + 'a>,
        settings: &'a Settings,
        ctx: &'a LatexContext,
    ) -> Self {
        Self {
            mode: Mode::Normal,
            settings,
            ctx,
            source,
            depth: 0,
        }
    }

    /// Consumes and returns the next token. Once the source is exhausted this
    /// keeps returning an EOF token at the end of the input.
    pub fn next_token(&mut self) -> Token {
        if self.source.advance() {
            return self.source.current().clone();
        }
        let current = self.source.current();
        if current.is_eof() {
            return current.clone();
        }
        let input = Arc::clone(&current.loc.input);
        let end = input.len();
        Token::new(TokenKind::Eof, String::new(), SourceLocation::new(input, end, end))
    }

    /// Returns the next raw character without consuming anything.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.source.peek_char()
    }

    /// Enters a nested construct parsed in `mode`. The previous mode is
    /// restored when the returned scope is dropped.
    pub fn enter(&mut self, mode: Mode) -> Result<ModeScope<'_, 'a>, ParseError> {
        if let Some(limit) = self.settings.max_nesting
            && self.depth >= limit
        {
            return Err(ParseError::new(ParseErrorKind::NestingTooDeep { limit }));
        }
        Ok(ModeScope::new(self, mode))
    }

    /// Parses the whole input into a [`Node::List`].
    ///
    /// Any error aborts the parse; no partial tree is returned.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let mut list = List::new();
        loop {
            let token = self.next_token();
            if token.is_eof() {
                return Ok(Node::List(list));
            }
            if let Some(node) = self.parse_node(token)? {
                list.push(node);
            }
        }
    }

    /// Parses the construct starting at `token`, which has already been
    /// consumed. Returns `None` for tokens that produce no node: comments,
    /// and whitespace in math mode.
    pub fn parse_node(&mut self, token: Token) -> Result<Option<Node>, ParseError> {
        trace!("parse_node: {:?} {:?} in {} mode", token.kind, token.text, self.mode);
        match token.kind {
            TokenKind::Comment => {
                if self.mode == Mode::Math && token.loc.end == token.loc.input.len() {
                    self.settings.report_nonstrict(
                        "commentAtEnd",
                        "% comment has no terminating newline; LaTeX would fail because of commenting the end of math mode (e.g. $)",
                        Some(&token),
                    )?;
                }
                Ok(None)
            }
            TokenKind::Macro => match token.special {
                Some(Special::OpenInlineMath | Special::OpenDisplayMath | Special::Begin) => {
                    self.parse_math_expr(token).map(Some)
                }
                Some(Special::CloseInlineMath | Special::CloseDisplayMath | Special::End) => {
                    Err(self.unsupported_context(&token))
                }
                _ => self.parse_macro(token).map(Some),
            },
            TokenKind::Word => Ok(Some(Node::Word(Word {
                pos: token.pos(),
                text: token.text,
            }))),
            TokenKind::Number => Ok(Some(Node::Literal(Literal {
                pos: token.pos(),
                text: token.text,
            }))),
            TokenKind::Symbol => match token.special {
                Some(Special::Dollar) => self.parse_math_expr(token).map(Some),
                Some(Special::Hat) => {
                    let node = self.parse_script(&token)?;
                    Ok(Some(Node::Sup(Sup {
                        hat: token.pos(),
                        node: Box::new(node),
                    })))
                }
                Some(Special::Underscore) => {
                    let node = self.parse_script(&token)?;
                    Ok(Some(Node::Sub(Sub {
                        under: token.pos(),
                        node: Box::new(node),
                    })))
                }
                _ => Ok(Some(Self::symbol(token))),
            },
            TokenKind::Lbrace => match self.mode {
                Mode::Math => self.parse_group(token).map(Some),
                Mode::Normal => Err(self.unsupported_context(&token)),
            },
            TokenKind::Rbrace => Err(self.unsupported_context(&token)),
            TokenKind::Space => match self.mode {
                Mode::Math => Ok(None),
                Mode::Normal => Ok(Some(Self::symbol(token))),
            },
            TokenKind::Lparen | TokenKind::Rparen | TokenKind::Lbrack | TokenKind::Rbrack => {
                Ok(Some(Self::symbol(token)))
            }
            TokenKind::Other => Err(ParseError::with_token(
                ParseErrorKind::Unimplemented {
                    token: token.text.clone(),
                },
                &token,
            )),
            TokenKind::Eof => Err(ParseError::with_token("Unexpected end of input", &token)),
        }
    }

    fn symbol(token: Token) -> Node {
        Node::Symbol(Symbol {
            pos: token.pos(),
            text: token.text,
        })
    }

    fn unsupported_context(&self, token: &Token) -> ParseError {
        ParseError::with_token(
            ParseErrorKind::UnsupportedContext {
                token: token.text.clone(),
                mode: self.mode,
            },
            token,
        )
    }

    /// Parses a math span opened by `open` up to its closing delimiter.
    fn parse_math_expr(&mut self, open: Token) -> Result<Node, ParseError> {
        let Some(closing) = open.special.and_then(Special::closing) else {
            return Err(ParseError::with_token(
                ParseErrorKind::UnsupportedDelimiter {
                    delimiter: open.text.clone(),
                },
                &open,
            ));
        };
        let mut parser = self.enter(Mode::Math)?;
        debug!("entering math mode at {} with {:?}", open.pos(), open.text);
        let mut list = List::new();
        loop {
            let token = parser.next_token();
            if token.is_eof() {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnterminatedMathExpr {
                        delimiter: open.text.clone(),
                    },
                    &open,
                ));
            }
            if token.special == Some(closing) {
                debug!("leaving math mode at {}", token.pos());
                let left = open.pos();
                return Ok(Node::MathExpr(MathExpr {
                    delim: open.text,
                    left,
                    right: token.pos(),
                    list,
                }));
            }
            if let Some(node) = parser.parse_node(token)? {
                list.push(node);
            }
        }
    }

    /// Parses the argument of `^` or `_`: a braced list, or exactly one
    /// token parsed as a node.
    fn parse_script(&mut self, symbol: &Token) -> Result<Node, ParseError> {
        let mode = self.mode;
        let mut parser = self.enter(mode)?;
        if parser.peek_char() == Some('{') {
            let open = parser.next_token();
            let (list, _) =
                parser.parse_until(TokenKind::Rbrace, &open, ParseErrorKind::UnterminatedGroup)?;
            if list.is_empty() {
                parser.settings.report_nonstrict(
                    "emptyScript",
                    &format!("empty group after '{}'", symbol.text),
                    Some(symbol),
                )?;
            }
            return Ok(Node::List(list));
        }
        let token = parser.next_token();
        let found = token.to_string();
        let location = token.clone();
        let node = if token.is_eof() {
            None
        } else {
            parser.parse_node(token)?
        };
        node.ok_or_else(|| {
            ParseError::with_token(
                ParseErrorKind::ExpectedToken {
                    expected: "script argument".to_owned(),
                    found,
                },
                &location,
            )
        })
    }

    /// Parses a math group opened by `open`, returning its contents as a
    /// [`Node::List`].
    pub fn parse_group(&mut self, open: Token) -> Result<Node, ParseError> {
        let close = match open.kind {
            TokenKind::Lbrace => TokenKind::Rbrace,
            TokenKind::Lparen => TokenKind::Rparen,
            kind => {
                return Err(ParseError::with_token(
                    ParseErrorKind::NoMatchingDelimiter { open: kind },
                    &open,
                ));
            }
        };
        let mode = self.mode;
        let mut parser = self.enter(mode)?;
        let (list, _) = parser.parse_until(close, &open, ParseErrorKind::UnterminatedGroup)?;
        Ok(Node::List(list))
    }

    /// Collects nodes up to a token of kind `close`, which is returned
    /// consumed. Reaching the end of input fails with `unterminated`, located
    /// at `open`.
    fn parse_until(
        &mut self,
        close: TokenKind,
        open: &Token,
        unterminated: ParseErrorKind,
    ) -> Result<(List, Token), ParseError> {
        let mut list = List::new();
        loop {
            let token = self.next_token();
            if token.kind == close {
                return Ok((list, token));
            }
            if token.is_eof() {
                return Err(ParseError::with_token(unterminated, open));
            }
            if let Some(node) = self.parse_node(token)? {
                list.push(node);
            }
        }
    }

    fn parse_macro(&mut self, token: Token) -> Result<Node, ParseError> {
        let ctx = self.ctx;
        let Some(spec) = ctx.get_macro(&token.text) else {
            return Err(ParseError::with_token(
                ParseErrorKind::UnknownMacro {
                    name: token.text.clone(),
                },
                &token,
            ));
        };
        trace!("parse_macro: {} with {:?}", token.text, spec.args);
        spec.parse(self, &token)
    }

    /// Reads a mandatory `{…}` argument and appends it to `node`.
    pub fn parse_macro_arg(&mut self, node: &mut Macro) -> Result<(), ParseError> {
        if self.peek_char() != Some('{') {
            let found = self.next_token();
            return Err(ParseError::with_token(
                ParseErrorKind::ExpectedToken {
                    expected: "{".to_owned(),
                    found: found.to_string(),
                },
                &found,
            ));
        }
        let mode = self.mode;
        let mut parser = self.enter(mode)?;
        let open = parser.next_token();
        let (list, close) = parser.parse_until(
            TokenKind::Rbrace,
            &open,
            ParseErrorKind::UnterminatedArg {
                macro_name: node.name.clone(),
            },
        )?;
        node.args.push(Node::Arg(Arg {
            lbrace: open.pos(),
            rbrace: close.pos(),
            list,
        }));
        Ok(())
    }

    /// Reads an optional `[…]` argument into `node` when one follows.
    pub fn parse_opt_arg(&mut self, node: &mut Macro) -> Result<(), ParseError> {
        if self.peek_char() != Some('[') {
            return Ok(());
        }
        let mode = self.mode;
        let mut parser = self.enter(mode)?;
        let open = parser.next_token();
        let (list, close) = parser.parse_until(
            TokenKind::Rbrack,
            &open,
            ParseErrorKind::UnterminatedArg {
                macro_name: node.name.clone(),
            },
        )?;
        node.args.push(Node::OptArg(OptArg {
            lbrack: open.pos(),
            rbrack: close.pos(),
            list,
        }));
        Ok(())
    }

    /// Reads the next token as a single node and appends it to `node`.
    pub fn parse_bare_arg(&mut self, node: &mut Macro) -> Result<(), ParseError> {
        let mode = self.mode;
        let mut parser = self.enter(mode)?;
        let token = parser.next_token();
        let found = token.to_string();
        let location = token.clone();
        let arg = if token.is_eof() {
            None
        } else {
            parser.parse_node(token)?
        };
        let Some(arg) = arg else {
            return Err(ParseError::with_token(
                ParseErrorKind::ExpectedToken {
                    expected: format!("argument to {}", node.name),
                    found,
                },
                &location,
            ));
        };
        node.args.push(arg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    /// Replays a fixed token list, as an alternative front end would.
    struct Replay {
        tokens: Vec<Token>,
        next: usize,
        current: Token,
        input: Arc<str>,
    }

    impl Replay {
        fn new(input: &str) -> Self {
            let input: Arc<str> = Arc::from(input);
            let current = Token::new(
                TokenKind::Eof,
                String::new(),
                SourceLocation::new(Arc::clone(&input), 0, 0),
            );
            Self {
                tokens: tokenize(&input),
                next: 0,
                current,
                input,
            }
        }
    }

    impl TokenSource for Replay {
        fn advance(&mut self) -> bool {
            if let Some(token) = self.tokens.get(self.next) {
                self.current = token.clone();
                self.next += 1;
                true
            } else {
                let end = self.input.len();
                self.current = Token::new(
                    TokenKind::Eof,
                    String::new(),
                    SourceLocation::new(Arc::clone(&self.input), end, end),
                );
                false
            }
        }

        fn current(&self) -> &Token {
            &self.current
        }

        fn peek_char(&self) -> Option<char> {
            let start = self.tokens.get(self.next)?.pos();
            self.input.get(start..)?.chars().next()
        }
    }

    /// Reports exhaustion without ever switching to an EOF token.
    struct Exhausting {
        tokens: Vec<Token>,
        next: usize,
    }

    impl TokenSource for Exhausting {
        fn advance(&mut self) -> bool {
            if self.next + 1 < self.tokens.len() {
                self.next += 1;
                true
            } else {
                false
            }
        }

        fn current(&self) -> &Token {
            &self.tokens[self.next]
        }

        fn peek_char(&self) -> Option<char> {
            let start = self.tokens.get(self.next + 1)?.pos();
            self.tokens[self.next].loc.input.get(start..)?.chars().next()
        }
    }

    #[test]
    fn exhausted_source_ends_the_parse() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let input = " x";
        let mut tokens = vec![Token::new(
            TokenKind::Eof,
            String::new(),
            SourceLocation::new(Arc::from(input), 0, 0),
        )];
        tokens.extend(tokenize(input));
        let source = Exhausting { tokens, next: 0 };
        let mut parser = Parser::with_source(Box::new(source), &settings, &ctx);
        let tree = parser.parse().unwrap();
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.to_string(), " x");
        let eof = parser.next_token();
        assert!(eof.is_eof());
        assert_eq!(eof.pos(), input.len());
    }

    #[test]
    fn exhausted_source_inside_a_span_is_unterminated() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let input = "$x";
        let mut tokens = vec![Token::new(
            TokenKind::Eof,
            String::new(),
            SourceLocation::new(Arc::from(input), 0, 0),
        )];
        tokens.extend(tokenize(input));
        let source = Exhausting { tokens, next: 0 };
        let err = Parser::with_source(Box::new(source), &settings, &ctx)
            .parse()
            .unwrap_err();
        assert_eq!(
            *err.kind,
            ParseErrorKind::UnterminatedMathExpr {
                delimiter: "$".to_owned()
            }
        );
    }

    fn parse_with(input: &str, settings: &Settings) -> Result<Node, ParseError> {
        let ctx = LatexContext::default();
        Parser::new(input, settings, &ctx).parse()
    }

    #[test]
    fn accepts_any_token_source() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let input = r"$\frac{a}{b}^2$ ok";
        let replayed = Parser::with_source(Box::new(Replay::new(input)), &settings, &ctx)
            .parse()
            .unwrap();
        let lexed = Parser::new(input, &settings, &ctx).parse().unwrap();
        assert_eq!(replayed, lexed);
    }

    #[test]
    fn mode_is_restored_after_nested_constructs() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let mut parser = Parser::new("$x^{y}$ z", &settings, &ctx);
        let open = parser.next_token();
        parser.parse_math_expr(open).unwrap();
        assert_eq!(parser.mode, Mode::Normal);
        assert_eq!(parser.depth, 0);
        assert_eq!(parser.next_token().kind, TokenKind::Space);
    }

    #[test]
    fn mode_is_restored_after_an_error() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let mut parser = Parser::new(r"$\frac{a}", &settings, &ctx);
        let open = parser.next_token();
        assert!(parser.parse_math_expr(open).is_err());
        assert_eq!(parser.mode, Mode::Normal);
        assert_eq!(parser.depth, 0);
    }

    #[test]
    fn group_needs_an_opening_delimiter() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let mut parser = Parser::new("[a]", &settings, &ctx);
        let open = parser.next_token();
        let err = parser.parse_group(open).unwrap_err();
        assert_eq!(
            *err.kind,
            ParseErrorKind::NoMatchingDelimiter {
                open: TokenKind::Lbrack
            }
        );
    }

    #[test]
    fn parenthesised_group() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let mut parser = Parser::new("(a b)", &settings, &ctx);
        parser.mode = Mode::Math;
        let open = parser.next_token();
        let group = parser.parse_group(open).unwrap();
        assert_eq!(group.children().len(), 2);
        assert_eq!(parser.mode, Mode::Math);
    }

    #[test]
    fn optional_argument_may_be_absent() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let mut parser = Parser::new("{x}", &settings, &ctx);
        let mut node = Macro::new(r"\sqrt".to_owned(), 0);
        parser.parse_opt_arg(&mut node).unwrap();
        assert!(node.args.is_empty());
        parser.parse_macro_arg(&mut node).unwrap();
        assert_eq!(node.args.len(), 1);
    }

    #[test]
    fn end_of_input_inside_a_node() {
        let settings = Settings::default();
        let ctx = LatexContext::default();
        let mut parser = Parser::new("", &settings, &ctx);
        let eof = parser.next_token();
        let err = parser.parse_node(eof).unwrap_err();
        assert_eq!(*err.kind, ParseErrorKind::Message("Unexpected end of input"));
    }

    #[test]
    fn script_binds_one_token() {
        let tree = parse_with("x^ab", &Settings::default()).unwrap();
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.to_string(), "x^ab");
    }

    #[test]
    fn comment_at_end_is_only_reported_in_math() {
        let strict = Settings::builder().strict(crate::types::StrictMode::Error).build();
        assert!(parse_with("a %c", &strict).is_ok());
        let err = parse_with("$a %c", &strict).unwrap_err();
        assert_eq!(err.position, Some(3));
    }
}
