//! Tokenizer for LaTeX-like expressions.
//!
//! The lexer hands out one [`Token`] at a time through the [`TokenSource`]
//! trait. It never fails: characters without a construct of their own are
//! returned as [`TokenKind::Other`] and left for the parser to reject.
//!
//! A control word (`\alpha`) swallows the whitespace that follows it, as in
//! TeX; a control symbol (`\,`) does not. Digits are lexed one per token so
//! that `x^23` binds only the `2`.

use alloc::sync::Arc;

use crate::types::{SourceLocation, Token, TokenKind};

/// Stream of tokens consumed by the [`Parser`](crate::parser::Parser).
pub trait TokenSource {
    /// Moves to the next token. Returns `false` once the end of input has
    /// been reached, in which case [`TokenSource::current`] is an EOF token.
    fn advance(&mut self) -> bool;

    /// Returns the token most recently produced by
    /// [`TokenSource::advance`].
    fn current(&self) -> &Token;

    /// Returns the next raw character after the current token without
    /// consuming anything.
    fn peek_char(&self) -> Option<char>;
}

const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n' | '\t')
}

fn match_space(s: &str) -> usize {
    s.chars()
        .take_while(|&c| is_space(c))
        .map(char::len_utf8)
        .sum()
}

fn match_word(s: &str) -> usize {
    s.chars()
        .take_while(|c| c.is_alphabetic())
        .map(char::len_utf8)
        .sum()
}

fn match_comment(s: &str) -> usize {
    s.find('\n').unwrap_or(s.len())
}

fn match_control_word(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let len: usize = rest
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(1 + len)
}

fn match_control_word_with_space(s: &str) -> Option<(usize, usize)> {
    let len = match_control_word(s)?;
    Some((len, match_space(&s[len..])))
}

fn match_control_symbol(s: &str) -> Option<usize> {
    let c = s.strip_prefix('\\')?.chars().next()?;
    Some(1 + c.len_utf8())
}

struct TokenMatch {
    kind: TokenKind,
    mlen: usize,
    skip: usize,
}

impl TokenMatch {
    const fn new(kind: TokenKind, mlen: usize) -> Self {
        Self {
            kind,
            mlen,
            skip: 0,
        }
    }
}

fn exec(slice: &str) -> Option<TokenMatch> {
    let first = slice.chars().next()?;
    let matched = match first {
        '\\' => {
            if let Some((len, skip)) = match_control_word_with_space(slice) {
                TokenMatch {
                    kind: TokenKind::Macro,
                    mlen: len + skip,
                    skip,
                }
            } else if let Some(len) = match_control_symbol(slice) {
                TokenMatch::new(TokenKind::Macro, len)
            } else {
                TokenMatch::new(TokenKind::Other, 1)
            }
        }
        '%' => TokenMatch::new(TokenKind::Comment, match_comment(slice)),
        '{' => TokenMatch::new(TokenKind::Lbrace, 1),
        '}' => TokenMatch::new(TokenKind::Rbrace, 1),
        '[' => TokenMatch::new(TokenKind::Lbrack, 1),
        ']' => TokenMatch::new(TokenKind::Rbrack, 1),
        '(' => TokenMatch::new(TokenKind::Lparen, 1),
        ')' => TokenMatch::new(TokenKind::Rparen, 1),
        '&' | '#' | '~' => TokenMatch::new(TokenKind::Other, 1),
        c if is_space(c) => TokenMatch::new(TokenKind::Space, match_space(slice)),
        c if c.is_alphabetic() => TokenMatch::new(TokenKind::Word, match_word(slice)),
        c if c.is_numeric() => TokenMatch::new(TokenKind::Number, c.len_utf8()),
        c if c.is_control() => TokenMatch::new(TokenKind::Other, c.len_utf8()),
        c => TokenMatch::new(TokenKind::Symbol, c.len_utf8()),
    };
    Some(matched)
}

/// Tokenizer over an in-memory expression.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Arc<str>,
    last_index: usize,
    current: Token,
}

impl Lexer {
    /// Creates a lexer positioned before the first token. Until the first
    /// call to [`TokenSource::advance`], the current token is an EOF token at
    /// offset 0.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let input: Arc<str> = Arc::from(input);
        let current = Self::eof_at(&input, 0);
        Self {
            input,
            last_index: 0,
            current,
        }
    }

    fn eof_at(input: &Arc<str>, index: usize) -> Token {
        Token::new(
            TokenKind::Eof,
            String::new(),
            SourceLocation::new(Arc::clone(input), index, index),
        )
    }

    /// Tokenizes and returns the next token, advancing the read position.
    pub fn lex(&mut self) -> Token {
        let start = self.last_index;
        let Some(matched) = self.input.get(start..).and_then(exec) else {
            return Self::eof_at(&self.input, self.input.len());
        };
        self.last_index += matched.mlen;
        let end = self.last_index - matched.skip;
        Token::new(
            matched.kind,
            self.input[start..end].to_owned(),
            SourceLocation::new(Arc::clone(&self.input), start, end),
        )
    }

    /// Returns the byte offset the lexer will read from next.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.last_index
    }

    /// Returns the input being tokenized.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl TokenSource for Lexer {
    fn advance(&mut self) -> bool {
        self.current = self.lex();
        !self.current.is_eof()
    }

    fn current(&self) -> &Token {
        &self.current
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.last_index..)?.chars().next()
    }
}

/// Tokenizes a whole expression, excluding the final EOF token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while lexer.advance() {
        tokens.push(lexer.current().clone());
    }
    tokens
}
