//! Parser for LaTeX-like expressions.
//!
//! Input mixes prose with math spans (`$…$`, `\(…\)`, `\[…\]`). The parser
//! produces an [`ast::Node`] tree of words, literals, symbols, math spans,
//! scripts and macro invocations with their arguments. Macro behaviours come
//! from a [`LatexContext`] registry, pre-populated with the builtin catalogue.
//!
//! ```
//! use latex::ast::{Node, tree};
//!
//! let node = latex::parse_expression(r"Euler: $e^{i\pi} + 1 = 0$").unwrap();
//! assert!(tree::dump(&node).contains("MathExpr $"));
//! assert_eq!(node.to_string(), r"Euler: $e^{i\pi}+1=0$");
//! ```
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::ref_patterns)]
#![allow(clippy::pub_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_call_fn)]

extern crate alloc;

pub mod ast;
pub mod context;
pub mod core;
pub mod define_macro;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;
pub mod types;

pub use crate::context::LatexContext;
pub use crate::core::{default_context, parse, parse_expression, render_to_string};
pub use crate::types::{ParseError, ParseErrorKind, Settings};
