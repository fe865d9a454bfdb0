//! # lol-ast
//!
//! Abstract syntax tree and traversal engine for the lol language front end.
//!
//! A parser builds a tree bottom-up and hands this crate one [`Ast`]: a
//! version tag plus a root [`Block`]. The crate never parses text. It
//! provides:
//!
//! - **Values**: the closed [`Value`] literal type and its display form
//! - **Nodes**: a closed set of expression and statement kinds, immutable
//!   and shared through `Arc`, with a persistent [`Block`] sequence
//! - **Visitor**: the [`Visitor`] protocol, one operation per node kind
//! - **Printer**: the reference [`Printer`] traversal
//! - **Stats**: [`NodeStats`], a second analysis over the same protocol
//!
//! Trees are read-only once built, so any number of visitors may walk the
//! same tree at once, including from different threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod error;
pub mod printer;
pub mod stats;
pub mod value;
pub mod visitor;

// Re-export main types
pub use ast::{
    Assign, Ast, BinOp, BinOpKind, Block, BlockRef, Constant, Expr, ExprRef, IfStmt, Loop,
    NodeKind, Stmt, StmtRef,
};
pub use context::TraversalContext;
pub use error::{PrintError, Result};
pub use printer::{node_to_string, print_to_string, Printer};
pub use stats::NodeStats;
pub use value::{Value, ValueTag};
pub use visitor::{Node, Visitor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
