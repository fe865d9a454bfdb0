//! Node hierarchy
//!
//! The node-kind set is closed: two expression kinds ([`Constant`] and the
//! four-way [`BinOp`]) and four statement kinds ([`Assign`], [`Block`],
//! [`IfStmt`], [`Loop`]). Nodes are immutable once built and children are
//! shared through `Arc`, so a subtree may have any number of parents.

mod block;
mod expr;
mod stmt;

pub use block::{Block, BlockRef, Iter};
pub use expr::{BinOp, BinOpKind, Constant, Expr, ExprRef};
pub use stmt::{Assign, IfStmt, Loop, Stmt, StmtRef};

use std::fmt;

/// A whole program: a version tag and the root block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ast {
    version: String,
    code: BlockRef,
}

impl Ast {
    /// Create an AST from a version tag and the program body.
    pub fn new(version: impl Into<String>, code: impl Into<BlockRef>) -> Self {
        Self {
            version: version.into(),
            code: code.into(),
        }
    }

    /// Version tag.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Program body.
    pub fn code(&self) -> &BlockRef {
        &self.code
    }
}

/// The concrete kind of a node, one per visitor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// [`Assign`]
    Assign,
    /// [`IfStmt`]
    If,
    /// [`Loop`]
    Loop,
    /// [`Block`]
    Block,
    /// [`BinOp`] with [`BinOpKind::Sum`]
    Sum,
    /// [`BinOp`] with [`BinOpKind::Diff`]
    Diff,
    /// [`BinOp`] with [`BinOpKind::Product`]
    Product,
    /// [`BinOp`] with [`BinOpKind::Slash`]
    Slash,
    /// [`Constant`]
    Constant,
}

impl NodeKind {
    /// Every node kind.
    pub const ALL: [NodeKind; 9] = [
        NodeKind::Assign,
        NodeKind::If,
        NodeKind::Loop,
        NodeKind::Block,
        NodeKind::Sum,
        NodeKind::Diff,
        NodeKind::Product,
        NodeKind::Slash,
        NodeKind::Constant,
    ];

    /// Tag name, as used by the printer.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Assign => "assign",
            NodeKind::If => "if",
            NodeKind::Loop => "loop",
            NodeKind::Block => "block",
            NodeKind::Sum => "sum",
            NodeKind::Diff => "diff",
            NodeKind::Product => "product",
            NodeKind::Slash => "slash",
            NodeKind::Constant => "constant",
        }
    }

    /// Returns `true` for kinds that may appear in expression position.
    pub fn is_expr(self) -> bool {
        matches!(
            self,
            NodeKind::Sum
                | NodeKind::Diff
                | NodeKind::Product
                | NodeKind::Slash
                | NodeKind::Constant
        )
    }

    /// Returns `true` for kinds that may appear in statement position.
    pub fn is_stmt(self) -> bool {
        !self.is_expr()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
