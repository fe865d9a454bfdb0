//! Double-dispatch visitor protocol
//!
//! The node-kind set is closed and the operation set is open: every analysis
//! is a [`Visitor`] implementation with exactly one method per concrete node
//! kind. The nine operations have no default bodies, so an analysis that
//! forgets a kind does not compile.
//!
//! Dispatch goes through [`Node`], a borrowed view of one concrete node.
//! [`Visitor::visit`] takes any `Node` and resolves it with an exhaustive
//! `match` in [`Node::accept`].
//!
//! # Example
//!
//! ```
//! use lol_ast::{Assign, BinOp, Block, Constant, Expr, IfStmt, Loop, Node, Stmt, Visitor};
//!
//! /// Collects assigned variable names, in traversal order.
//! #[derive(Default)]
//! struct Targets(Vec<String>);
//!
//! impl Targets {
//!     fn walk(&mut self, node: Node<'_>) {
//!         for child in node.children() {
//!             self.visit(child);
//!         }
//!     }
//! }
//!
//! impl Visitor for Targets {
//!     type Output = ();
//!
//!     fn visit_assign(&mut self, assign: &Assign) {
//!         self.0.push(assign.var().to_string());
//!         self.walk(assign.into());
//!     }
//!     fn visit_if(&mut self, stmt: &IfStmt) { self.walk(stmt.into()) }
//!     fn visit_loop(&mut self, stmt: &Loop) { self.walk(stmt.into()) }
//!     fn visit_block(&mut self, block: &Block) { self.walk(block.into()) }
//!     fn visit_sum(&mut self, _: &BinOp) {}
//!     fn visit_diff(&mut self, _: &BinOp) {}
//!     fn visit_product(&mut self, _: &BinOp) {}
//!     fn visit_slash(&mut self, _: &BinOp) {}
//!     fn visit_constant(&mut self, _: &Constant) {}
//! }
//!
//! let block: Block = vec![
//!     Stmt::assign("a", Expr::constant(1)),
//!     Stmt::assign("b", Expr::constant(2)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut targets = Targets::default();
//! targets.visit(Node::from(&block));
//! assert_eq!(targets.0, ["a", "b"]);
//! ```

use std::sync::Arc;

use crate::ast::{
    Assign, BinOp, BinOpKind, Block, Constant, Expr, IfStmt, Loop, NodeKind, Stmt,
};

/// An analysis over the AST.
///
/// Implementors carry their own mutable state; the tree itself is only
/// ever borrowed immutably.
pub trait Visitor {
    /// Result of visiting one node.
    type Output;

    /// Visit an assignment.
    fn visit_assign(&mut self, assign: &Assign) -> Self::Output;

    /// Visit a conditional.
    fn visit_if(&mut self, stmt: &IfStmt) -> Self::Output;

    /// Visit a loop.
    fn visit_loop(&mut self, stmt: &Loop) -> Self::Output;

    /// Visit a block.
    fn visit_block(&mut self, block: &Block) -> Self::Output;

    /// Visit `lhs + rhs`.
    fn visit_sum(&mut self, op: &BinOp) -> Self::Output;

    /// Visit `lhs - rhs`.
    fn visit_diff(&mut self, op: &BinOp) -> Self::Output;

    /// Visit `lhs * rhs`.
    fn visit_product(&mut self, op: &BinOp) -> Self::Output;

    /// Visit `lhs / rhs`.
    fn visit_slash(&mut self, op: &BinOp) -> Self::Output;

    /// Visit a constant.
    fn visit_constant(&mut self, constant: &Constant) -> Self::Output;

    /// Generic entry point: dispatch `node` to the operation for its kind.
    fn visit(&mut self, node: Node<'_>) -> Self::Output {
        node.accept(self)
    }
}

/// Borrowed view of exactly one concrete node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Assignment
    Assign(&'a Assign),
    /// Conditional
    If(&'a IfStmt),
    /// Loop
    Loop(&'a Loop),
    /// Block
    Block(&'a Block),
    /// Any of the four binary operations
    BinOp(&'a BinOp),
    /// Constant
    Constant(&'a Constant),
}

impl<'a> Node<'a> {
    /// Invoke the visitor operation matching this node's kind.
    pub fn accept<V: Visitor + ?Sized>(self, visitor: &mut V) -> V::Output {
        match self {
            Node::Assign(n) => visitor.visit_assign(n),
            Node::If(n) => visitor.visit_if(n),
            Node::Loop(n) => visitor.visit_loop(n),
            Node::Block(n) => visitor.visit_block(n),
            Node::BinOp(n) => match n.kind() {
                BinOpKind::Sum => visitor.visit_sum(n),
                BinOpKind::Diff => visitor.visit_diff(n),
                BinOpKind::Product => visitor.visit_product(n),
                BinOpKind::Slash => visitor.visit_slash(n),
            },
            Node::Constant(n) => visitor.visit_constant(n),
        }
    }

    /// The concrete kind.
    pub fn kind(self) -> NodeKind {
        match self {
            Node::Assign(_) => NodeKind::Assign,
            Node::If(_) => NodeKind::If,
            Node::Loop(_) => NodeKind::Loop,
            Node::Block(_) => NodeKind::Block,
            Node::BinOp(n) => n.kind().node_kind(),
            Node::Constant(_) => NodeKind::Constant,
        }
    }

    /// Direct children, in canonical traversal order.
    ///
    /// | Node     | Children                          |
    /// |----------|-----------------------------------|
    /// | Block    | each statement, in order          |
    /// | IfStmt   | condition, then, otherwise        |
    /// | Loop     | init, step, condition, body       |
    /// | Assign   | expression                        |
    /// | BinOp    | lhs, rhs                          |
    /// | Constant | none                              |
    pub fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Assign(n) => vec![n.expr().into()],
            Node::If(n) => vec![
                n.condition().into(),
                n.then_block().into(),
                n.otherwise().into(),
            ],
            Node::Loop(n) => vec![
                n.init().into(),
                n.step().into(),
                n.condition().into(),
                n.body().into(),
            ],
            Node::Block(n) => n.iter().map(Node::from).collect(),
            Node::BinOp(n) => vec![n.lhs().into(), n.rhs().into()],
            Node::Constant(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Constant(c) => Node::Constant(c),
            Expr::BinOp(op) => Node::BinOp(op),
        }
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        match stmt {
            Stmt::Assign(a) => Node::Assign(a),
            Stmt::Block(b) => Node::Block(b),
            Stmt::If(s) => Node::If(s),
            Stmt::Loop(l) => Node::Loop(l),
        }
    }
}

impl<'a> From<&'a Arc<Expr>> for Node<'a> {
    fn from(expr: &'a Arc<Expr>) -> Self {
        Node::from(expr.as_ref())
    }
}

impl<'a> From<&'a Arc<Stmt>> for Node<'a> {
    fn from(stmt: &'a Arc<Stmt>) -> Self {
        Node::from(stmt.as_ref())
    }
}

impl<'a> From<&'a Arc<Block>> for Node<'a> {
    fn from(block: &'a Arc<Block>) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Block> for Node<'a> {
    fn from(block: &'a Block) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Assign> for Node<'a> {
    fn from(assign: &'a Assign) -> Self {
        Node::Assign(assign)
    }
}

impl<'a> From<&'a IfStmt> for Node<'a> {
    fn from(stmt: &'a IfStmt) -> Self {
        Node::If(stmt)
    }
}

impl<'a> From<&'a Loop> for Node<'a> {
    fn from(stmt: &'a Loop) -> Self {
        Node::Loop(stmt)
    }
}

impl<'a> From<&'a BinOp> for Node<'a> {
    fn from(op: &'a BinOp) -> Self {
        Node::BinOp(op)
    }
}

impl<'a> From<&'a Constant> for Node<'a> {
    fn from(constant: &'a Constant) -> Self {
        Node::Constant(constant)
    }
}

impl Expr {
    /// Accept a visitor on this expression.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        Node::from(self).accept(visitor)
    }
}

impl Stmt {
    /// Accept a visitor on this statement.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        Node::from(self).accept(visitor)
    }
}

impl Block {
    /// Accept a visitor on this block.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_block(self)
    }
}
