//! Expression nodes

use std::sync::Arc;

use super::NodeKind;
use crate::value::Value;

/// Shared reference to an expression node.
pub type ExprRef = Arc<Expr>;

/// An expression: a node that produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal constant
    Constant(Constant),

    /// Binary arithmetic operation
    BinOp(BinOp),
}

impl Expr {
    /// Create a shared constant expression.
    pub fn constant(value: impl Into<Value>) -> ExprRef {
        Arc::new(Expr::Constant(Constant::new(value)))
    }

    /// Create a shared binary expression.
    pub fn binop(kind: BinOpKind, lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Arc::new(Expr::BinOp(BinOp::new(kind, lhs, rhs)))
    }

    /// `lhs + rhs`
    pub fn sum(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Self::binop(BinOpKind::Sum, lhs, rhs)
    }

    /// `lhs - rhs`
    pub fn diff(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Self::binop(BinOpKind::Diff, lhs, rhs)
    }

    /// `lhs * rhs`
    pub fn product(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Self::binop(BinOpKind::Product, lhs, rhs)
    }

    /// `lhs / rhs`
    pub fn slash(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Self::binop(BinOpKind::Slash, lhs, rhs)
    }

    /// The concrete node kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Constant(_) => NodeKind::Constant,
            Expr::BinOp(op) => op.kind().node_kind(),
        }
    }
}

/// A literal constant. Leaf node.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    value: Value,
}

impl Constant {
    /// Create a constant holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The literal value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    /// `+`
    Sum,
    /// `-`
    Diff,
    /// `*`
    Product,
    /// `/`
    Slash,
}

impl BinOpKind {
    /// All operators, in declaration order.
    pub const ALL: [BinOpKind; 4] = [
        BinOpKind::Sum,
        BinOpKind::Diff,
        BinOpKind::Product,
        BinOpKind::Slash,
    ];

    /// Source-level operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Sum => "+",
            BinOpKind::Diff => "-",
            BinOpKind::Product => "*",
            BinOpKind::Slash => "/",
        }
    }

    /// The node kind a binary node with this operator has.
    pub fn node_kind(self) -> NodeKind {
        match self {
            BinOpKind::Sum => NodeKind::Sum,
            BinOpKind::Diff => NodeKind::Diff,
            BinOpKind::Product => NodeKind::Product,
            BinOpKind::Slash => NodeKind::Slash,
        }
    }

    /// Tag name used by the printer (`sum`, `diff`, ...).
    pub fn tag(self) -> &'static str {
        self.node_kind().tag()
    }
}

/// Binary operation over two expression children.
///
/// Children are ordered: `lhs` always precedes `rhs` in any traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    kind: BinOpKind,
    lhs: ExprRef,
    rhs: ExprRef,
}

impl BinOp {
    /// Create a binary operation.
    pub fn new(kind: BinOpKind, lhs: ExprRef, rhs: ExprRef) -> Self {
        Self { kind, lhs, rhs }
    }

    /// The operator.
    pub fn kind(&self) -> BinOpKind {
        self.kind
    }

    /// Left operand.
    pub fn lhs(&self) -> &ExprRef {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &ExprRef {
        &self.rhs
    }
}
