//! Statement nodes

use std::sync::Arc;

use super::{Block, BlockRef, ExprRef, NodeKind};

/// Shared reference to a statement node.
pub type StmtRef = Arc<Stmt>;

/// A statement: a node that performs an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var = expr`
    Assign(Assign),

    /// Nested block
    Block(BlockRef),

    /// Conditional with a then and an otherwise branch
    If(IfStmt),

    /// C-style `for (init; cond; step) body`
    Loop(Loop),
}

impl Stmt {
    /// Create a shared assignment.
    pub fn assign(var: impl Into<String>, expr: ExprRef) -> StmtRef {
        Arc::new(Stmt::Assign(Assign::new(var, expr)))
    }

    /// Wrap a block as a statement.
    pub fn block(block: impl Into<BlockRef>) -> StmtRef {
        Arc::new(Stmt::Block(block.into()))
    }

    /// Create a conditional with an empty otherwise branch.
    pub fn if_then(condition: ExprRef, then_block: impl Into<BlockRef>) -> StmtRef {
        Arc::new(Stmt::If(IfStmt::new(condition, then_block)))
    }

    /// Create a conditional with both branches.
    pub fn if_else(
        condition: ExprRef,
        then_block: impl Into<BlockRef>,
        otherwise: impl Into<BlockRef>,
    ) -> StmtRef {
        Arc::new(Stmt::If(IfStmt::with_otherwise(
            condition, then_block, otherwise,
        )))
    }

    /// Create a loop.
    pub fn loop_(
        init: StmtRef,
        step: StmtRef,
        condition: ExprRef,
        body: impl Into<BlockRef>,
    ) -> StmtRef {
        Arc::new(Stmt::Loop(Loop::new(init, step, condition, body)))
    }

    /// The concrete node kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Assign(_) => NodeKind::Assign,
            Stmt::Block(_) => NodeKind::Block,
            Stmt::If(_) => NodeKind::If,
            Stmt::Loop(_) => NodeKind::Loop,
        }
    }
}

/// Assignment of an expression to a named variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    var: String,
    expr: ExprRef,
}

impl Assign {
    /// Create an assignment.
    pub fn new(var: impl Into<String>, expr: ExprRef) -> Self {
        Self {
            var: var.into(),
            expr,
        }
    }

    /// Target variable name.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Assigned expression.
    pub fn expr(&self) -> &ExprRef {
        &self.expr
    }
}

/// Conditional statement.
///
/// The otherwise branch is always present. When the source has no
/// `else`, it is an empty block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    condition: ExprRef,
    then_block: BlockRef,
    otherwise: BlockRef,
}

impl IfStmt {
    /// Create a conditional whose otherwise branch is empty.
    pub fn new(condition: ExprRef, then_block: impl Into<BlockRef>) -> Self {
        Self::with_otherwise(condition, then_block, Block::new())
    }

    /// Create a conditional with an explicit otherwise branch.
    pub fn with_otherwise(
        condition: ExprRef,
        then_block: impl Into<BlockRef>,
        otherwise: impl Into<BlockRef>,
    ) -> Self {
        Self {
            condition,
            then_block: then_block.into(),
            otherwise: otherwise.into(),
        }
    }

    /// The condition.
    pub fn condition(&self) -> &ExprRef {
        &self.condition
    }

    /// Branch taken when the condition holds.
    pub fn then_block(&self) -> &BlockRef {
        &self.then_block
    }

    /// Branch taken otherwise. Possibly empty, never absent.
    pub fn otherwise(&self) -> &BlockRef {
        &self.otherwise
    }
}

/// C-style loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    init: StmtRef,
    step: StmtRef,
    condition: ExprRef,
    body: BlockRef,
}

impl Loop {
    /// Create a loop.
    pub fn new(
        init: StmtRef,
        step: StmtRef,
        condition: ExprRef,
        body: impl Into<BlockRef>,
    ) -> Self {
        Self {
            init,
            step,
            condition,
            body: body.into(),
        }
    }

    /// Statement run once before the first iteration.
    pub fn init(&self) -> &StmtRef {
        &self.init
    }

    /// Statement run after each iteration.
    pub fn step(&self) -> &StmtRef {
        &self.step
    }

    /// Loop condition.
    pub fn condition(&self) -> &ExprRef {
        &self.condition
    }

    /// Loop body.
    pub fn body(&self) -> &BlockRef {
        &self.body
    }
}
