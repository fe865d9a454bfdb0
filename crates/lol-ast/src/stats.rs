//! Node census: a second analysis over the same visitor protocol

use indexmap::IndexMap;
use tracing::debug;

use crate::ast::{Assign, Ast, BinOp, Block, Constant, IfStmt, Loop, NodeKind};
use crate::visitor::{Node, Visitor};

/// Per-kind node counts and maximum depth of a tree.
///
/// Kinds appear in `counts()` in the order they were first met during a
/// pre-order walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStats {
    counts: IndexMap<NodeKind, usize>,
    total: usize,
    max_depth: usize,
    depth: usize,
}

impl NodeStats {
    /// Collect statistics for a program body. The root block is depth zero.
    pub fn collect(ast: &Ast) -> Self {
        let stats = Self::of(ast.code());
        debug!(
            version = ast.version(),
            total = stats.total,
            max_depth = stats.max_depth,
            "collected node stats"
        );
        stats
    }

    /// Collect statistics for any subtree.
    pub fn of<'a>(node: impl Into<Node<'a>>) -> Self {
        let mut stats = Self::default();
        stats.visit(node.into());
        stats
    }

    /// Number of nodes of `kind`.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// All non-zero counts, in first-seen order.
    pub fn counts(&self) -> &IndexMap<NodeKind, usize> {
        &self.counts
    }

    /// Total number of nodes.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Depth of the deepest node.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn record(&mut self, node: Node<'_>) {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
        self.total += 1;
        self.max_depth = self.max_depth.max(self.depth);

        self.depth += 1;
        for child in node.children() {
            self.visit(child);
        }
        self.depth -= 1;
    }
}

impl Visitor for NodeStats {
    type Output = ();

    fn visit_assign(&mut self, assign: &Assign) {
        self.record(assign.into());
    }

    fn visit_if(&mut self, stmt: &IfStmt) {
        self.record(stmt.into());
    }

    fn visit_loop(&mut self, stmt: &Loop) {
        self.record(stmt.into());
    }

    fn visit_block(&mut self, block: &Block) {
        self.record(block.into());
    }

    fn visit_sum(&mut self, op: &BinOp) {
        self.record(op.into());
    }

    fn visit_diff(&mut self, op: &BinOp) {
        self.record(op.into());
    }

    fn visit_product(&mut self, op: &BinOp) {
        self.record(op.into());
    }

    fn visit_slash(&mut self, op: &BinOp) {
        self.record(op.into());
    }

    fn visit_constant(&mut self, constant: &Constant) {
        self.record(constant.into());
    }
}
