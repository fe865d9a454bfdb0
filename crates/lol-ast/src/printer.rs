//! Reference traversal: indented, tag-bracketed printing
//!
//! The printer walks depth-first, pre-order. Every composite node emits an
//! opening tag, its children (in [`Node::children`] order) one level deeper,
//! then a closing tag. Constants are a single line. Each line is prefixed by
//! one tab per level of depth below the traversal root.
//!
//! ```text
//! <AST ver=1.0>
//! 	<block>
//! 		<assign var=x>
//! 			<sum>
//! 				<constant> int: 1 </constant>
//! 				<constant> int: 2 </constant>
//! 			</sum>
//! 		</assign>
//! 	</block>
//! </AST>
//! ```

use std::fmt;
use std::io::Write;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::ast::{Assign, Ast, BinOp, Block, Constant, IfStmt, Loop};
use crate::context::TraversalContext;
use crate::error::{PrintError, Result};
use crate::visitor::{Node, Visitor};

/// Visitor that serializes a tree to an [`io::Write`](std::io::Write) sink.
///
/// # Example
///
/// ```
/// use lol_ast::{Ast, Block, Expr, Printer, Stmt};
///
/// let code: Block = vec![Stmt::assign("x", Expr::constant(1))].into_iter().collect();
/// let ast = Ast::new("1.0", code);
///
/// let mut printer = Printer::new(Vec::new());
/// printer.traverse(&ast).unwrap();
/// let out = String::from_utf8(printer.into_inner()).unwrap();
///
/// assert!(out.starts_with("<AST ver=1.0>\n\t<block>\n"));
/// ```
pub struct Printer<W: Write> {
    out: W,
    depth: usize,
    ctx: TraversalContext,
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to `out` with default settings.
    pub fn new(out: W) -> Self {
        Self::with_context(out, TraversalContext::default())
    }

    /// Create a printer writing to `out` with the given settings.
    pub fn with_context(out: W, ctx: TraversalContext) -> Self {
        Self { out, depth: 0, ctx }
    }

    /// Current indentation depth. Zero between traversals.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Borrow the sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the printer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a whole program, wrapped in an `<AST ver=...>` tag pair.
    #[tracing::instrument(level = "debug", skip_all, fields(
        version = %ast.version(),
        stmts = ast.code().len()
    ))]
    pub fn traverse(&mut self, ast: &Ast) -> Result<()> {
        self.line(format_args!("<AST ver={}>", ast.version()))?;
        self.indent()?.visit_block(ast.code())?;
        self.line(format_args!("</AST>"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Enter one level of nesting. The level is left when the guard drops.
    fn indent(&mut self) -> Result<IndentGuard<'_, W>> {
        if let Some(limit) = self.ctx.max_depth {
            if self.depth >= limit {
                return Err(PrintError::DepthLimit { limit });
            }
        }
        self.depth += 1;
        Ok(IndentGuard { printer: self })
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(b"\t")?;
        }
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn tagged(&mut self, node: Node<'_>, open: fmt::Arguments<'_>) -> Result<()> {
        let kind = node.kind();
        trace!(%kind, depth = self.depth, "print node");

        self.line(open)?;
        let children = node.children();
        if !children.is_empty() {
            let mut inner = self.indent()?;
            for child in children {
                inner.visit(child)?;
            }
        }
        self.line(format_args!("</{}>", kind.tag()))
    }

    fn binop(&mut self, op: &BinOp) -> Result<()> {
        self.tagged(op.into(), format_args!("<{}>", op.kind().tag()))
    }
}

impl<W: Write> Visitor for Printer<W> {
    type Output = Result<()>;

    fn visit_assign(&mut self, assign: &Assign) -> Result<()> {
        self.tagged(assign.into(), format_args!("<assign var={}>", assign.var()))
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> Result<()> {
        self.tagged(stmt.into(), format_args!("<if>"))
    }

    fn visit_loop(&mut self, stmt: &Loop) -> Result<()> {
        self.tagged(stmt.into(), format_args!("<loop>"))
    }

    fn visit_block(&mut self, block: &Block) -> Result<()> {
        self.tagged(block.into(), format_args!("<block>"))
    }

    fn visit_sum(&mut self, op: &BinOp) -> Result<()> {
        self.binop(op)
    }

    fn visit_diff(&mut self, op: &BinOp) -> Result<()> {
        self.binop(op)
    }

    fn visit_product(&mut self, op: &BinOp) -> Result<()> {
        self.binop(op)
    }

    fn visit_slash(&mut self, op: &BinOp) -> Result<()> {
        self.binop(op)
    }

    fn visit_constant(&mut self, constant: &Constant) -> Result<()> {
        trace!(depth = self.depth, "print constant");
        self.line(format_args!("<constant> {} </constant>", constant.value()))
    }
}

/// RAII guard that leaves one indentation level when dropped, on success
/// and error paths alike.
struct IndentGuard<'a, W: Write> {
    printer: &'a mut Printer<W>,
}

impl<'a, W: Write> Drop for IndentGuard<'a, W> {
    fn drop(&mut self) {
        self.printer.depth -= 1;
    }
}

impl<'a, W: Write> Deref for IndentGuard<'a, W> {
    type Target = Printer<W>;

    fn deref(&self) -> &Self::Target {
        self.printer
    }
}

impl<'a, W: Write> DerefMut for IndentGuard<'a, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.printer
    }
}

/// Print a whole program to a `String`.
pub fn print_to_string(ast: &Ast) -> Result<String> {
    let mut printer = Printer::new(Vec::new());
    printer.traverse(ast)?;
    Ok(String::from_utf8(printer.into_inner())?)
}

/// Print a single subtree to a `String`. The given node is at depth zero.
pub fn node_to_string<'a>(node: impl Into<Node<'a>>) -> Result<String> {
    let mut printer = Printer::new(Vec::new());
    printer.visit(node.into())?;
    Ok(String::from_utf8(printer.into_inner())?)
}
