//! Tests for the visitor protocol with analyses defined outside the crate

use std::thread;

use lol_ast::*;
use pretty_assertions::assert_eq;

fn c(value: impl Into<Value>) -> ExprRef {
    Expr::constant(value)
}

fn program() -> Ast {
    let code: Block = vec![
        Stmt::assign("a", Expr::sum(c(1), c(2))),
        Stmt::if_then(
            c(true),
            vec![Stmt::assign("b", Expr::slash(c(4), c(2)))]
                .into_iter()
                .collect::<Block>(),
        ),
        Stmt::loop_(
            Stmt::assign("i", c(0)),
            Stmt::assign("i", Expr::diff(c(0), c(1))),
            c(false),
            Block::new(),
        ),
    ]
    .into_iter()
    .collect();
    Ast::new("test", code)
}

/// Renders expressions back to infix source form.
struct Infix;

impl Infix {
    fn binop(&mut self, op: &BinOp) -> String {
        format!(
            "({} {} {})",
            op.lhs().accept(self),
            op.kind().symbol(),
            op.rhs().accept(self)
        )
    }

    fn block(&mut self, block: &Block) -> String {
        let body: Vec<String> = block.iter().map(|s| s.accept(self)).collect();
        format!("{{ {} }}", body.join(" "))
    }
}

impl Visitor for Infix {
    type Output = String;

    fn visit_assign(&mut self, assign: &Assign) -> String {
        format!("{} = {};", assign.var(), assign.expr().accept(self))
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> String {
        format!(
            "if {} {} else {}",
            stmt.condition().accept(self),
            self.block(stmt.then_block()),
            self.block(stmt.otherwise())
        )
    }

    fn visit_loop(&mut self, stmt: &Loop) -> String {
        format!(
            "for ({} {}; {}) {}",
            stmt.init().accept(self),
            stmt.condition().accept(self),
            stmt.step().accept(self),
            self.block(stmt.body())
        )
    }

    fn visit_block(&mut self, block: &Block) -> String {
        self.block(block)
    }

    fn visit_sum(&mut self, op: &BinOp) -> String {
        self.binop(op)
    }

    fn visit_diff(&mut self, op: &BinOp) -> String {
        self.binop(op)
    }

    fn visit_product(&mut self, op: &BinOp) -> String {
        self.binop(op)
    }

    fn visit_slash(&mut self, op: &BinOp) -> String {
        self.binop(op)
    }

    fn visit_constant(&mut self, constant: &Constant) -> String {
        match constant.value() {
            Value::String(s) => format!("{:?}", s),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Untyped => "?".to_string(),
        }
    }
}

#[test]
fn test_new_analysis_without_touching_nodes() {
    let ast = program();
    let text = Infix.visit(Node::from(ast.code()));
    assert_eq!(
        text,
        "{ a = (1 + 2); if true { b = (4 / 2); } else {  } for (i = 0; false; i = (0 - 1);) {  } }"
    );
}

#[test]
fn test_generic_entry_matches_direct_call() {
    let sum = Expr::sum(c(1), c(2));
    let Expr::BinOp(op) = sum.as_ref() else {
        panic!("expected binop");
    };
    assert_eq!(Infix.visit(Node::from(&sum)), Infix.visit_sum(op));
}

#[test]
fn test_stats_over_program() {
    let stats = NodeStats::collect(&program());
    assert_eq!(stats.count(NodeKind::Assign), 4);
    assert_eq!(stats.count(NodeKind::Block), 4);
    assert_eq!(stats.count(NodeKind::If), 1);
    assert_eq!(stats.count(NodeKind::Loop), 1);
    assert_eq!(stats.count(NodeKind::Sum), 1);
    assert_eq!(stats.count(NodeKind::Diff), 1);
    assert_eq!(stats.count(NodeKind::Slash), 1);
    assert_eq!(stats.count(NodeKind::Product), 0);
    assert_eq!(stats.count(NodeKind::Constant), 9);
    assert_eq!(stats.total(), 22);
    // block > if > block > assign > slash > constant
    assert_eq!(stats.max_depth(), 5);
}

#[test]
fn test_concurrent_readers_see_same_tree() {
    let ast = program();
    let expected = print_to_string(&ast).unwrap();

    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| print_to_string(&ast).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("printer thread panicked"))
            .collect()
    });

    for out in outputs {
        assert_eq!(out, expected);
    }
}

#[test]
fn test_nodes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Ast>();
    assert_send_sync::<Expr>();
    assert_send_sync::<Stmt>();
    assert_send_sync::<Block>();
}
