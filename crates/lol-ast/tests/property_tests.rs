//! Property-based tests over generated trees.
//!
//! Verified properties:
//! 1. Determinism: printing the same tree twice gives identical output
//! 2. Persistence: prepending to a block leaves the old block unchanged
//! 3. Indentation: each tag line is indented by its node's depth
//! 4. Agreement: the printer and `NodeStats` see the same nodes

use std::sync::Arc;

use lol_ast::*;
use proptest::prelude::*;

// -- Tree Generation Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("valid regex")
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "[a-z ]{0,8}".prop_map(Value::from),
        Just(Value::Untyped),
    ]
}

fn expr_strategy() -> impl Strategy<Value = ExprRef> {
    let leaf = value_strategy().prop_map(Expr::constant);
    leaf.prop_recursive(4, 32, 2, |inner| {
        (0..BinOpKind::ALL.len(), inner.clone(), inner)
            .prop_map(|(i, lhs, rhs)| Expr::binop(BinOpKind::ALL[i], lhs, rhs))
    })
}

fn block_of(stmts: Vec<StmtRef>) -> Block {
    stmts.into_iter().collect()
}

fn stmt_strategy() -> impl Strategy<Value = StmtRef> {
    let leaf = (identifier_strategy(), expr_strategy())
        .prop_map(|(name, expr)| Stmt::assign(name, expr));
    leaf.prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(|s| Stmt::block(block_of(s))),
            (
                expr_strategy(),
                prop::collection::vec(inner.clone(), 0..3),
                prop::option::of(prop::collection::vec(inner.clone(), 0..3)),
            )
                .prop_map(|(cond, then, otherwise)| match otherwise {
                    Some(o) => Stmt::if_else(cond, block_of(then), block_of(o)),
                    None => Stmt::if_then(cond, block_of(then)),
                }),
            (
                inner.clone(),
                inner.clone(),
                expr_strategy(),
                prop::collection::vec(inner, 0..3),
            )
                .prop_map(|(init, step, cond, body)| {
                    Stmt::loop_(init, step, cond, block_of(body))
                }),
        ]
    })
}

fn block_strategy() -> impl Strategy<Value = Block> {
    prop::collection::vec(stmt_strategy(), 0..5).prop_map(block_of)
}

// -- Reference Shape --

/// Expected `(depth, tag-prefix)` of every printed line, built from
/// `Node::children` independently of the printer.
fn expected_shape(node: Node<'_>, depth: usize, out: &mut Vec<(usize, String)>) {
    let tag = node.kind().tag();
    if let Node::Constant(_) = node {
        out.push((depth, format!("<{tag}>")));
        return;
    }
    out.push((depth, format!("<{tag}")));
    for child in node.children() {
        expected_shape(child, depth + 1, out);
    }
    out.push((depth, format!("</{tag}>")));
}

// -- Properties --

proptest! {
    #[test]
    fn printing_is_deterministic(block in block_strategy()) {
        let ast = Ast::new("p", block);
        let first = print_to_string(&ast).unwrap();
        let second = print_to_string(&ast).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prepend_preserves_old_block(block in block_strategy(), stmt in stmt_strategy()) {
        let before = node_to_string(&block).unwrap();
        let new = Block::cons(stmt.clone(), &block);

        prop_assert_eq!(node_to_string(&block).unwrap(), before);
        prop_assert_eq!(new.len(), block.len() + 1);
        prop_assert!(Arc::ptr_eq(new.first().unwrap(), &stmt));
        prop_assert!(new.shares_suffix(&block));
        prop_assert!(new.iter().skip(1).zip(block.iter()).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn indentation_equals_depth(block in block_strategy()) {
        let out = node_to_string(&block).unwrap();
        let mut shape = Vec::new();
        expected_shape(Node::from(&block), 0, &mut shape);

        let lines: Vec<&str> = out.lines().collect();
        prop_assert_eq!(lines.len(), shape.len());
        for (line, (depth, prefix)) in lines.iter().zip(&shape) {
            let tabs = line.chars().take_while(|&c| c == '\t').count();
            prop_assert_eq!(tabs, *depth, "line {:?}", line);
            prop_assert!(line[tabs..].starts_with(prefix.as_str()), "line {:?}", line);
        }
    }

    #[test]
    fn stats_agree_with_printer(block in block_strategy()) {
        let out = node_to_string(&block).unwrap();
        let opening = out.lines().filter(|l| !l.trim_start().starts_with("</")).count();
        let stats = NodeStats::of(&block);

        prop_assert_eq!(stats.total(), opening);
        let deepest = out
            .lines()
            .map(|l| l.chars().take_while(|&c| c == '\t').count())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(stats.max_depth(), deepest);
    }

    #[test]
    fn ast_wraps_root_block_one_level_down(block in block_strategy(), version in identifier_strategy()) {
        let ast = Ast::new(version.clone(), block.clone());
        let whole = print_to_string(&ast).unwrap();
        let body: String = node_to_string(&block)
            .unwrap()
            .lines()
            .map(|l| format!("\t{l}\n"))
            .collect();
        prop_assert_eq!(whole, format!("<AST ver={version}>\n{body}</AST>\n"));
    }
}
