//! Persistent statement blocks
//!
//! A [`Block`] is an immutable singly-linked sequence of statements.
//! Prepending a statement produces a new block that shares the whole of the
//! old sequence as its tail, so several block versions can coexist and
//! none of them is ever mutated in place.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use super::StmtRef;

/// Shared reference to a block.
pub type BlockRef = Arc<Block>;

type Link = Option<Arc<Cell>>;

struct Cell {
    stmt: StmtRef,
    next: Link,
}

/// An ordered, persistent sequence of statements.
///
/// Cloning a block is O(1) and shares every cell.
///
/// # Example
///
/// ```
/// use lol_ast::{Block, Expr, Stmt};
///
/// let tail = Block::new().prepend(Stmt::assign("y", Expr::constant(2)));
/// let full = Block::cons(Stmt::assign("x", Expr::constant(1)), &tail);
///
/// assert_eq!(tail.len(), 1);
/// assert_eq!(full.len(), 2);
/// assert!(full.shares_suffix(&tail));
/// ```
#[derive(Clone, Default)]
pub struct Block {
    head: Link,
    len: usize,
}

impl Block {
    /// Create an empty block.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Build the block `[stmt] ++ rest`, leaving `rest` untouched.
    pub fn cons(stmt: StmtRef, rest: &Block) -> Self {
        Self {
            head: Some(Arc::new(Cell {
                stmt,
                next: rest.head.clone(),
            })),
            len: rest.len + 1,
        }
    }

    /// Return a new block with `stmt` in front of this one.
    pub fn prepend(&self, stmt: StmtRef) -> Self {
        Self::cons(stmt, self)
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the block has no statements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First statement, if any.
    pub fn first(&self) -> Option<&StmtRef> {
        self.head.as_deref().map(|cell| &cell.stmt)
    }

    /// Iterate over the statements in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns `true` if `other`'s cells are physically a suffix of this
    /// block's cells. An empty block is a suffix of every block.
    pub fn shares_suffix(&self, other: &Block) -> bool {
        let Some(target) = &other.head else {
            return true;
        };
        let mut link = &self.head;
        while let Some(cell) = link {
            if Arc::ptr_eq(cell, target) {
                return true;
            }
            link = &cell.next;
        }
        false
    }
}

// Release cells iteratively so that long blocks do not recurse once per
// statement on drop. Stops at the first cell still owned elsewhere.
impl Drop for Block {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(cell) = link {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => link = cell.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<StmtRef> for Block {
    fn from_iter<I: IntoIterator<Item = StmtRef>>(iter: I) -> Self {
        let stmts: Vec<StmtRef> = iter.into_iter().collect();
        stmts
            .into_iter()
            .rev()
            .fold(Block::new(), |block, stmt| block.prepend(stmt))
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a StmtRef;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the statements of a [`Block`].
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Cell>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a StmtRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.next.as_deref();
            self.remaining -= 1;
            &cell.stmt
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
