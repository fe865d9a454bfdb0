//! Traversal configuration

/// Settings shared by a traversal.
///
/// The default is unbounded: the tree is trusted to be acyclic and is
/// walked to structural completion however deep it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalContext {
    /// Deepest node depth allowed below the traversal root, if any
    pub max_depth: Option<usize>,
}

impl TraversalContext {
    /// Create a context with default (unbounded) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that refuses to descend past `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}
