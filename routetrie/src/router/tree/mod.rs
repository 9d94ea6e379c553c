//! Defines a hierarchial `Tree` with subtrees of `Node`.

use std::fmt;

use log::trace;

use crate::error::Result;
use crate::handler::Handle;
use crate::router::tree::node::Node;

pub mod node;
pub mod segment;

/// A hierarchical structure that provides a root `Node` and subtrees of linked nodes
/// that represent registered path templates.
///
/// The `Tree` is populated during a single-threaded setup phase, usually through the
/// `routetrie::router::builder` API, and is read-only afterwards. It is `Send + Sync` whenever
/// the handler type is, so a finished tree may be shared between request-handling threads.
pub struct Tree<H = Handle> {
    root: Node<H>,
    route_count: usize,
}

impl<H> Tree<H> {
    /// Creates a new `Tree` and root `Node`.
    pub fn new() -> Self {
        trace!(" creating new tree");
        Tree {
            root: Node::root(),
            route_count: 0,
        }
    }

    /// Validates `path` and inserts it below the root of the `Tree`, attaching `handler` to the
    /// node which terminates it.
    pub fn insert(&mut self, path: &str, handler: H) -> Result<()> {
        self.root.insert_child(path, handler)?;
        self.route_count += 1;
        Ok(())
    }

    /// Borrow the root `Node`.
    pub fn root(&self) -> &Node<H> {
        &self.root
    }

    /// Borrow the root `Node` as mutable.
    pub fn borrow_root_mut(&mut self) -> &mut Node<H> {
        &mut self.root
    }

    /// Number of templates inserted through `insert`.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// True if no template has been inserted through `insert`.
    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }
}

impl<H> Default for Tree<H> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<H> fmt::Display for Tree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl<H> fmt::Debug for Tree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("route_count", &self.route_count)
            .field("root", &self.root)
            .finish()
    }
}
