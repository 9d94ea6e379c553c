//! Defines `Node` for `Tree`.

use std::fmt;

use log::trace;

use crate::error::Result;
use crate::handler::Handle;
use crate::router::path::validate;
use crate::router::tree::segment::{SegmentType, CATCH_ALL_MARKER, PARAM_MARKER, SEPARATOR};

/// A recursive member of `Tree` representative of a run of a path template.
///
/// A `Node` holds one of three kinds of segment:
///
/// * a static literal such as `/users/`,
/// * a parameter such as `:id`, binding one path component,
/// * a catch-all such as `*filepath`, binding the remainder of the path.
///
/// Nodes which terminate a registered template carry the handler for it.
///
/// # Examples
///
/// Representing the path `/user/:id`.
///
/// ```rust
/// # use routetrie::router::tree::node::Node;
/// # use routetrie::router::tree::segment::SegmentType;
/// let mut root = Node::root();
/// root.insert_child("/user/:id", "show_user").unwrap();
///
/// let user = &root.children()[0];
/// assert_eq!(user.segment(), "/user/");
/// assert_eq!(user.segment_type(), SegmentType::Static);
///
/// let id = &user.children()[0];
/// assert_eq!(id.segment(), ":id");
/// assert!(id.is_wildcard());
/// assert!(!id.is_routable());
///
/// let leaf = &id.children()[0];
/// assert_eq!(leaf.segment(), "");
/// assert_eq!(leaf.handler(), Some(&"show_user"));
/// ```
pub struct Node<H = Handle> {
    segment: String,
    segment_type: SegmentType,
    children: Vec<Node<H>>,
    match_count: u32,
    handler: Option<H>,
}

impl<H> Node<H> {
    /// Creates the root of a tree, which holds an empty static segment.
    pub fn root() -> Self {
        Node::new("", SegmentType::Static)
    }

    fn new(segment: &str, segment_type: SegmentType) -> Self {
        Node {
            segment: segment.to_owned(),
            segment_type,
            children: vec![],
            match_count: 0,
            handler: None,
        }
    }

    /// Provides the segment this `Node` represents.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Provides the type of segment this `Node` represents.
    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    /// True if this `Node` holds a parameter or a catch-all segment.
    pub fn is_wildcard(&self) -> bool {
        self.segment_type.is_wildcard()
    }

    /// Children of this `Node`, in insertion order.
    pub fn children(&self) -> &[Node<H>] {
        &self.children
    }

    /// Number of registrations which terminated at this `Node`.
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// Handler attached to this `Node`, if a template terminates here.
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// True if there is at least one child `Node` present.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// True if a template terminates at this `Node`, that is it carries a handler.
    pub fn is_routable(&self) -> bool {
        self.handler.is_some()
    }

    /// Validates `path` and attaches a chain of descendants representing it below this `Node`,
    /// the last of which carries `handler`.
    ///
    /// The template is split eagerly on each `:` and `*` marker so static and dynamic runs end
    /// up in distinct nodes. Handlers only ever land on static leaves or catch-all nodes: a
    /// template ending in a parameter gets a static leaf with an empty segment below it. Every call appends a fresh chain: existing children are never
    /// searched for a shared prefix, so inserting the same template twice yields two sibling
    /// chains.
    ///
    /// When validation fails no node is created and the error is returned.
    pub fn insert_child(&mut self, path: &str, handler: H) -> Result<()> {
        let mut path = validate(path)?;
        let mut current = self;

        trace!(" inserting `{}` below `{}`", path, current.segment);

        loop {
            let marker = path
                .bytes()
                .position(|b| b == PARAM_MARKER || b == CATCH_ALL_MARKER);

            let i = match marker {
                Some(i) => i,
                None => {
                    current
                        .add_child(Node::new(path, SegmentType::Static))
                        .attach(handler);
                    return Ok(());
                }
            };

            if i > 0 {
                current = current.add_child(Node::new(&path[..i], SegmentType::Static));
            }

            let wildcard = &path[i..];
            if wildcard.as_bytes()[0] == CATCH_ALL_MARKER {
                current
                    .add_child(Node::new(wildcard, SegmentType::CatchAll))
                    .attach(handler);
                return Ok(());
            }

            let end = wildcard
                .bytes()
                .position(|b| b == SEPARATOR)
                .unwrap_or_else(|| wildcard.len());

            current = current.add_child(Node::new(&wildcard[..end], SegmentType::Param));
            path = &wildcard[end..];
        }
    }

    /// Visits every routable `Node` depth first, in insertion order, passing the template
    /// reconstructed from the segments leading to it.
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Node<H>),
    {
        self.walk_internal(&mut String::new(), &mut f);
    }

    fn walk_internal<F>(&self, template: &mut String, f: &mut F)
    where
        F: FnMut(&str, &Node<H>),
    {
        let len = template.len();
        template.push_str(&self.segment);

        if self.is_routable() {
            f(template.as_str(), self);
        }

        for child in &self.children {
            child.walk_internal(template, f);
        }

        template.truncate(len);
    }

    // Appends `child` and returns it, so the caller can descend into it.
    fn add_child(&mut self, child: Node<H>) -> &mut Node<H> {
        trace!(
            " adding {} child `{}` to `{}`",
            child.segment_type,
            child.segment,
            self.segment
        );

        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    fn attach(&mut self, handler: H) {
        trace!(" attaching handler to `{}`", self.segment);
        self.handler = Some(handler);
        self.match_count += 1;
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{:?} ({}, matches: {}{})",
            "",
            self.segment,
            self.segment_type,
            self.match_count,
            if self.is_routable() { ", routable" } else { "" },
            indent = depth * 2
        )?;

        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }

        Ok(())
    }
}

/// Renders the sub-tree rooted at this `Node`, one node per line, indented by depth.
impl<H> fmt::Display for Node<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl<H> fmt::Debug for Node<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("segment", &self.segment)
            .field("segment_type", &self.segment_type)
            .field("match_count", &self.match_count)
            .field("routable", &self.is_routable())
            .field("children", &self.children)
            .finish()
    }
}
