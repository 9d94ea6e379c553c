//! routetrie &ndash; path template validation and trie construction for HTTP request routing.
//!
//! Route templates are `/` separated paths in which a segment may be a named parameter
//! (`/users/:id`) or, as the final segment, a catch-all (`/assets/*filepath`). Templates are
//! validated before they are decomposed into a `Tree` of static, parameter and catch-all nodes.
//!
//! ```rust
//! use routetrie::router::builder::build_tree;
//! use routetrie::router::tree::segment::SegmentType;
//!
//! let tree = build_tree(|route| {
//!     route.add("/home", "home");
//!     route.add("/user/:id", "user");
//!     route.add("/static/*filepath", "files");
//! })
//! .unwrap();
//!
//! let user = &tree.root().children()[1];
//! assert_eq!(user.segment(), "/user/");
//! assert_eq!(user.children()[0].segment_type(), SegmentType::Param);
//! ```
//!
//! Looking up a request path in a finished tree is left to the consumer of this crate.
#![warn(missing_docs, deprecated)]
#![doc(test(no_crate_inject, attr(deny(warnings))))]

pub mod error;
pub mod handler;
pub mod router;

pub use crate::error::{PathSyntaxError, PathSyntaxErrorKind, RegistrationError};
pub use crate::handler::{Handle, Handler};
pub use crate::router::builder::{build_tree, build_tree_with, RegistrationPolicy, TreeBuilder};
pub use crate::router::params::{Param, Params};
pub use crate::router::path::validate;
pub use crate::router::tree::node::Node;
pub use crate::router::tree::segment::SegmentType;
pub use crate::router::tree::Tree;
