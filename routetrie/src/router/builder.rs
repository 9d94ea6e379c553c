//! Defines a builder API for constructing a `Tree` from a route table.
//!
//! Every template is validated as it is registered. How failures are handled is decided by the
//! `RegistrationPolicy`; in either case a `Tree` is only handed back when every template was
//! accepted.

use log::{debug, trace};

use crate::error::{PathSyntaxError, RegistrationError};
use crate::router::tree::Tree;

/// Decides how `build_tree_with` reacts to a rejected template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Stop registering routes after the first rejected template. Only that failure is reported.
    FailFast,

    /// Keep registering and report every rejected template together.
    CollectAll,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        RegistrationPolicy::FailFast
    }
}

/// Builds a `Tree` using the provided closure, stopping at the first rejected template.
///
/// ```rust
/// # use routetrie::router::builder::build_tree;
/// let tree = build_tree(|route| {
///     route.add("/", "index");
///     route.add("/users/:id", "show_user");
///     route.scope("/assets", |route| {
///         route.add("/*filepath", "assets");
///     });
/// })
/// .unwrap();
///
/// assert_eq!(tree.route_count(), 3);
/// ```
pub fn build_tree<H, F>(f: F) -> Result<Tree<H>, RegistrationError>
where
    F: FnOnce(&mut TreeBuilder<H>),
{
    build_tree_with(RegistrationPolicy::default(), f)
}

/// Builds a `Tree` using the provided closure and the given `RegistrationPolicy`.
///
/// ```rust
/// # use routetrie::router::builder::{build_tree_with, RegistrationPolicy};
/// # use routetrie::error::PathSyntaxErrorKind;
/// let e = build_tree_with(RegistrationPolicy::CollectAll, |route| {
///     route.add("/users/:id", ());
///     route.add("users", ());
///     route.add("/files/*", ());
/// })
/// .unwrap_err();
///
/// let kinds: Vec<_> = e.errors().iter().map(|e| e.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         PathSyntaxErrorKind::MissingLeadingSlash,
///         PathSyntaxErrorKind::EmptyCatchAllName,
///     ]
/// );
/// ```
pub fn build_tree_with<H, F>(policy: RegistrationPolicy, f: F) -> Result<Tree<H>, RegistrationError>
where
    F: FnOnce(&mut TreeBuilder<H>),
{
    let mut tree = Tree::new();
    let mut errors = vec![];

    {
        let mut builder = TreeBuilder {
            tree: &mut tree,
            errors: &mut errors,
            policy,
            prefix: String::new(),
        };

        f(&mut builder);
    }

    match RegistrationError::from_errors(errors) {
        Some(e) => {
            debug!(" route table rejected: {}", e);
            Err(e)
        }
        None => {
            debug!(" route table built with {} route(s)", tree.route_count());
            Ok(tree)
        }
    }
}

/// The builder which is created by `build_tree` and passed to the provided closure. Scopes
/// created through `scope` are builders of the same type, carrying a longer prefix.
pub struct TreeBuilder<'a, H> {
    tree: &'a mut Tree<H>,
    errors: &'a mut Vec<PathSyntaxError>,
    policy: RegistrationPolicy,
    prefix: String,
}

impl<'a, H> TreeBuilder<'a, H> {
    /// Registers `handler` for the template formed by the current scope prefix followed by
    /// `path`.
    ///
    /// A rejected template is recorded and reported once the closure passed to `build_tree`
    /// returns.
    pub fn add(&mut self, path: &str, handler: H) -> &mut Self {
        let template = format!("{}{}", self.prefix, path);

        if self.policy == RegistrationPolicy::FailFast && !self.errors.is_empty() {
            trace!(" skipping `{}` after earlier failure", template);
            return self;
        }

        if let Err(e) = self.tree.insert(&template, handler) {
            debug!(" rejected route template: {}", e);
            self.errors.push(e);
        }

        self
    }

    /// Begins defining a new scope, based on a given `path` prefix. Templates registered inside
    /// the scope are the prefix followed by the registered path, and are validated as a whole.
    ///
    /// ```rust
    /// # use routetrie::router::builder::build_tree;
    /// let tree = build_tree(|route| {
    ///     route.scope("/api", |route| {
    ///         // Registers `/api/list`
    ///         route.add("/list", "list");
    ///     });
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(tree.root().children()[0].segment(), "/api/list");
    /// ```
    pub fn scope<F>(&mut self, path: &str, f: F)
    where
        F: FnOnce(&mut TreeBuilder<H>),
    {
        trace!("[entering scope: {}{}]", self.prefix, path);

        let mut scope_builder = TreeBuilder {
            tree: &mut *self.tree,
            errors: &mut *self.errors,
            policy: self.policy,
            prefix: format!("{}{}", self.prefix, path),
        };

        f(&mut scope_builder)
    }

    /// The prefix prepended to templates registered through this builder.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The policy this builder was created with.
    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }
}
