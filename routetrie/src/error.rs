//! Error types raised while validating and registering path templates.
//!
//! Registering a malformed template is a programming error, so every error here is meant to be
//! surfaced to the owner of the route table at startup rather than recovered from.
use thiserror::Error;

/// An implementation of the single-parameter Result pattern, using `PathSyntaxError`.
pub type Result<T> = std::result::Result<T, PathSyntaxError>;

/// The rule a path template broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PathSyntaxErrorKind {
    /// The template is empty or does not begin with `/`.
    #[error("path should start with '/'")]
    MissingLeadingSlash,

    /// The template contains two adjacent `/` characters.
    #[error("path should not contain '//'")]
    DoubleSlash,

    /// A `:` marker is the last character of the template.
    #[error("':' should be followed by a parameter name")]
    EmptyParamName,

    /// A `:` marker is directly followed by `/` or `*`.
    #[error("':' should not be followed by '/' or '*'")]
    ParamFollowedByInvalidChar,

    /// A parameter name contains `:`, `*` or whitespace.
    #[error("parameter name should not contain ':', '*' or whitespace")]
    MalformedParamName,

    /// A `*` marker is the last character of the template.
    #[error("'*' should be followed by a catch-all name")]
    EmptyCatchAllName,

    /// A `*` marker is directly followed by `/` or `:`.
    #[error("'*' should not be followed by '/' or ':'")]
    CatchAllFollowedByInvalidChar,

    /// A `/` appears somewhere after a `*` marker.
    #[error("catch-all must be the last segment")]
    CatchAllNotLastSegment,

    /// A catch-all name contains `*`, `:`, `/` or whitespace.
    #[error("catch-all name should not contain '*', ':', '/' or whitespace")]
    MalformedCatchAllName,
}

/// A path template was rejected by `validate`.
///
/// Carries the rule that was broken, the rejected template and the byte offset at which the
/// violation was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path template `{path}` at byte {position}: {kind}")]
pub struct PathSyntaxError {
    kind: PathSyntaxErrorKind,
    path: String,
    position: usize,
}

impl PathSyntaxError {
    pub(crate) fn new(kind: PathSyntaxErrorKind, path: &str, position: usize) -> Self {
        PathSyntaxError {
            kind,
            path: path.to_owned(),
            position,
        }
    }

    /// The rule that was broken.
    pub fn kind(&self) -> PathSyntaxErrorKind {
        self.kind
    }

    /// The template that was rejected.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Byte offset into `path` where the violation was found.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// One or more templates were rejected while building a `Tree` from a route table.
///
/// Produced by `build_tree` and `build_tree_with`. Errors are listed in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} route template(s) failed validation, first: {}", .errors.len(), .errors[0])]
pub struct RegistrationError {
    errors: Vec<PathSyntaxError>,
}

impl RegistrationError {
    /// Wraps a non-empty list of failures. Returns `None` when `errors` is empty.
    pub(crate) fn from_errors(errors: Vec<PathSyntaxError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(RegistrationError { errors })
        }
    }

    /// Every failure collected during registration.
    pub fn errors(&self) -> &[PathSyntaxError] {
        &self.errors
    }

    /// Consumes the error, returning the collected failures.
    pub fn into_errors(self) -> Vec<PathSyntaxError> {
        self.errors
    }
}
