//! Defines `SegmentType` for `Tree`.
use std::fmt;

/// Character separating the segments of a path template.
pub(crate) const SEPARATOR: u8 = b'/';

/// Character introducing a parameter segment, e.g. `:id`.
pub(crate) const PARAM_MARKER: u8 = b':';

/// Character introducing a catch-all segment, e.g. `*filepath`.
pub(crate) const CATCH_ALL_MARKER: u8 = b'*';

/// Indicates the type of segment which is being represented by a `Node`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SegmentType {
    /// Is matched exactly (byte equality) against the corresponding part of a request path.
    Static,

    /// Binds a single path component, up to the next `/`, to the named parameter.
    Param,

    /// Binds the remainder of the request path to the named parameter. Always the final
    /// segment of a template.
    CatchAll,
}

impl SegmentType {
    /// True for `Param` and `CatchAll`.
    pub fn is_wildcard(self) -> bool {
        self != SegmentType::Static
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentType::Static => "static",
            SegmentType::Param => "param",
            SegmentType::CatchAll => "catch-all",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_kinds() {
        assert!(!SegmentType::Static.is_wildcard());
        assert!(SegmentType::Param.is_wildcard());
        assert!(SegmentType::CatchAll.is_wildcard());
    }

    #[test]
    fn orders_most_to_least_specific() {
        let mut kinds = vec![SegmentType::CatchAll, SegmentType::Static, SegmentType::Param];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![SegmentType::Static, SegmentType::Param, SegmentType::CatchAll]
        );
    }
}
