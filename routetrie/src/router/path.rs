//! Validation of path templates prior to insertion into a `Tree`.
//!
//! A template is a `/` separated path in which a segment may be introduced by `:` (a named
//! parameter, matching one path component) or by `*` (a catch-all, matching the remainder of the
//! path). The rules are checked in a single left-to-right scan and the first violation found is
//! reported.
use log::trace;

use crate::error::{PathSyntaxError, PathSyntaxErrorKind, Result};
use crate::router::tree::segment::{CATCH_ALL_MARKER, PARAM_MARKER, SEPARATOR};

/// Validates `path` as a route template, returning it unchanged when well formed.
///
/// Whitespace inside a parameter or catch-all name means ASCII whitespace only: space, tab,
/// line feed, form feed and carriage return. Other Unicode whitespace such as U+00A0 is accepted
/// as part of a name.
///
/// Validation does not modify the template, so `validate(validate(p)?)` yields the same value as
/// `validate(p)`. It can be used on its own to check a route table up front.
///
/// ```rust
/// # use routetrie::router::path::validate;
/// # use routetrie::error::PathSyntaxErrorKind;
/// assert_eq!(validate("/users/:id").unwrap(), "/users/:id");
/// assert_eq!(validate("/assets/*filepath").unwrap(), "/assets/*filepath");
///
/// let e = validate("/assets/*filepath/images").unwrap_err();
/// assert_eq!(e.kind(), PathSyntaxErrorKind::CatchAllNotLastSegment);
/// ```
pub fn validate(path: &str) -> Result<&str> {
    let bytes = path.as_bytes();

    if bytes.first() != Some(&SEPARATOR) {
        return Err(reject(PathSyntaxErrorKind::MissingLeadingSlash, path, 0));
    }

    if let Some(i) = bytes
        .windows(2)
        .position(|w| w[0] == SEPARATOR && w[1] == SEPARATOR)
    {
        return Err(reject(PathSyntaxErrorKind::DoubleSlash, path, i + 1));
    }

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            CATCH_ALL_MARKER => check_catch_all(path, i)?,
            PARAM_MARKER => check_param(path, i)?,
            _ => {}
        }
    }

    trace!(" validated path template `{}`", path);
    Ok(path)
}

// Checks the `:name` segment whose marker sits at `i`. The name runs to the next `/` or the end
// of the template.
fn check_param(path: &str, i: usize) -> Result<()> {
    let name = &path.as_bytes()[i + 1..];

    match name.first() {
        None => return Err(reject(PathSyntaxErrorKind::EmptyParamName, path, i)),
        Some(&b) if b == SEPARATOR || b == CATCH_ALL_MARKER => {
            return Err(reject(
                PathSyntaxErrorKind::ParamFollowedByInvalidChar,
                path,
                i + 1,
            ));
        }
        Some(_) => {}
    }

    let bad = name
        .iter()
        .take_while(|&&b| b != SEPARATOR)
        .position(|&b| b == PARAM_MARKER || b == CATCH_ALL_MARKER || b.is_ascii_whitespace());

    match bad {
        Some(n) => Err(reject(
            PathSyntaxErrorKind::MalformedParamName,
            path,
            i + 1 + n,
        )),
        None => Ok(()),
    }
}

// Checks the `*name` segment whose marker sits at `i`. The name runs to the end of the template.
fn check_catch_all(path: &str, i: usize) -> Result<()> {
    let name = &path.as_bytes()[i + 1..];

    match name.first() {
        None => return Err(reject(PathSyntaxErrorKind::EmptyCatchAllName, path, i)),
        Some(&b) if b == SEPARATOR || b == PARAM_MARKER => {
            return Err(reject(
                PathSyntaxErrorKind::CatchAllFollowedByInvalidChar,
                path,
                i + 1,
            ));
        }
        Some(_) => {}
    }

    if let Some(n) = name.iter().position(|&b| b == SEPARATOR) {
        return Err(reject(
            PathSyntaxErrorKind::CatchAllNotLastSegment,
            path,
            i + 1 + n,
        ));
    }

    let bad = name.iter().position(|&b| {
        b == CATCH_ALL_MARKER || b == PARAM_MARKER || b == SEPARATOR || b.is_ascii_whitespace()
    });

    match bad {
        Some(n) => Err(reject(
            PathSyntaxErrorKind::MalformedCatchAllName,
            path,
            i + 1 + n,
        )),
        None => Ok(()),
    }
}

fn reject(kind: PathSyntaxErrorKind, path: &str, position: usize) -> PathSyntaxError {
    trace!(" rejecting path template `{}`: {}", path, kind);
    PathSyntaxError::new(kind, path, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathSyntaxErrorKind::*;

    fn kind_of(path: &str) -> PathSyntaxErrorKind {
        match validate(path) {
            Ok(_) => panic!("expected `{}` to be rejected", path),
            Err(e) => e.kind(),
        }
    }

    #[test]
    fn accepts_valid_paths() {
        let paths = [
            "/",
            "/users/:id",
            "/assets/*filepath",
            "/product/:pid/review",
            "/api/v1/resource",
            "/files/:name/info",
            "/download/*file",
            "/trailing/",
            "/a:b/c",
            "/:first/:second",
            "/x/:y/*z",
        ];

        for path in paths.iter() {
            assert_eq!(validate(path), Ok(*path));
        }
    }

    #[test]
    fn validation_is_idempotent() {
        for path in ["/users/:id", "/static/*filepath", "/"].iter() {
            let once = validate(path).unwrap();
            assert_eq!(validate(once), Ok(once));
        }
    }

    #[test]
    fn rejects_missing_leading_slash() {
        for path in ["", "user/:id", "users", ":id", "*all", " /x"].iter() {
            assert_eq!(kind_of(path), MissingLeadingSlash, "path `{}`", path);
        }
    }

    #[test]
    fn rejects_double_slash() {
        assert_eq!(kind_of("//"), DoubleSlash);
        assert_eq!(kind_of("/user//name"), DoubleSlash);
        assert_eq!(kind_of("/user/name//"), DoubleSlash);
        // checked before any marker rule
        assert_eq!(kind_of("/:id//x"), DoubleSlash);
    }

    #[test]
    fn rejects_bad_param_segments() {
        assert_eq!(kind_of("/user/:"), EmptyParamName);
        assert_eq!(kind_of("/products/:/details"), ParamFollowedByInvalidChar);
        assert_eq!(kind_of("/file/:*id"), ParamFollowedByInvalidChar);
        assert_eq!(kind_of("/path/:id:extra"), MalformedParamName);
        assert_eq!(kind_of("/path/::id"), MalformedParamName);
        assert_eq!(kind_of("/search/:q uery"), MalformedParamName);
        assert_eq!(kind_of("/search/:q\tuery"), MalformedParamName);
        assert_eq!(kind_of("/path/:id*"), MalformedParamName);
    }

    #[test]
    fn rejects_bad_catch_all_segments() {
        assert_eq!(kind_of("/files/*"), EmptyCatchAllName);
        assert_eq!(kind_of("/file/*/edit"), CatchAllFollowedByInvalidChar);
        assert_eq!(kind_of("/file/*:name"), CatchAllFollowedByInvalidChar);
        assert_eq!(kind_of("/assets/*filepath/images"), CatchAllNotLastSegment);
        assert_eq!(kind_of("/path/**double"), MalformedCatchAllName);
        assert_eq!(kind_of("/path/*file:name"), MalformedCatchAllName);
        assert_eq!(kind_of("/path/*file name"), MalformedCatchAllName);
    }

    #[test]
    fn reports_position_of_violation() {
        let e = validate("/user//name").unwrap_err();
        assert_eq!(e.position(), 6);
        assert_eq!(e.path(), "/user//name");

        let e = validate("/search/:q uery").unwrap_err();
        assert_eq!(e.position(), 10);

        let e = validate("/assets/*filepath/images").unwrap_err();
        assert_eq!(e.position(), 17);
    }

    #[test]
    fn only_ascii_whitespace_is_rejected() {
        for ws in [" ", "\t", "\n", "\r", "\x0C"].iter() {
            assert_eq!(kind_of(&format!("/u/:a{}b", ws)), MalformedParamName);
            assert_eq!(kind_of(&format!("/u/*a{}b", ws)), MalformedCatchAllName);
        }

        assert_eq!(validate("/u/:a\u{a0}b"), Ok("/u/:a\u{a0}b"));
        assert_eq!(validate("/u/*a\u{2003}b"), Ok("/u/*a\u{2003}b"));
    }

    #[test]
    fn non_ascii_names_are_accepted() {
        assert_eq!(validate("/café/:naïve"), Ok("/café/:naïve"));
        assert_eq!(validate("/文件/*路径"), Ok("/文件/*路径"));
    }
}
