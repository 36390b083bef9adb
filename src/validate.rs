//! Path validation utilities
//!
//! Checks a caller can run before handing a path to the engine, and a
//! cheap test for paths that are already clean.

use crate::error::{PathError, Result};

/// Check whether a path honors the caller contract
///
/// Paths are opaque `/`-separated text. The only thing they may never carry
/// is a NUL byte.
///
/// # Examples
/// ```
/// use lexpath::is_valid_path;
///
/// assert!(is_valid_path("a/b/../c"));
/// assert!(is_valid_path(""));
/// assert!(!is_valid_path("file\0null"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    !path.contains('\0')
}

/// Validate a path and report where it breaks the caller contract
///
/// # Examples
/// ```
/// use lexpath::{validate_path, PathError};
///
/// assert!(validate_path("/usr/bin").is_ok());
/// assert!(matches!(
///     validate_path("usr\0bin"),
///     Err(PathError::EmbeddedNul { position: 3, .. })
/// ));
/// ```
pub fn validate_path(path: &str) -> Result<()> {
    match path.bytes().position(|b| b == 0) {
        Some(position) => Err(PathError::EmbeddedNul {
            path: path.to_string(),
            position,
        }),
        None => Ok(()),
    }
}

/// Check whether `path` is already in cleaned form, without allocating
///
/// Holds exactly when `clean(path) == path`:
/// - no empty elements (no `//`, no trailing slash except on `/` itself)
/// - no `.` elements, unless the whole path is `.`
/// - `..` only as a leading run of a relative path
///
/// # Examples
/// ```
/// use lexpath::is_clean;
///
/// assert!(is_clean("../../a/b"));
/// assert!(is_clean("/"));
/// assert!(!is_clean("a/../b"));
/// assert!(!is_clean("/a/"));
/// assert!(!is_clean(""));
/// ```
pub fn is_clean(path: &str) -> bool {
    match path {
        "" => false,
        "." | "/" => true,
        _ => {
            let rooted = path.starts_with('/');
            let body = if rooted { &path[1..] } else { path };

            // `..` can only survive cleaning before any real element
            let mut in_leading_dotdots = !rooted;
            body.split('/').all(|element| match element {
                "" | "." => false,
                ".." => in_leading_dotdots,
                _ => {
                    in_leading_dotdots = false;
                    true
                }
            })
        }
    }
}
