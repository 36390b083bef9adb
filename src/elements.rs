//! Path decomposition: directory, final element, extension
//!
//! Functions returning `String` hand ownership of a fresh value to the caller.
//! Functions returning `&str` borrow from their input and never allocate.
//! The `try_*` variants report allocation failure instead of aborting.

use crate::error::Result;
use crate::normalize::{clean, clean_into, try_clean};

/// Return all but the last element of `path`, typically its directory
///
/// Only the part up to and including the last slash is cleaned, so whatever
/// follows that slash never affects the result.
///
/// - An empty path gives `"."`
/// - A path with no slash gives `"."`
/// - A path of only slashes gives `"/"`
/// - Otherwise the result never ends in a slash
///
/// # Examples
/// ```
/// use lexpath::dir;
///
/// assert_eq!(dir("/a/b/c"), "/a/b");
/// assert_eq!(dir("a/b/"), "a/b");
/// assert_eq!(dir("a"), ".");
/// assert_eq!(dir("/"), "/");
/// ```
pub fn dir(path: &str) -> String {
    let mut out = String::new();
    dir_into(path, &mut out);
    out
}

/// Write the directory of `path` into a caller-owned buffer
///
/// Any previous contents of `out` are discarded. See [`dir`].
///
/// # Examples
/// ```
/// use lexpath::dir_into;
///
/// let mut buf = String::new();
/// dir_into("/srv//www/./index.html", &mut buf);
/// assert_eq!(buf, "/srv/www");
/// ```
pub fn dir_into(path: &str, out: &mut String) {
    match path.rfind('/') {
        Some(last_slash) => clean_into(&path[..=last_slash], out),
        None => {
            out.clear();
            out.push('.');
        }
    }
}

/// Return the last element of `path`
///
/// The path is cleaned first, so `.` and `..` elements are resolved before
/// the final element is picked. Trailing slashes never count as an element.
///
/// - An empty path gives `"."`
/// - A path of only slashes gives `"/"`
///
/// # Examples
/// ```
/// use lexpath::base;
///
/// assert_eq!(base("/a/b/c/"), "c");
/// assert_eq!(base("a/b/.."), "a");
/// assert_eq!(base("////"), "/");
/// assert_eq!(base(""), ".");
/// ```
pub fn base(path: &str) -> String {
    let mut cleaned = clean(path);
    match cleaned.rfind('/') {
        // only the root survives cleaning
        Some(_) if cleaned.len() == 1 => cleaned,
        Some(last_slash) => cleaned.split_off(last_slash + 1),
        None => cleaned,
    }
}

/// Return the directory of `path`, reporting allocation failure instead of aborting
///
/// Same semantics as [`dir`].
///
/// # Examples
/// ```
/// use lexpath::try_dir;
///
/// assert_eq!(try_dir("/a/b/c").unwrap(), "/a/b");
/// assert_eq!(try_dir("a").unwrap(), ".");
/// ```
pub fn try_dir(path: &str) -> Result<String> {
    match path.rfind('/') {
        Some(last_slash) => try_clean(&path[..=last_slash]),
        None => try_clean(""),
    }
}

/// Return the last element of `path`, reporting allocation failure instead of aborting
///
/// Same semantics as [`base`]. The element is cut out of the cleaned buffer
/// in place, so the only allocation is the one [`try_clean`](crate::try_clean) makes.
///
/// # Examples
/// ```
/// use lexpath::try_base;
///
/// assert_eq!(try_base("/a/b/c/").unwrap(), "c");
/// assert_eq!(try_base("////").unwrap(), "/");
/// ```
pub fn try_base(path: &str) -> Result<String> {
    let mut cleaned = try_clean(path)?;
    if cleaned.len() > 1 {
        if let Some(last_slash) = cleaned.rfind('/') {
            cleaned.drain(..=last_slash);
        }
    }
    Ok(cleaned)
}

/// Borrow the last element of `path` without cleaning it
///
/// Trailing slashes are skipped and the span after the last remaining slash
/// is returned. Nothing is resolved, so the span can itself be `.` or `..`
/// and may need [`clean`](crate::clean) by the caller.
///
/// - An empty path gives `"."`
/// - A path of only slashes gives `"/"`
///
/// # Examples
/// ```
/// use lexpath::base_span;
///
/// assert_eq!(base_span("/a/b/c//"), "c");
/// assert_eq!(base_span("a/b/.."), "..");
/// assert_eq!(base_span("///"), "/");
/// ```
pub fn base_span(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind('/') {
        Some(last_slash) => &trimmed[last_slash + 1..],
        None => trimmed,
    }
}

/// Return the extension of the last element of `path`, including the dot
///
/// The extension starts at the last dot of the final element. A dot that
/// opens the element is not an extension marker, so dot-files such as
/// `.bashrc` have no extension.
///
/// # Examples
/// ```
/// use lexpath::ext;
///
/// assert_eq!(ext("file.tar.gz"), Some(".gz"));
/// assert_eq!(ext("/etc/.bashrc"), None);
/// assert_eq!(ext("noext"), None);
/// assert_eq!(ext("archive.d/file"), None);
/// ```
pub fn ext(path: &str) -> Option<&str> {
    let start = path.rfind('/').map_or(0, |last_slash| last_slash + 1);
    let element = &path[start..];

    element
        .rfind('.')
        .filter(|&dot| dot > 0)
        .map(|dot| &element[dot..])
}

/// Report whether `path` is rooted
///
/// # Examples
/// ```
/// use lexpath::is_abs;
///
/// assert!(is_abs("/x"));
/// assert!(!is_abs("x"));
/// assert!(!is_abs(""));
/// ```
pub fn is_abs(path: &str) -> bool {
    path.starts_with('/')
}

/// Replace the last element of a caller-owned path with `new_base`
///
/// Everything after the last slash is replaced. A path without a slash is
/// replaced entirely. The root slash of `"/x"` is kept.
///
/// # Examples
/// ```
/// use lexpath::change_base;
///
/// let mut path = String::from("docs/draft.md");
/// change_base(&mut path, "final.md");
/// assert_eq!(path, "docs/final.md");
///
/// let mut path = String::from("draft.md");
/// change_base(&mut path, "final.md");
/// assert_eq!(path, "final.md");
/// ```
pub fn change_base(path: &mut String, new_base: &str) {
    match path.rfind('/') {
        Some(last_slash) => path.truncate(last_slash + 1),
        None => path.clear(),
    }
    path.push_str(new_base);
}

/// Return a copy of `path` with its last element replaced by `new_base`
///
/// The owning counterpart of [`change_base`].
///
/// # Examples
/// ```
/// use lexpath::with_base;
///
/// assert_eq!(with_base("/srv/www/index.html", "404.html"), "/srv/www/404.html");
/// assert_eq!(with_base("/x", "y"), "/y");
/// ```
pub fn with_base(path: &str, new_base: &str) -> String {
    let keep = path.rfind('/').map_or(0, |last_slash| last_slash + 1);

    let mut out = String::with_capacity(keep + new_base.len());
    out.push_str(&path[..keep]);
    out.push_str(new_base);
    out
}
