//! Lexical path cleaning and joining
//!
//! Everything here works on the text of the path alone. Nothing touches the
//! filesystem, follows symlinks or knows about separators other than `/`.

use crate::error::{PathError, Result};

/// Return the shortest path equivalent to `path` by purely lexical processing
///
/// The following rules are applied in a single left-to-right pass:
/// - Runs of slashes collapse into one slash
/// - Each `.` element is eliminated
/// - Each inner `..` element is eliminated along with the non-`..` element before it
/// - `..` elements that begin a rooted path are eliminated (`/..` becomes `/`)
/// - `..` elements that begin a relative path are kept
///
/// The result ends in a slash only if it is the root `/`. An empty result
/// becomes `"."`.
///
/// See also Rob Pike, "Lexical File Names in Plan 9 or Getting Dot-Dot Right",
/// <https://9p.io/sys/doc/lexnames.html>
///
/// # Examples
/// ```
/// use lexpath::clean;
///
/// assert_eq!(clean("a//b/./c/.."), "a/b");
/// assert_eq!(clean("/../a"), "/a");
/// assert_eq!(clean("../../a"), "../../a");
/// assert_eq!(clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    let mut out = String::with_capacity(path.len().max(1));
    clean_to(path, &mut out);
    out
}

/// Clean `path` into a caller-owned buffer
///
/// Any previous contents of `out` are discarded. The buffer's allocation is
/// reused, which makes this the variant to reach for in tight loops.
///
/// # Examples
/// ```
/// use lexpath::clean_into;
///
/// let mut buf = String::from("stale contents");
/// clean_into("/usr//local/../bin/", &mut buf);
/// assert_eq!(buf, "/usr/bin");
/// ```
pub fn clean_into(path: &str, out: &mut String) {
    out.reserve(path.len().max(1));
    clean_to(path, out);
}

/// Clean `path`, reporting allocation failure instead of aborting
///
/// The whole output buffer is reserved up front. The cleaned path is never
/// longer than the input (or one byte, for `"."`), so no further allocation
/// happens while cleaning.
///
/// # Examples
/// ```
/// use lexpath::try_clean;
///
/// assert_eq!(try_clean("a/b/../c").unwrap(), "a/c");
/// ```
pub fn try_clean(path: &str) -> Result<String> {
    let requested = path.len().max(1);
    let mut out = String::new();
    out.try_reserve_exact(requested)
        .map_err(PathError::allocation(requested))?;
    clean_to(path, &mut out);
    Ok(out)
}

/// Join any number of path fragments into a single cleaned path
///
/// Empty fragments are ignored and the rest are separated by a single slash
/// before cleaning. If there are no fragments, or all of them are empty, the
/// result is an empty string rather than `"."`.
///
/// # Examples
/// ```
/// use lexpath::join;
///
/// assert_eq!(join(["a", "", "b"]), "a/b");
/// assert_eq!(join(["/usr/", "/local", "bin/"]), "/usr/local/bin");
/// assert_eq!(join(["", ""]), "");
/// assert_eq!(join(["a/../b"]), "b");
/// ```
pub fn join<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(fragment);
    }

    if joined.is_empty() {
        return joined;
    }
    clean(&joined)
}

/// Join path fragments, reporting allocation failure instead of aborting
///
/// Same semantics as [`join`].
///
/// # Examples
/// ```
/// use lexpath::try_join;
///
/// assert_eq!(try_join(["src", "./lib.rs"]).unwrap(), "src/lib.rs");
/// assert_eq!(try_join(Vec::<String>::new()).unwrap(), "");
/// ```
pub fn try_join<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let fragments: Vec<S> = fragments.into_iter().collect();
    let parts = fragments
        .iter()
        .map(|fragment| fragment.as_ref())
        .filter(|fragment| !fragment.is_empty());

    // one byte per separator, plus one spare
    let requested: usize = parts.clone().map(|part| part.len() + 1).sum();
    if requested == 0 {
        return Ok(String::new());
    }

    let mut joined = String::new();
    joined
        .try_reserve_exact(requested)
        .map_err(PathError::allocation(requested))?;
    for part in parts {
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(part);
    }

    try_clean(&joined)
}

/// Extension trait exposing [`clean`] as a method
///
/// # Examples
/// ```
/// use lexpath::PathClean;
///
/// assert_eq!("/test/../path/".clean(), "/path");
/// assert_eq!(String::from("a/./b").clean(), "a/b");
/// ```
pub trait PathClean {
    fn clean(&self) -> String;
}

impl PathClean for str {
    fn clean(&self) -> String {
        clean(self)
    }
}

impl PathClean for String {
    fn clean(&self) -> String {
        clean(self)
    }
}

/// The cleaning pass shared by every public entry point.
///
/// `out.len()` is the write cursor. `dotdot` is the earliest output offset a
/// `..` may still cut back to: the root slash, or the end of a leading run of
/// `..` elements that could not be resolved.
pub(crate) fn clean_to(path: &str, out: &mut String) {
    out.clear();

    if path.is_empty() {
        out.push('.');
        return;
    }

    let bytes = path.as_bytes();
    let n = bytes.len();
    let rooted = bytes[0] == b'/';

    let mut r = 0;
    let mut dotdot = 0;
    if rooted {
        out.push('/');
        r = 1;
        dotdot = 1;
    }

    while r < n {
        match bytes[r] {
            // empty element
            b'/' => r += 1,
            // `.` element
            b'.' if r + 1 == n || bytes[r + 1] == b'/' => r += 1,
            // `..` element
            b'.' if bytes[r + 1] == b'.' && (r + 2 == n || bytes[r + 2] == b'/') => {
                r += 2;
                if out.len() > dotdot {
                    let cut = out[dotdot..].rfind('/').map_or(dotdot, |i| dotdot + i);
                    out.truncate(cut);
                } else if !rooted {
                    if !out.is_empty() {
                        out.push('/');
                    }
                    out.push_str("..");
                    dotdot = out.len();
                }
            }
            // real element, including names like `.hidden` and `...`
            _ => {
                if out.len() > usize::from(rooted) {
                    out.push('/');
                }
                let end = bytes[r..]
                    .iter()
                    .position(|&b| b == b'/')
                    .map_or(n, |i| r + i);
                out.push_str(&path[r..end]);
                r = end;
            }
        }
    }

    if out.is_empty() {
        out.push('.');
    }
}
