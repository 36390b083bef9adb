//! # lexpath
//!
//! Lexical cleaning and decomposition of slash-separated paths.
//!
//! Every operation works on the text of a path alone. Nothing here touches the
//! filesystem, resolves symlinks or knows about separators other than `/`.
//! Paths are treated as opaque text split on `/`, so any `&str` works.
//!
//! ## Features
//!
//! - **Cleaning**: collapse slashes, drop `.`, resolve `..` in a single pass
//! - **Joining**: concatenate fragments and clean the result
//! - **Decomposition**: directory, final element and extension of a path
//! - **Buffer reuse**: `*_into` variants write into caller-owned buffers
//! - **Fallible allocation**: `try_*` variants report allocation failure
//!
//! ## Examples
//!
//! ### Cleaning and joining
//!
//! ```rust
//! use lexpath::{clean, join};
//!
//! assert_eq!(clean("a//b/./c/../d/"), "a/b/d");
//! assert_eq!(clean("/../etc"), "/etc");
//! assert_eq!(clean("../../x"), "../../x");
//!
//! assert_eq!(join(["usr", "", "local/", "/bin"]), "usr/local/bin");
//! assert_eq!(join(["", ""]), "");
//! ```
//!
//! ### Taking a path apart
//!
//! ```rust
//! use lexpath::{base, dir, ext, is_abs, join};
//!
//! let path = "/srv/www/site.tar.gz";
//! assert_eq!(dir(path), "/srv/www");
//! assert_eq!(base(path), "site.tar.gz");
//! assert_eq!(ext(path), Some(".gz"));
//! assert!(is_abs(path));
//!
//! assert_eq!(join([dir(path), base(path)]), path);
//! ```
//!
//! ### Borrowing instead of allocating
//!
//! ```rust
//! use lexpath::{base_span, change_base};
//!
//! // a view into the input, nothing cleaned
//! assert_eq!(base_span("logs/app/.."), "..");
//!
//! let mut path = String::from("logs/app.log");
//! change_base(&mut path, "app.log.1");
//! assert_eq!(path, "logs/app.log.1");
//! ```

mod elements;
mod error;
mod normalize;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use elements::{
    base, base_span, change_base, dir, dir_into, ext, is_abs, try_base, try_dir, with_base,
};
pub use error::{PathError, Result};
pub use normalize::{clean, clean_into, join, try_clean, try_join, PathClean};
pub use validate::{is_clean, is_valid_path, validate_path};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
