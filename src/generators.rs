//! Property test generators for path operations
//!
//! Strategies here build paths out of the pieces the cleaner cares about:
//! ordinary names, `.` and `..` elements, and runs of slashes.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate ordinary element names (never `.` or `..`, never containing `/`)
    pub fn name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}"
    }

    /// Generate names that start with dots but are not `.` or `..`
    pub fn dotted_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(".hidden".to_string()),
            Just("..hidden".to_string()),
            Just("...".to_string()),
            Just(".config.toml".to_string()),
            Just("file.".to_string()),
        ]
    }

    /// Generate any single element, weighted towards the interesting ones
    pub fn element() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Self::name(),
            2 => Just("..".to_string()),
            2 => Just(".".to_string()),
            1 => Just(String::new()),
            1 => Self::dotted_name(),
        ]
    }

    /// Generate a separator: usually one slash, sometimes a run
    pub fn separator() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Just("/".to_string()),
            1 => "/{2,4}",
        ]
    }

    /// Generate arbitrary dirty paths, rooted or relative, with optional trailing slash
    pub fn any_path() -> impl Strategy<Value = String> {
        (
            any::<bool>(),
            prop::collection::vec((Self::element(), Self::separator()), 0..=8),
            any::<bool>(),
        )
            .prop_map(|(rooted, parts, trailing)| {
                let mut path = String::new();
                if rooted {
                    path.push('/');
                }
                let count = parts.len();
                for (i, (element, separator)) in parts.into_iter().enumerate() {
                    path.push_str(&element);
                    if i + 1 < count || trailing {
                        path.push_str(&separator);
                    }
                }
                path
            })
    }

    /// Generate rooted paths of ordinary names, already clean, with at least one element
    pub fn clean_absolute_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::name(), 1..=6).prop_map(|names| format!("/{}", names.join("/")))
    }

    /// Generate lists of fragments for join operations
    pub fn fragments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                3 => Self::any_path(),
                1 => Just(String::new()),
            ],
            0..=4,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn names_are_ordinary_elements(name in PathGenerators::name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
            prop_assert!(name != "." && name != "..");
        }

        #[test]
        fn clean_absolute_paths_are_rooted(path in PathGenerators::clean_absolute_path()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.ends_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn generators_dont_panic(
            _path in PathGenerators::any_path(),
            _fragments in PathGenerators::fragments()
        ) {
            // This test just ensures our generators don't panic
        }
    }
}
