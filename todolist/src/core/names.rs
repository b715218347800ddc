//! Name comparison rules for lists and items.
//!
//! All uniqueness checks and filters compare names case-insensitively.

/// True if `a` and `b` are the same name ignoring case.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True if `name` contains `needle` ignoring case. An empty needle matches.
pub fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(&needle.to_lowercase())
}
