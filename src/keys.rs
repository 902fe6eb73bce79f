//! Dot-delimited translation key paths.
//!
//! A key such as `menu.file.open` names a location in the translation tree.
//! Every function here is pure and works on plain string slices.

/// Separator between key segments.
pub const SEPARATOR: char = '.';

/// Checks if `candidate` is a strict descendant of `ancestor`.
///
/// `a.b.c` is a child of `a.b` and of `a`, but not of `a.b.c` itself or of `a.x`.
/// The prefix has to end on a segment boundary, so `a.bc` is not a child of `a.b`.
#[must_use]
pub fn is_child_key_of(candidate: &str, ancestor: &str) -> bool {
    let Some(remainder) = candidate.strip_prefix(ancestor) else {
        return false;
    };

    remainder.len() > 1 && remainder.starts_with(SEPARATOR)
}

/// Returns the part of `full_key` below `ancestor_key`.
///
/// ```rust
/// assert_eq!(langtree::keys::child_key("a.b.c", "a"), "b.c");
/// ```
///
/// If `full_key` is not a child of `ancestor_key` it is returned unchanged.
#[must_use]
pub fn child_key<'a>(full_key: &'a str, ancestor_key: &str) -> &'a str {
    full_key
        .strip_prefix(ancestor_key)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .unwrap_or(full_key)
}

/// Joins `prefix` and `suffix` into a single key.
///
/// An empty side is skipped so that no empty segment is produced.
#[must_use]
pub fn create(prefix: &str, suffix: &str) -> String {
    match (prefix.is_empty(), suffix.is_empty()) {
        (true, _) => suffix.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}{SEPARATOR}{suffix}"),
    }
}

/// Splits a key into its segments.
pub fn parts(key: &str) -> impl Iterator<Item = &str> {
    key.split(SEPARATOR)
}

/// The key without its last segment, or `None` for a top-level key.
#[must_use]
pub fn parent_key(key: &str) -> Option<&str> {
    key.rsplit_once(SEPARATOR).map(|(parent, _)| parent)
}

/// Every proper ancestor of `key`, nearest first.
///
/// ```rust
/// let ancestors: Vec<_> = langtree::keys::ancestors("a.b.c").collect();
/// assert_eq!(ancestors, vec!["a.b", "a"]);
/// ```
pub fn ancestors(key: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent_key(key), |parent| parent_key(parent))
}

/// The last segment of a key.
#[must_use]
pub fn last_part(key: &str) -> &str {
    key.rsplit_once(SEPARATOR).map_or(key, |(_, last)| last)
}

/// A key is valid when it is non-empty and has no empty segments.
#[must_use]
pub fn is_valid(key: &str) -> bool {
    !key.is_empty() && parts(key).all(|part| !part.is_empty())
}
