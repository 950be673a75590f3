//! Breadcrumb trail for nested groups.

use itertools::Itertools;

/// Marker that replaces collapsed breadcrumb entries.
pub const ELLIPSIS: &str = "..";

/// Entries to display for a trail of group names.
///
/// Past `max_items` entries the middle collapses to [`ELLIPSIS`], keeping the
/// first entry and the last `max_items - 1`. A `max_items` of 0 disables the
/// breadcrumb.
#[must_use]
pub fn breadcrumb_items<'a>(names: &[&'a str], max_items: usize) -> Vec<&'a str> {
    if names.is_empty() || max_items == 0 {
        return Vec::new();
    }

    if names.len() <= max_items {
        return names.to_vec();
    }

    let mut items = Vec::with_capacity(max_items + 1);
    items.push(names[0]);
    items.push(ELLIPSIS);
    items.extend_from_slice(&names[names.len() - (max_items - 1)..]);
    items
}

/// The breadcrumb joined with `separator`.
#[must_use]
pub fn breadcrumb(names: &[&str], max_items: usize, separator: &str) -> String {
    breadcrumb_items(names, max_items)
        .into_iter()
        .join(&format!(" {separator} "))
}
