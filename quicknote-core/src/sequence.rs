//! Next-number resolution for a target folder.
//!
//! Only direct children of the folder count, and only when their basename
//! starts with an ASCII digit run followed by whitespace or the end of the
//! name (`"3 ideas"` → 3, `"draft-12"` → nothing, `"10.5"` → nothing).

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{FolderEntry, FolderPath, SequenceNumber, SEPARATOR};

static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:\s|$)").expect("numeric prefix pattern"));

/// Leading number of a basename, if it matches the anchored numeric prefix.
///
/// Digit runs that overflow `u64` are treated as non-matching.
pub fn leading_number(basename: &str) -> Option<u64> {
    let caps = NUMERIC_PREFIX.captures(basename)?;
    caps.get(1)?.as_str().parse().ok()
}

/// `true` if `entry` sits directly inside `folder` (no nested subfolders).
pub fn is_direct_child(entry: &FolderEntry, folder: &FolderPath, folder_depth: usize) -> bool {
    let Some(rest) = entry.path.strip_prefix(folder.as_str()) else {
        return false;
    };
    rest.starts_with(SEPARATOR) && entry.depth() == folder_depth + 1
}

/// Numbers carried by the direct children of `folder`.
pub fn numbered_children<'a, I>(
    entries: I,
    folder: &'a FolderPath,
    folder_depth: usize,
) -> impl Iterator<Item = u64> + 'a
where
    I: IntoIterator<Item = &'a FolderEntry>,
    I::IntoIter: 'a,
{
    entries
        .into_iter()
        .filter(move |entry| is_direct_child(entry, folder, folder_depth))
        .filter_map(|entry| leading_number(&entry.basename))
}

/// Next unused number for `folder`: one past the largest existing number, or 1.
pub fn resolve_next<'a, I>(entries: I, folder: &'a FolderPath, folder_depth: usize) -> SequenceNumber
where
    I: IntoIterator<Item = &'a FolderEntry>,
    I::IntoIter: 'a,
{
    let max = numbered_children(entries, folder, folder_depth)
        .max()
        .unwrap_or(0);
    SequenceNumber(max.saturating_add(1))
}
