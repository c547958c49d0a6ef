//! Grammar of taxonomy labels.
//!
//! A label is a dotted path followed by free text:
//! * `label ::= path [' ' text]`
//! * `path ::= segment ('.' segment)*`
//!
//! The path ends at the first space. Labels without any space are taken
//! to be a path only. Segments are not validated; `"1..2"` yields an empty
//! middle segment.

/// Separator between the path and the free text of a label.
pub(crate) const PATH_TEXT_SEPARATOR: char = ' ';

/// Separator between the segments of a path.
pub(crate) const SEGMENT_SEPARATOR: char = '.';

/// Separator between segments in generated identifiers.
pub(crate) const ID_SEGMENT_SEPARATOR: &str = "-";

/// Escapes of characters that would make generated identifiers ambiguous.
const ESCAPED_DASH: &str = "_2d";
const ESCAPED_UNDERSCORE: &str = "_5f";

/// A label split into its parts, borrowing from the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelParts<'a> {
    /// Trimmed label text, e.g. `"3.2.1 Water"`
    pub text: &'a str,
    /// Path up to the first space, e.g. `"3.2.1"`
    pub full_key: &'a str,
}

impl<'a> LabelParts<'a> {
    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.full_key.split(SEGMENT_SEPARATOR)
    }

    /// Returns the number of path segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

/// Splits a raw label into text and dotted path.
///
/// The label is trimmed first. Returns `None` for labels that are empty
/// after trimming, since those carry no path at all.
///
/// # Examples
/// ```
/// # use labeltree::parser::label_grammar::split_label;
/// let parts = split_label("  3.2.1 Water ").unwrap();
/// assert_eq!(parts.text, "3.2.1 Water");
/// assert_eq!(parts.full_key, "3.2.1");
/// assert_eq!(parts.segments().collect::<Vec<_>>(), vec!["3", "2", "1"]);
///
/// // No space: the whole label is the path
/// assert_eq!(split_label("7.1").unwrap().full_key, "7.1");
/// assert!(split_label("   ").is_none());
/// ```
pub fn split_label(raw: &str) -> Option<LabelParts<'_>> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let full_key = match text.find(PATH_TEXT_SEPARATOR) {
        Some(end) => &text[..end],
        None => text,
    };

    Some(LabelParts { text, full_key })
}

/// Joins the path of a non-root parent and a segment into a full key.
///
/// Top-level nodes have no parent path at all; their full key is the
/// segment itself. The parent path may be empty, e.g. for `".5"`.
///
/// # Examples
/// ```
/// # use labeltree::parser::label_grammar::join_key;
/// assert_eq!(join_key("3.2", "1"), "3.2.1");
/// assert_eq!(join_key("", "5"), ".5");
/// ```
pub fn join_key(parent: &str, segment: &str) -> String {
    let mut key = String::with_capacity(parent.len() + 1 + segment.len());
    key.push_str(parent);
    key.push(SEGMENT_SEPARATOR);
    key.push_str(segment);
    key
}

/// Returns the parent path of a full key, or `None` for top-level keys.
///
/// # Examples
/// ```
/// # use labeltree::parser::label_grammar::parent_key;
/// assert_eq!(parent_key("3.2.1"), Some("3.2"));
/// assert_eq!(parent_key("3"), None);
/// ```
pub fn parent_key(full_key: &str) -> Option<&str> {
    full_key.rfind(SEGMENT_SEPARATOR).map(|end| &full_key[..end])
}

/// Derives a render-safe identifier from a full key.
///
/// Segments are joined with `-`. A literal `-` or `_` inside a segment is
/// escaped as `_2d` or `_5f`, so distinct paths never share an id while
/// ordinary numeric paths map to the plain form.
///
/// # Examples
/// ```
/// # use labeltree::parser::label_grammar::key_to_id;
/// assert_eq!(key_to_id("rw-", "3.2.1"), "rw-3-2-1");
/// assert_eq!(key_to_id("rw-", "9"), "rw-9");
/// assert_eq!(key_to_id("rw-", "1-2"), "rw-1_2d2");
/// ```
pub fn key_to_id(prefix: &str, full_key: &str) -> String {
    let mut id = String::with_capacity(prefix.len() + full_key.len());
    id.push_str(prefix);
    for (i, segment) in full_key.split(SEGMENT_SEPARATOR).enumerate() {
        if i > 0 {
            id.push_str(ID_SEGMENT_SEPARATOR);
        }
        for c in segment.chars() {
            match c {
                '-' => id.push_str(ESCAPED_DASH),
                '_' => id.push_str(ESCAPED_UNDERSCORE),
                _ => id.push(c),
            }
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_only_first_space() {
        let parts = split_label("1.1 Sky, heaven").unwrap();
        assert_eq!(parts.full_key, "1.1");
        assert_eq!(parts.text, "1.1 Sky, heaven");
        assert_eq!(parts.depth(), 2);
    }

    #[test]
    fn test_split_trims_newlines_and_tabs() {
        let parts = split_label("\n\t2 Person\t\n").unwrap();
        assert_eq!(parts.text, "2 Person");
        assert_eq!(parts.full_key, "2");
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let parts = split_label("1..2 Odd").unwrap();
        assert_eq!(parts.segments().collect::<Vec<_>>(), vec!["1", "", "2"]);
    }

    #[test]
    fn test_ids_of_distinct_keys_differ() {
        let keys = ["1.2", "1-2", "1_2", "1_2d", "1._2d", ".5", "5", "1..2", "1.-2"];
        let ids: Vec<_> = keys.iter().map(|key| key_to_id("rw-", key)).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "{} collides", keys[i]);
        }
        assert_eq!(key_to_id("rw-", "a_b"), "rw-a_5fb");
    }

    #[test]
    fn test_parent_of_top_level_is_none() {
        assert_eq!(parent_key("1"), None);
        assert_eq!(parent_key("1.5"), Some("1"));
    }
}
