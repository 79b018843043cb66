//! Delimiter line grammar for block markers.
//!
//! Blocks are bounded by comment lines of the form:
//! ```text
//! // <<< block name
//! ...
//! // >>> block name
//! ```
//! Both C-style (`//`) and hash (`#`) comment prefixes are accepted. The
//! name runs to the end of the line; trailing whitespace is stripped before
//! names are compared, leading and internal whitespace are significant.

use regex::Regex;
use std::sync::LazyLock;

/// Matches an opening marker. Captures the comment prefix (leading
/// whitespace included, so annotation lines line up with the marker) and
/// the raw block name.
static OPEN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*(?://|#))\s+<{3}\s+(.+)$").expect("Invalid open marker regex")
});

/// Matches a closing marker. Captures the raw block name.
static CLOSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?://|#)\s+>{3}\s+(.+)$").expect("Invalid close marker regex")
});

/// A line recognized as a block delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Opening marker: trimmed block name plus the comment prefix exactly
    /// as it appeared on the line.
    Open { name: String, prefix: String },
    /// Closing marker: trimmed block name.
    Close { name: String },
}

/// Classify a single line against the open/close marker grammar.
///
/// Returns `None` for ordinary lines. Marker lines are consumed during the
/// scan; they are never stored as standalone entities.
pub fn parse_marker(line: &str) -> Option<Marker> {
    if let Some(caps) = OPEN_MARKER.captures(line) {
        return Some(Marker::Open {
            name: caps[2].trim_end().to_string(),
            prefix: caps[1].to_string(),
        });
    }
    if let Some(caps) = CLOSE_MARKER.captures(line) {
        return Some(Marker::Close {
            name: caps[1].trim_end().to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_marker_with_slash_comment() {
        let marker = parse_marker("// <<< token");
        assert_eq!(
            marker,
            Some(Marker::Open {
                name: "token".to_string(),
                prefix: "//".to_string(),
            })
        );
    }

    #[test]
    fn open_marker_with_hash_comment() {
        let marker = parse_marker("# <<< token");
        assert_eq!(
            marker,
            Some(Marker::Open {
                name: "token".to_string(),
                prefix: "#".to_string(),
            })
        );
    }

    #[test]
    fn open_marker_prefix_keeps_leading_whitespace() {
        let marker = parse_marker("  // <<< token");
        assert_eq!(
            marker,
            Some(Marker::Open {
                name: "token".to_string(),
                prefix: "  //".to_string(),
            })
        );
    }

    #[test]
    fn close_marker_with_slash_comment() {
        let marker = parse_marker("  // >>> token");
        assert_eq!(
            marker,
            Some(Marker::Close {
                name: "token".to_string(),
            })
        );
    }

    #[test]
    fn name_keeps_internal_spaces() {
        let marker = parse_marker("// <<< token with spaces");
        assert_eq!(
            marker,
            Some(Marker::Open {
                name: "token with spaces".to_string(),
                prefix: "//".to_string(),
            })
        );
    }

    #[test]
    fn name_trailing_whitespace_is_stripped() {
        let marker = parse_marker("// >>> token   ");
        assert_eq!(
            marker,
            Some(Marker::Close {
                name: "token".to_string(),
            })
        );
    }

    #[test]
    fn ordinary_lines_are_not_markers() {
        assert_eq!(parse_marker("code_to_be_replaced();"), None);
        assert_eq!(parse_marker(""), None);
        assert_eq!(parse_marker("// just a comment"), None);
    }

    #[test]
    fn marker_requires_space_after_prefix() {
        assert_eq!(parse_marker("//<<< token"), None);
        assert_eq!(parse_marker("#<<< token"), None);
    }

    #[test]
    fn marker_requires_exactly_three_angles_then_space() {
        assert_eq!(parse_marker("// <<<< token"), None);
        assert_eq!(parse_marker("// << token"), None);
        assert_eq!(parse_marker("// <<<token"), None);
    }
}
