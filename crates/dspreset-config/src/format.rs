//! Preset text format.
//!
//! A preset file is a sequence of brace-delimited blocks, one per unit:
//!
//! ```text
//! eq 1 {
//! 0.5
//! 1.0
//! }
//! src 0 {
//! 48000
//! }
//! ```
//!
//! The header is `<type> {` in named presets and `<type> <enabled> {` in the
//! current-config file. Every line between the header and a line that is
//! exactly `}` is one parameter value, trimmed, in position order. Blank
//! lines are skipped between blocks but kept as empty values inside one.

use std::fmt;

use thiserror::Error;

use crate::model::Node;

/// Why a preset text failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Header did not have the expected number of tokens.
    HeaderTokenCount {
        /// 3 with the enabled flag, 2 without.
        expected: usize,
        /// Tokens actually present.
        found: usize,
    },
    /// Header's last token was not `{`.
    MissingOpenBrace {
        /// The token found in its place.
        found: String,
    },
    /// Input ended inside a block.
    MissingClosingBrace {
        /// Type of the unclosed block.
        unit_type: String,
    },
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::HeaderTokenCount { expected, found } => {
                write!(f, "expected {expected} header tokens, found {found}")
            }
            FormatErrorKind::MissingOpenBrace { found } => {
                write!(f, "expected '{{' at end of header, found '{found}'")
            }
            FormatErrorKind::MissingClosingBrace { unit_type } => {
                write!(f, "missing closing brace for '{unit_type}'")
            }
        }
    }
}

/// A malformed preset text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct FormatError {
    /// 1-based line the problem was detected on. For a missing closing
    /// brace this is the header line of the unclosed block.
    pub line: usize,
    /// What went wrong.
    pub kind: FormatErrorKind,
}

enum State {
    ScanningForHeader,
    CollectingItems(Node),
}

/// Parse a preset text into nodes in source order.
///
/// `has_enabled_flag` selects the current-config header layout.
///
/// # Example
///
/// ```rust
/// use dspreset_config::format;
///
/// let nodes = format::parse("eq 1 {\n0.5\n1.0\n}\n", true).unwrap();
/// assert_eq!(nodes[0].unit_type, "eq");
/// assert_eq!(nodes[0].enabled, Some(true));
/// assert_eq!(nodes[0].items, vec!["0.5", "1.0"]);
///
/// assert!(format::parse("x {\nline1\n", false).is_err());
/// ```
pub fn parse(text: &str, has_enabled_flag: bool) -> Result<Vec<Node>, FormatError> {
    let expected = if has_enabled_flag { 3 } else { 2 };
    let mut nodes = Vec::new();
    let mut state = State::ScanningForHeader;
    let mut header_line = 0;

    for (index, raw) in text.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let line_no = index + 1;

        state = match state {
            State::ScanningForHeader => {
                let line = raw.trim();
                if line.is_empty() {
                    State::ScanningForHeader
                } else {
                    header_line = line_no;
                    State::CollectingItems(parse_header(line, expected, line_no)?)
                }
            }
            State::CollectingItems(node) if raw == "}" => {
                nodes.push(node);
                State::ScanningForHeader
            }
            State::CollectingItems(mut node) => {
                node.items.push(raw.trim().to_string());
                State::CollectingItems(node)
            }
        };
    }

    if let State::CollectingItems(node) = state {
        return Err(FormatError {
            line: header_line,
            kind: FormatErrorKind::MissingClosingBrace {
                unit_type: node.unit_type,
            },
        });
    }

    Ok(nodes)
}

fn parse_header(line: &str, expected: usize, line_no: usize) -> Result<Node, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != expected {
        return Err(FormatError {
            line: line_no,
            kind: FormatErrorKind::HeaderTokenCount {
                expected,
                found: tokens.len(),
            },
        });
    }
    if tokens[expected - 1] != "{" {
        return Err(FormatError {
            line: line_no,
            kind: FormatErrorKind::MissingOpenBrace {
                found: tokens[expected - 1].to_string(),
            },
        });
    }

    let mut node = Node::new(tokens[0]);
    if expected == 3 && tokens[1] != "0" {
        node.enabled = Some(true);
    }
    Ok(node)
}

/// Write nodes back in the preset text format.
///
/// With `has_enabled_flag` the flag is written as `1` for enabled units and
/// `0` otherwise. Display names are not part of the format and are dropped.
pub fn render(nodes: &[Node], has_enabled_flag: bool) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&node.unit_type);
        if has_enabled_flag {
            out.push_str(if node.is_enabled() { " 1" } else { " 0" });
        }
        out.push_str(" {\n");
        for item in &node.items {
            out.push_str(item);
            out.push('\n');
        }
        out.push_str("}\n");
    }
    out
}
