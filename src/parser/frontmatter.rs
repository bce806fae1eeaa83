//! Frontmatter Parser
//!
//! Handles the minimal `key: value` frontmatter used by `state.md`:
//! - BOM (Byte Order Mark) tolerance before the opening delimiter
//! - CRLF delimiter lines
//! - Digit / `true` / `false` coercion of values
//!
//! This is deliberately not YAML. Lists, nesting, and multiline strings are
//! never produced by the writers of this file, and a YAML parser would read
//! values like `yes` or `1.0` differently from the tools that write them.

use crate::models::{FieldValue, Frontmatter, StateDocument};

const DELIMITER: &str = "---";

/// Scanner position relative to the frontmatter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeBlock,
    InBlock,
    AfterBlock,
}

/// Parse a document into frontmatter and body
///
/// Content without a complete `---` block is not an error: it yields an empty
/// mapping and the whole content as body.
pub fn parse_document(content: &str) -> StateDocument {
    match split_frontmatter(content) {
        Some((block, body)) => StateDocument::new(parse_block(block), body),
        None => {
            tracing::debug!("no frontmatter block, treating whole file as body");
            StateDocument::new(Frontmatter::new(), content)
        }
    }
}

/// Check if a document has a delimited frontmatter block
pub fn has_frontmatter(content: &str) -> bool {
    split_frontmatter(content).is_some()
}

/// Split frontmatter from body
///
/// Frontmatter requirements:
/// - Line 1 is exactly `---` (a UTF-8 BOM before it is ignored)
/// - A later line is exactly `---`
/// - Delimiter lines may end in `\r`
///
/// The single blank line that `serialize_document` writes after the closing
/// delimiter is consumed, so it is not part of the body.
///
/// # Returns
/// * `Some((block, body))` where `block` is the text between the delimiters
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

    let mut state = ScanState::BeforeBlock;
    let mut block_start = 0;
    let mut block_end = 0;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match state {
            ScanState::BeforeBlock => {
                if !is_delimiter(line) {
                    return None;
                }
                block_start = offset;
                state = ScanState::InBlock;
            }
            ScanState::InBlock => {
                if is_delimiter(line) {
                    block_end = line_start;
                    state = ScanState::AfterBlock;
                    break;
                }
            }
            ScanState::AfterBlock => unreachable!("scanner stops at the closing delimiter"),
        }
    }

    if state != ScanState::AfterBlock {
        return None;
    }

    let block = &content[block_start..block_end];
    let rest = &content[offset..];
    let body = rest
        .strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))
        .unwrap_or(rest);

    Some((block, body))
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\n').trim_end_matches('\r') == DELIMITER
}

/// Parse the lines between the delimiters
fn parse_block(block: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();

    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim();
        let value = strip_quotes(value.trim());
        frontmatter.insert(key, FieldValue::coerce(value));
    }

    frontmatter
}

/// Strip one layer of surrounding double quotes
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Serialize frontmatter and body back into a document
///
/// Strings containing a space or colon are double-quoted; booleans are
/// lowercase; everything else uses its natural form. The body is appended
/// verbatim after a blank line.
pub fn serialize_document(frontmatter: &Frontmatter, body: &str) -> String {
    let mut lines = vec![DELIMITER.to_string()];

    for (key, value) in frontmatter.iter() {
        lines.push(format!("{}: {}", key, render_value(value)));
    }

    lines.push(DELIMITER.to_string());
    lines.push(String::new());
    lines.push(body.to_string());
    lines.join("\n")
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) if s.contains(' ') || s.contains(':') => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
