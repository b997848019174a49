// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Comment-aware line segmentation.
//!
//! Splits one physical line into its comment and code portions while keeping
//! string and character literal contents out of both. The only state that
//! crosses a line boundary — "still inside a block comment" — is threaded
//! explicitly through [`segment`] so the function stays pure and testable.

/// Comment syntax mode for a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxMode {
    /// `#` line comments, single/double-quoted strings, no block comments,
    /// no state across lines.
    Hash,
    /// `//` and `/* */` comments, string and char literals with backslash
    /// escapes; block-comment state persists across lines.
    CFamily,
}

/// Per-file lexical state carried between lines.
///
/// Reset at the start of each file; never shared across files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_block_comment: bool,
}

/// One line split into comment and code text.
///
/// `comment` joins every comment span on the line with a single space, so a
/// directive in any span is visible to the matcher and a line yields at most
/// one finding per tool no matter how many spans match. `code` holds the
/// bytes outside comments and outside literals; the clang diagnostic pragma
/// is matched against it.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SegmentedLine {
    pub comment: String,
    pub code: String,
}

/// Segment `line`, threading the carried block-comment state.
///
/// Total over arbitrary input: unterminated literals close at end of line,
/// an unterminated block comment carries its open state to the next line.
pub fn segment(line: &str, state: ScanState, mode: SyntaxMode) -> (SegmentedLine, ScanState) {
    match mode {
        SyntaxMode::Hash => (segment_hash(line), ScanState::default()),
        SyntaxMode::CFamily => segment_c_family(line, state),
    }
}

/// Find `needle` (an ASCII two-byte delimiter) in `bytes` at or after `from`.
fn find_delim(bytes: &[u8], from: usize, needle: [u8; 2]) -> Option<usize> {
    let end = bytes.len().saturating_sub(1);
    (from..end).find(|&i| bytes[i] == needle[0] && bytes[i + 1] == needle[1])
}

/// Join non-empty spans of `line` with a single space.
///
/// Span boundaries always sit next to ASCII delimiters, so slicing is safe
/// for multi-byte content in between.
fn join_spans(line: &str, spans: &[(usize, usize)]) -> String {
    let mut out = String::new();
    for &(start, end) in spans {
        if start >= end {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&line[start..end]);
    }
    out
}

/// Consume a string or char literal starting at the opening quote.
///
/// Returns the index just past the closing quote, or end of line when the
/// literal never closes (it does not leak into the next line).
fn skip_literal(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn segment_c_family(line: &str, state: ScanState) -> (SegmentedLine, ScanState) {
    let bytes = line.as_bytes();
    let n = bytes.len();
    let mut comment_spans: Vec<(usize, usize)> = Vec::new();
    let mut code_spans: Vec<(usize, usize)> = Vec::new();

    let mut i = 0;
    if state.in_block_comment {
        match find_delim(bytes, 0, *b"*/") {
            Some(close) => {
                comment_spans.push((0, close));
                i = close + 2;
            }
            None => {
                return (
                    SegmentedLine {
                        comment: line.to_string(),
                        code: String::new(),
                    },
                    ScanState {
                        in_block_comment: true,
                    },
                );
            }
        }
    }

    let mut in_block = false;
    let mut code_start = i;
    while i < n {
        match bytes[i] {
            b'/' if i + 1 < n && bytes[i + 1] == b'/' => {
                code_spans.push((code_start, i));
                comment_spans.push((i + 2, n));
                code_start = n;
                i = n;
            }
            b'/' if i + 1 < n && bytes[i + 1] == b'*' => {
                code_spans.push((code_start, i));
                match find_delim(bytes, i + 2, *b"*/") {
                    Some(close) => {
                        comment_spans.push((i + 2, close));
                        i = close + 2;
                    }
                    None => {
                        comment_spans.push((i + 2, n));
                        in_block = true;
                        i = n;
                    }
                }
                code_start = i;
            }
            b'"' | b'\'' => {
                code_spans.push((code_start, i));
                i = skip_literal(bytes, i).min(n);
                code_start = i;
            }
            _ => i += 1,
        }
    }
    if code_start < n {
        code_spans.push((code_start, n));
    }

    (
        SegmentedLine {
            comment: join_spans(line, &comment_spans),
            code: join_spans(line, &code_spans),
        },
        ScanState {
            in_block_comment: in_block,
        },
    )
}

fn segment_hash(line: &str) -> SegmentedLine {
    let bytes = line.as_bytes();
    let n = bytes.len();
    let mut code_spans: Vec<(usize, usize)> = Vec::new();

    let mut i = 0;
    let mut code_start = 0;
    while i < n {
        match bytes[i] {
            // A backslash outside a literal escapes the next character, so
            // `\#` does not open a comment.
            b'\\' => i += 2,
            b'"' | b'\'' => {
                code_spans.push((code_start, i));
                i = skip_literal(bytes, i).min(n);
                code_start = i;
            }
            b'#' => {
                code_spans.push((code_start, i));
                return SegmentedLine {
                    comment: line[i + 1..].to_string(),
                    code: join_spans(line, &code_spans),
                };
            }
            _ => i += 1,
        }
    }
    if code_start < n {
        code_spans.push((code_start, n));
    }

    SegmentedLine {
        comment: String::new(),
        code: join_spans(line, &code_spans),
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
