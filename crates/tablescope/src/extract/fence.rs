//! Line scanner for fenced blocks in free-form text.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// Opening fence: three or more backticks and an optional info tag.
static OPEN_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*(`{3,})[ \t]*([^\s`]*)[^`]*$").expect("valid opening fence pattern")
});

/// Closing fence: backticks only.
static CLOSE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(`{3,})[ \t]*$").expect("valid closing fence pattern"));

/// A fenced region of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Lower-cased info tag; empty when the fence had none.
    pub tag: String,
    /// Text between the fence lines, without the final line break.
    pub body: &'a str,
    /// Byte range from the start of the opening line to the end of the closing line.
    pub span: Range<usize>,
}

struct Line<'a> {
    start: usize,
    end: usize,
    content: &'a str,
}

fn lines_with_offsets(text: &str) -> Vec<Line<'_>> {
    let mut offset = 0;
    text.split_inclusive('\n')
        .map(|raw| {
            let start = offset;
            offset += raw.len();
            Line {
                start,
                end: offset,
                content: raw.trim_end_matches(['\n', '\r']),
            }
        })
        .collect()
}

/// Find every terminated fenced block, in order of appearance.
///
/// Fences do not nest. An opening fence with no matching close is treated
/// as plain text.
pub fn scan_fences(text: &str) -> Vec<FencedBlock<'_>> {
    let lines = lines_with_offsets(text);
    let mut blocks = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let Some(open) = OPEN_FENCE.captures(lines[idx].content) else {
            idx += 1;
            continue;
        };
        let ticks = open[1].len();
        let tag = open[2].to_ascii_lowercase();

        let close = lines[idx + 1..].iter().position(|line| {
            CLOSE_FENCE
                .captures(line.content)
                .is_some_and(|c| c[1].len() >= ticks)
        });

        let Some(offset) = close else {
            idx += 1;
            continue;
        };
        let close_idx = idx + 1 + offset;

        let body_start = lines[idx].end;
        let body_end = lines[close_idx].start;
        let body = text[body_start..body_end]
            .strip_suffix('\n')
            .map(|b| b.strip_suffix('\r').unwrap_or(b))
            .unwrap_or(&text[body_start..body_end]);

        blocks.push(FencedBlock {
            tag,
            body,
            span: lines[idx].start..lines[close_idx].end,
        });
        idx = close_idx + 1;
    }

    blocks
}
