// src/rider/render.rs
//! Regenerating field text from a pair sequence
//!
//! The unrelated text of the original content is kept verbatim and placed as
//! one block either before or after the rendered pairs, depending on whether
//! the original content opened with unrelated text.

use std::ops::Range;

use log::debug;
use serde::Deserialize;

use crate::consts::PAIR_SEPARATOR;
use crate::indicator::Indicator;
use crate::rider::sequence::PairSequence;

/// What happens to an indicator-bounded token that is not `key=value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedTokenPolicy {
    /// Treat it as a token boundary; its text disappears on render.
    #[default]
    Drop,
    /// Keep its text verbatim as part of the unrelated content.
    Preserve,
}

/// Renders `pairs` into `original`'s layout, dropping malformed tokens.
pub fn render(original: &str, pairs: &PairSequence, indicator: &Indicator) -> String {
    render_with_policy(original, pairs, indicator, MalformedTokenPolicy::Drop)
}

pub fn render_with_policy(
    original: &str,
    pairs: &PairSequence,
    indicator: &Indicator,
    policy: MalformedTokenPolicy,
) -> String {
    let scan = indicator.scan(original);
    let boundaries: Vec<Range<usize>> = scan
        .tokens()
        .filter(|range| match policy {
            MalformedTokenPolicy::Drop => true,
            MalformedTokenPolicy::Preserve => {
                indicator.match_token(&original[range.clone()]).is_some()
            }
        })
        .collect();

    let (unrelated, starts_with_unrelated) = unrelated_segments(original, &boundaries);

    let rendered: Vec<String> = pairs.iter().map(|p| p.render(indicator.as_str())).collect();
    let mut out = String::with_capacity(
        original.len() + rendered.iter().map(|r| r.len() + 1).sum::<usize>(),
    );

    if starts_with_unrelated {
        unrelated.iter().for_each(|s| out.push_str(s));
    }
    for line in &rendered {
        if !out.is_empty() {
            out.push(PAIR_SEPARATOR);
        }
        out.push_str(line);
    }
    if !starts_with_unrelated {
        unrelated.iter().for_each(|s| out.push_str(s));
    }

    debug!(
        "Rendered {} pair(s) around {} unrelated segment(s)",
        pairs.len(),
        unrelated.len()
    );
    out
}

/// Gaps between token boundaries, plus whether the content opens with one.
///
/// An empty leading gap is not recorded and means the content starts with a
/// token. Later gaps are recorded even when empty.
fn unrelated_segments<'a>(original: &'a str, boundaries: &[Range<usize>]) -> (Vec<&'a str>, bool) {
    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut starts_with_unrelated = true;
    let mut cursor = 0;

    let gap_ends = boundaries
        .iter()
        .map(|b| (b.start, b.end))
        .chain(std::iter::once((original.len(), original.len())));

    for (i, (start, end)) in gap_ends.enumerate() {
        // Overlapping markers can put the next token before the cursor
        let gap = original.get(cursor..start).unwrap_or_default();
        if i == 0 && gap.is_empty() {
            starts_with_unrelated = false;
        } else {
            segments.push(gap);
        }
        cursor = cursor.max(end);
    }

    (segments, starts_with_unrelated)
}
