// src/indicator.rs
//! Field indicator: the marker that bounds every embedded token
//!
//! An `Indicator` is validated once and carries the compiled token pattern,
//! so parse and render never have to fail on it.

use std::fmt;
use std::ops::Range;

use log::{trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{DEFAULT_INDICATOR, KEY_VALUE_SEPARATOR};
use crate::error::{Result, RiderError};
use crate::pair::KeyValuePair;

static STANDARD: Lazy<Indicator> =
    Lazy::new(|| Indicator::new(DEFAULT_INDICATOR).expect("default indicator is a valid marker"));

/// Validated token delimiter plus its `marker key=value marker` pattern.
#[derive(Clone)]
pub struct Indicator {
    marker: String,
    token: Regex,
}

impl Indicator {
    /// Builds an indicator from a non-empty marker without `=`.
    pub fn new(marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(RiderError::InvalidIndicator(
                "indicator must not be empty".into(),
            ));
        }
        if marker.contains(KEY_VALUE_SEPARATOR) {
            return Err(RiderError::InvalidIndicator(format!(
                "indicator {marker:?} must not contain `{KEY_VALUE_SEPARATOR}`"
            )));
        }

        // Key is one or more ASCII word characters; value stops at any line terminator
        let escaped = regex::escape(&marker);
        let token = Regex::new(&format!(
            r"\A{escaped}([0-9A-Za-z_]+)=([^\n\r\x{{85}}\x{{2028}}\x{{2029}}]*?){escaped}\z"
        ))
            .map_err(|e| RiderError::InvalidIndicator(e.to_string()))?;

        Ok(Self { marker, token })
    }

    /// The built-in `¤` indicator
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.marker
    }

    /// Length of the marker in bytes
    pub fn len(&self) -> usize {
        self.marker.len()
    }

    /// Always false; an empty marker is rejected by [`Indicator::new`].
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
    }

    /// Finds every indicator occurrence, left to right.
    ///
    /// The cursor advances one character past each hit, so touching or
    /// overlapping markers are all recorded. An odd trailing occurrence is
    /// dropped and reported through [`Scan::unbalanced`].
    pub(crate) fn scan(&self, content: &str) -> Scan {
        let mut offsets = Vec::new();
        let mut from = 0;

        while let Some(found) = content[from..].find(self.marker.as_str()) {
            let at = from + found;
            offsets.push(at);
            from = at + content[at..].chars().next().map_or(1, char::len_utf8);
        }

        let unbalanced = if offsets.len() % 2 == 1 {
            let last = offsets.pop();
            warn!("Unbalanced field indicators");
            last
        } else {
            None
        };

        trace!(
            "Found {} balanced indicator(s) in {} byte(s) of content",
            offsets.len(),
            content.len()
        );

        Scan {
            offsets,
            unbalanced,
            marker_len: self.marker.len(),
        }
    }

    /// Matches one indicator-bounded token against the `key=value` shape.
    pub(crate) fn match_token(&self, token: &str) -> Option<KeyValuePair> {
        let caps = self.token.captures(token)?;
        Some(KeyValuePair::new(&caps[1], &caps[2]))
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::standard()
    }
}

impl PartialEq for Indicator {
    fn eq(&self, other: &Self) -> bool {
        self.marker == other.marker
    }
}

impl Eq for Indicator {}

impl fmt::Debug for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Indicator").field(&self.marker).finish()
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marker)
    }
}

/// Balanced indicator offsets found in one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scan {
    pub offsets: Vec<usize>,
    pub unbalanced: Option<usize>,
    marker_len: usize,
}

impl Scan {
    /// Byte ranges of each token, both markers included.
    pub fn tokens(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.offsets
            .chunks_exact(2)
            .map(move |pair| pair[0]..pair[1] + self.marker_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_records_adjacent_markers() {
        let scan = Indicator::standard().scan("¤a=1¤¤b=2¤");
        assert_eq!(scan.offsets, vec![0, 5, 7, 12]);
        assert_eq!(scan.unbalanced, None);
        assert_eq!(scan.tokens().collect::<Vec<_>>(), vec![0..7, 7..14]);
    }

    #[test]
    fn scan_drops_odd_trailing_marker() {
        let scan = Indicator::standard().scan("¤a=1¤ extra ¤b=2");
        assert_eq!(scan.offsets.len(), 2);
        assert_eq!(scan.unbalanced, Some(14));
    }

    #[test]
    fn scan_steps_one_char_for_overlapping_markers() {
        let hash = Indicator::new("##").unwrap();
        let scan = hash.scan("###");
        assert_eq!(scan.offsets, vec![0, 1]);
        assert_eq!(scan.tokens().collect::<Vec<_>>(), vec![0..3]);
    }

    #[test]
    fn match_token_requires_word_key() {
        let ind = Indicator::standard();
        let pair = ind.match_token("¤alpha_1=x = y¤").unwrap();
        assert_eq!(pair.key(), "alpha_1");
        assert_eq!(pair.value(), Some("x = y"));

        assert!(ind.match_token("¤=value¤").is_none());
        assert!(ind.match_token("¤no value here¤").is_none());
        assert!(ind.match_token("¤bad-key=1¤").is_none());
        assert!(ind.match_token("¤k=multi\nline¤").is_none());
        assert!(ind.match_token("¤k=a\rb¤").is_none());
    }

    #[test]
    fn match_token_rejects_unicode_line_terminators() {
        let ind = Indicator::standard();
        for token in ["¤k=a\u{85}b¤", "¤k=a\u{2028}b¤", "¤k=a\u{2029}b¤"] {
            assert!(ind.match_token(token).is_none(), "{token:?}");
        }
        assert!(ind.match_token("¤k=a\u{a0}b¤").is_some());
    }

    #[test]
    fn match_token_accepts_empty_value() {
        let pair = Indicator::standard().match_token("¤k=¤").unwrap();
        assert_eq!(pair.value(), Some(""));
    }

    #[test]
    fn regex_metacharacters_in_marker_are_literal() {
        let ind = Indicator::new("[*]").unwrap();
        let pair = ind.match_token("[*]k=v[*]").unwrap();
        assert_eq!(pair.key(), "k");
    }

    #[test]
    fn empty_marker_is_rejected() {
        assert!(matches!(
            Indicator::new(""),
            Err(RiderError::InvalidIndicator(_))
        ));
    }

    #[test]
    fn marker_with_separator_is_rejected() {
        for marker in ["=", "==", "¤=", "<=>"] {
            assert!(
                matches!(Indicator::new(marker), Err(RiderError::InvalidIndicator(_))),
                "{marker:?}"
            );
        }
    }
}
