// src/rider/parse.rs
//! Extracting piggybacked pairs from field text
//!
//! Parsing is a pure read: it never touches a rider's installed pairs.

use log::debug;

use crate::indicator::Indicator;
use crate::rider::sequence::PairSequence;
use crate::warning::RiderWarning;

/// Pairs found in `content`, in the order their tokens appear.
pub fn parse(content: &str, indicator: &Indicator) -> PairSequence {
    parse_with_warnings(content, indicator).0
}

/// Like [`parse`], also returning what was tolerated along the way.
pub fn parse_with_warnings(
    content: &str,
    indicator: &Indicator,
) -> (PairSequence, Vec<RiderWarning>) {
    let scan = indicator.scan(content);
    let mut warnings = Vec::new();

    if let Some(offset) = scan.unbalanced {
        warnings.push(RiderWarning::UnbalancedIndicator { offset });
    }

    let mut pairs = PairSequence::new();
    for range in scan.tokens() {
        let token = &content[range];
        match indicator.match_token(token) {
            Some(pair) => pairs.push(pair),
            None => {
                debug!("Skipping malformed token {token:?}");
                warnings.push(RiderWarning::MalformedTokenSkipped {
                    token: token.to_owned(),
                });
            }
        }
    }

    (pairs, warnings)
}
