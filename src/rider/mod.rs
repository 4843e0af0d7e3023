// src/rider/mod.rs
//! Field rider: owns one field's text and the pairs riding in it
//!
//! The free functions [`parse`] and [`render`] are the protocol; `FieldRider`
//! bundles them with the content, the installed pairs and the indicator for
//! the common parse → mutate → render cycle. A rider is meant to be owned by
//! a single operation at a time.

pub mod parse;
pub mod render;
pub mod sequence;

use std::collections::BTreeMap;

use log::debug;

pub use parse::{parse, parse_with_warnings};
pub use render::{render, render_with_policy, MalformedTokenPolicy};
pub use sequence::PairSequence;

use crate::config::RiderConfig;
use crate::error::Result;
use crate::indicator::Indicator;
use crate::pair::KeyValuePair;
use crate::warning::RiderWarning;

#[derive(Debug, Clone, Default)]
pub struct FieldRider {
    indicator: Indicator,
    policy: MalformedTokenPolicy,
    content: String,
    pairs: PairSequence,
}

impl FieldRider {
    /// Takes `content` with the standard indicator and installs its pairs.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_indicator(content, Indicator::standard())
    }

    pub fn with_indicator(content: impl Into<String>, indicator: Indicator) -> Self {
        let content = content.into();
        let pairs = parse(&content, &indicator);
        debug!("Field rider created with {} pair(s)", pairs.len());
        Self {
            indicator,
            policy: MalformedTokenPolicy::default(),
            content,
            pairs,
        }
    }

    /// Uses the indicator and malformed-token policy from `config`.
    pub fn from_config(content: impl Into<String>, config: &RiderConfig) -> Result<Self> {
        let rider = Self::with_indicator(content, config.indicator()?);
        Ok(rider.with_policy(config.malformed_tokens))
    }

    pub fn with_policy(mut self, policy: MalformedTokenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn policy(&self) -> MalformedTokenPolicy {
        self.policy
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the content without touching the installed pairs.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn pairs(&self) -> &PairSequence {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut PairSequence {
        &mut self.pairs
    }

    pub fn set_pairs(&mut self, pairs: PairSequence) {
        self.pairs = pairs;
    }

    pub fn add_pair(&mut self, pair: KeyValuePair) {
        self.pairs.push(pair);
    }

    /// Parses the current content. The installed pairs are left alone.
    pub fn parse(&self) -> PairSequence {
        parse(&self.content, &self.indicator)
    }

    pub fn parse_with_warnings(&self) -> (PairSequence, Vec<RiderWarning>) {
        parse_with_warnings(&self.content, &self.indicator)
    }

    /// Re-parses the content and installs the result.
    pub fn reload(&mut self) -> Vec<RiderWarning> {
        let (pairs, warnings) = self.parse_with_warnings();
        self.pairs = pairs;
        warnings
    }

    pub fn lookup_key_value_pair(&self, key: &str) -> Option<&KeyValuePair> {
        self.pairs.lookup(key)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut KeyValuePair> {
        self.pairs.lookup_mut(key)
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.set_value(key, value);
    }

    pub fn remove(&mut self, key: &str) -> usize {
        self.pairs.remove(key)
    }

    /// Key-sorted key → value view of the installed pairs.
    pub fn settings_map(&self) -> BTreeMap<String, Option<String>> {
        self.pairs.settings()
    }

    /// Content regenerated from the installed pairs. `content()` is unchanged.
    pub fn render(&self) -> String {
        render_with_policy(&self.content, &self.pairs, &self.indicator, self.policy)
    }

    /// Renders and installs the result as the new content.
    pub fn commit(&mut self) -> &str {
        self.content = self.render();
        &self.content
    }
}
