//! Reconciliation exception line items.
//!
//! The partitioning into all/matched/unmatched is done by the session service;
//! these types only carry the result to the viewer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Expected and actual sides of a comparison row. Either side may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemPair {
    #[serde(default)]
    pub expected: Option<LineItem>,
    #[serde(default)]
    pub actual: Option<LineItem>,
}

impl LineItemPair {
    /// `actual - expected`, treating a missing side as zero.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let expected = self.expected.as_ref().map_or(0.0, |item| item.amount);
        let actual = self.actual.as_ref().map_or(0.0, |item| item.amount);
        actual - expected
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

impl MatchConfidence {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub expected: LineItem,
    pub actual: LineItem,
    pub confidence: MatchConfidence,
}

impl MatchedPair {
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.actual.amount - self.expected.amount
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedSets {
    #[serde(default)]
    pub expected: Vec<LineItem>,
    #[serde(default)]
    pub actual: Vec<LineItem>,
}

impl UnmatchedSets {
    #[must_use]
    pub fn len(&self) -> usize {
        self.expected.len() + self.actual.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expected.is_empty() && self.actual.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionLineItems {
    pub all: Vec<LineItemPair>,
    pub matched: Vec<MatchedPair>,
    pub unmatched: UnmatchedSets,
}
