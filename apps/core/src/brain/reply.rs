//! Structured reply - the engine's only output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::knowledge::{suggestions_for, SourceCatalog, WELCOME_MESSAGE};
use super::topic::Topic;

/// Evidentiary/safety label shown next to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Evidence-Based")]
    EvidenceBased,
    #[serde(rename = "Knowledge-Bound")]
    KnowledgeBound,
    #[serde(rename = "Knowledge-Bound Safe Response")]
    KnowledgeBoundSafeResponse,
    /// Only used by the welcome message
    #[serde(rename = "Knowledge-Bound Response")]
    KnowledgeBoundResponse,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::EvidenceBased => "Evidence-Based",
            Badge::KnowledgeBound => "Knowledge-Bound",
            Badge::KnowledgeBoundSafeResponse => "Knowledge-Bound Safe Response",
            Badge::KnowledgeBoundResponse => "Knowledge-Bound Response",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reply handed to the presentation shell. Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReply {
    pub text: String,
    pub sources: Vec<String>,
    pub badge: Badge,
    pub suggestions: Vec<String>,
    /// True only for guarded refusals
    pub scope_limited: bool,
}

impl StructuredReply {
    /// Opening message shown before the first turn
    pub fn welcome() -> Self {
        Self {
            text: WELCOME_MESSAGE.to_string(),
            sources: owned(SourceCatalog::full()),
            badge: Badge::KnowledgeBoundResponse,
            suggestions: owned(suggestions_for(Topic::General)),
            scope_limited: false,
        }
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
