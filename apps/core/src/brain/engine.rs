//! Reply Engine - single-turn policy pipeline.
//!
//! Pipeline for one turn:
//! 1. Normalize (lowercase)
//! 2. Emotional-tone check (always runs)
//! 3. Safety-trigger check (overrides everything below)
//! 4. Topic classification
//! 5. Reply assembly
//!
//! The engine holds no per-call state, so a shared instance can serve any
//! number of concurrent callers.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, info};

use super::keywords::{normalize, KeywordSet, EMOTIONAL_KEYWORDS, SAFETY_TRIGGERS};
use super::knowledge::{
    answer_for, badge_for, suggestions_for, SourceCatalog, EMPATHETIC_PREAMBLE, SAFE_REFUSAL,
};
use super::reply::{owned, Badge, StructuredReply};
use super::topic::{Topic, TopicClassifier};
use crate::error::AppError;

static DEFAULT_ENGINE: LazyLock<ReplyEngine> = LazyLock::new(ReplyEngine::new);

/// Answer one turn with the process-wide engine
pub fn classify_and_respond(input: &str) -> StructuredReply {
    DEFAULT_ENGINE.classify_and_respond(input)
}

/// Outcome of the safety check and topic classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    /// Safety trigger fired; topic classification was skipped
    Refuse { trigger: String },
    /// Classified answer. `cue` is `None` for the `general` fallback
    Answer { topic: Topic, cue: Option<String> },
}

impl Decision {
    /// Topic whose suggestion list the reply carries
    pub fn topic(&self) -> Topic {
        match self {
            Decision::Refuse { .. } => Topic::Guardrails,
            Decision::Answer { topic, .. } => *topic,
        }
    }

    pub fn is_refusal(&self) -> bool {
        matches!(self, Decision::Refuse { .. })
    }
}

/// Provenance of a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTrace {
    /// Emotional keyword that triggered the preamble
    pub emotional_keyword: Option<String>,
    pub decision: Decision,
}

impl ReplyTrace {
    pub fn is_emotional(&self) -> bool {
        self.emotional_keyword.is_some()
    }
}

/// The reply engine
#[derive(Debug, Clone)]
pub struct ReplyEngine {
    emotional: &'static KeywordSet,
    safety: &'static KeywordSet,
    classifier: TopicClassifier,
}

impl Default for ReplyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyEngine {
    pub fn new() -> Self {
        Self {
            emotional: &EMOTIONAL_KEYWORDS,
            safety: &SAFETY_TRIGGERS,
            classifier: TopicClassifier::new(),
        }
    }

    /// Run detection and classification without building the reply.
    pub fn trace(&self, input: &str) -> ReplyTrace {
        let normalized = normalize(input);

        let emotional_keyword = self.emotional.first_match(&normalized).map(str::to_string);

        let decision = match self.safety.first_match(&normalized) {
            Some(trigger) => Decision::Refuse {
                trigger: trigger.to_string(),
            },
            None => {
                let matched = self.classifier.classify(&normalized);
                Decision::Answer {
                    topic: matched.topic,
                    cue: matched.matched_cue,
                }
            }
        };

        ReplyTrace {
            emotional_keyword,
            decision,
        }
    }

    /// Build the reply for a finished trace
    pub fn assemble(&self, trace: &ReplyTrace) -> StructuredReply {
        let preamble = if trace.is_emotional() {
            EMPATHETIC_PREAMBLE
        } else {
            ""
        };

        match &trace.decision {
            Decision::Refuse { .. } => StructuredReply {
                text: format!("{preamble}{SAFE_REFUSAL}"),
                sources: owned(SourceCatalog::safety_prefix()),
                badge: Badge::KnowledgeBoundSafeResponse,
                suggestions: owned(suggestions_for(Topic::Guardrails)),
                scope_limited: true,
            },
            Decision::Answer { topic, .. } => StructuredReply {
                text: format!("{preamble}{}", answer_for(*topic)),
                sources: owned(SourceCatalog::full()),
                badge: badge_for(*topic),
                suggestions: owned(suggestions_for(*topic)),
                scope_limited: false,
            },
        }
    }

    /// Engine entry point. Assumes non-blank input; see [`ReplyEngine::respond`].
    pub fn classify_and_respond(&self, input: &str) -> StructuredReply {
        let trace = self.trace(input);

        let (cue, trigger) = match &trace.decision {
            Decision::Refuse { trigger } => (None, Some(trigger.as_str())),
            Decision::Answer { cue, .. } => (cue.as_deref(), None),
        };
        debug!(
            topic = %trace.decision.topic(),
            cue = cue.unwrap_or("-"),
            trigger = trigger.unwrap_or("-"),
            emotional = trace.is_emotional(),
            "Turn decided"
        );
        if let Some(trigger) = trigger {
            info!(trigger, "Safety trigger matched, returning safe refusal");
        }

        self.assemble(&trace)
    }

    /// Same as [`ReplyEngine::classify_and_respond`] but rejects blank input.
    pub fn respond(&self, input: &str) -> Result<StructuredReply, AppError> {
        if input.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }
        Ok(self.classify_and_respond(input))
    }
}
