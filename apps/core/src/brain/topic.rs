//! Topic classification using an ordered cue table.
//!
//! Rules are evaluated top to bottom and the first rule with a cue contained
//! in the normalized input wins. Anything unmatched falls back to `General`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Closed set of topics the navigator can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// What the diagnosis means
    Diagnosis,
    /// School and education basics
    School,
    /// Communication and behavior support
    Communication,
    /// Trusted reading material
    Resources,
    /// What the assistant can and can't do
    Guardrails,
    /// Fallback
    General,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Diagnosis,
        Topic::School,
        Topic::Communication,
        Topic::Resources,
        Topic::Guardrails,
        Topic::General,
    ];

    /// Stable identifier, matches the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Topic::Diagnosis => "diagnosis",
            Topic::School => "school",
            Topic::Communication => "communication",
            Topic::Resources => "resources",
            Topic::Guardrails => "guardrails",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Topic {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.id() == wanted)
            .ok_or_else(|| AppError::UnknownTopic(s.to_string()))
    }
}

/// One row of the priority table
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub topic: Topic,
    pub cues: &'static [&'static str],
}

impl TopicRule {
    /// First cue of this rule contained in `normalized`
    pub fn matched_cue(&self, normalized: &str) -> Option<&'static str> {
        self.cues.iter().copied().find(|cue| normalized.contains(cue))
    }
}

/// Priority order matters: inputs often carry cues for several topics.
pub static TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Diagnosis,
        cues: &["diagnosis", "diagnosed"],
    },
    TopicRule {
        topic: Topic::School,
        cues: &["school"],
    },
    TopicRule {
        topic: Topic::Communication,
        cues: &["communication", "behavior"],
    },
    TopicRule {
        topic: Topic::Resources,
        cues: &["resource"],
    },
    TopicRule {
        topic: Topic::Guardrails,
        cues: &["limit", "scope"],
    },
];

/// Result of topic classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMatch {
    pub topic: Topic,
    /// Cue that selected the topic, `None` for the fallback
    pub matched_cue: Option<String>,
}

impl TopicMatch {
    pub fn fallback() -> Self {
        Self {
            topic: Topic::General,
            matched_cue: None,
        }
    }
}

/// Classifier over an ordered rule table
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    rules: &'static [TopicRule],
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicClassifier {
    pub fn new() -> Self {
        Self::with_rules(TOPIC_RULES)
    }

    pub fn with_rules(rules: &'static [TopicRule]) -> Self {
        Self { rules }
    }

    /// Classify already-normalized input
    pub fn classify(&self, normalized: &str) -> TopicMatch {
        for rule in self.rules {
            if let Some(cue) = rule.matched_cue(normalized) {
                return TopicMatch {
                    topic: rule.topic,
                    matched_cue: Some(cue.to_string()),
                };
            }
        }
        TopicMatch::fallback()
    }

    pub fn rules(&self) -> &'static [TopicRule] {
        self.rules
    }
}
