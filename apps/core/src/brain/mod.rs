//! # Brain Module
//!
//! Knowledge-bound reply engine for the navigator.
//! Turns one parent message into one structured, source-cited reply.
//!
//! ## Components
//! - `keywords`: emotional and safety keyword sets, input normalization
//! - `topic`: closed topic taxonomy and ordered cue rules
//! - `knowledge`: sources, canned answers, suggestions, topic cards
//! - `reply`: `StructuredReply` output structure
//! - `engine`: main pipeline (safety check, classification, assembly)

pub mod engine;
pub mod keywords;
pub mod knowledge;
pub mod reply;
pub mod topic;

pub use engine::{classify_and_respond, Decision, ReplyEngine, ReplyTrace};
pub use keywords::{normalize, KeywordSet, EMOTIONAL_KEYWORDS, SAFETY_TRIGGERS};
pub use knowledge::{SourceCatalog, TopicCard, SAFE_FAILURE_DEMO_PROMPT, TOPIC_CARDS};
pub use reply::{Badge, StructuredReply};
pub use topic::{Topic, TopicClassifier, TopicMatch, TopicRule, TOPIC_RULES};
