//! Static knowledge tables: sources, canned answers, suggestions, topic cards.
//!
//! Every lookup is an exhaustive `match` on [`Topic`], so adding a topic
//! without an answer, badge and suggestion list does not compile.

use super::reply::Badge;
use super::topic::Topic;

/// Approved citation list, in display order
pub const ACADEMIC_SOURCES: &[&str] = &[
    "DSM-5 (summary, non-diagnostic)",
    "CDC: Autism Overview",
    "Autism Speaks School Community Tool Kit",
    "Peer-reviewed research (varies by topic)",
    "Institution-approved family education handouts",
];

/// Number of sources cited on a safe refusal
pub const SAFETY_SOURCE_COUNT: usize = 3;

pub const EMPATHETIC_PREAMBLE: &str =
    "Many parents feel this way after a diagnosis. You’re asking an important question. ";

pub const SAFE_REFUSAL: &str = "I can’t predict outcomes, diagnose, or give medical advice. \
I can explain what research says and how to work with your clinical team. \
Would you like information on communication supports, school planning, or trusted resources?";

pub const WELCOME_MESSAGE: &str = "Welcome. I’m an evidence-bound support assistant for parents \
after an autism diagnosis. I share educational guidance only, using institution-approved sources, \
and I always show what I’m citing.";

pub const SAFE_FAILURE_DEMO_PROMPT: &str =
    "Can you tell me if my child will ever live independently?";

/// Two views over [`ACADEMIC_SOURCES`]
pub struct SourceCatalog;

impl SourceCatalog {
    pub fn full() -> &'static [&'static str] {
        ACADEMIC_SOURCES
    }

    /// Narrower list used when refusing
    pub fn safety_prefix() -> &'static [&'static str] {
        &ACADEMIC_SOURCES[..SAFETY_SOURCE_COUNT]
    }
}

pub fn answer_for(topic: Topic) -> &'static str {
    match topic {
        Topic::Diagnosis => "An autism diagnosis describes differences in social communication and \
patterns of behavior. It is not a value judgment and does not predict a child’s future. Support \
focuses on creating predictable routines, communication pathways, and sensory-friendly \
environments. Always partner with your clinical team for decisions.",
        Topic::School => "Let the school know you want to collaborate. Ask about supports such as \
visual schedules, sensory breaks, clear routines, and predictable transitions. If available, \
request an IEP/504 meeting to discuss accommodations. Share what works at home to help staff \
respond consistently.",
        Topic::Communication => "Start with your child’s strengths. Use clear, concrete language, \
visuals, and consistent routines. Offer communication options—gestures, pictures, AAC if \
recommended by clinicians. Reinforce attempts to communicate, and keep transitions predictable \
to reduce stress.",
        Topic::Resources => "Here are trusted, non-diagnostic resources: CDC Autism Overview for \
foundational education; DSM-5 summaries for terminology; Autism Speaks School Community Tool Kit \
for school collaboration; peer-reviewed research on communication supports; and your \
institution’s approved parent handouts for local guidance.",
        Topic::Guardrails => "This assistant is educational and knowledge-bound. It does not \
diagnose, predict outcomes, or replace clinical care. It uses DSM-5 summaries, CDC content, \
peer-reviewed research, and institution-approved materials. If a question falls outside scope, \
it will say so and redirect you to safer topics.",
        Topic::General => "Great question. I can help with educational guidance, trustworthy \
resources, and planning next steps. I cannot provide medical advice or predict outcomes. Let’s \
focus on evidence-based supports you can discuss with your care team.",
    }
}

pub fn suggestions_for(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Diagnosis => &[
            "Autism myths vs facts",
            "How autism can present differently",
            "Collaborating with clinicians",
        ],
        Topic::School => &[
            "Preparing for IEP/504 conversations",
            "Sensory supports in classrooms",
            "Partnering with teachers",
        ],
        Topic::Communication => &[
            "Visual supports and routines",
            "Building communication opportunities",
            "Responding to meltdowns with safety",
        ],
        Topic::Resources => &[
            "Downloadable checklists for new parents",
            "Evidence-based parent training programs",
            "Support groups and helplines",
        ],
        Topic::Guardrails => &[
            "What I can and cannot answer",
            "How we choose sources",
            "How to ask safer questions",
        ],
        Topic::General => &[
            "Understanding sensory sensitivities",
            "Planning the next 30 days",
            "Finding local services (use approved directories)",
        ],
    }
}

/// Badge for a classified (non-refusal) answer
pub fn badge_for(topic: Topic) -> Badge {
    match topic {
        Topic::Guardrails => Badge::KnowledgeBound,
        _ => Badge::EvidenceBased,
    }
}

/// Guided entry point shown before the parent types anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicCard {
    pub label: &'static str,
    pub prompt: &'static str,
    /// Topic the card is written for. Classification may differ: the prompt
    /// text goes through the engine like any other input.
    pub intended_topic: Topic,
}

pub const TOPIC_CARDS: &[TopicCard] = &[
    TopicCard {
        label: "Understanding my child’s diagnosis",
        prompt: "Help me understand what an autism diagnosis means in plain language, based on DSM-5 summaries.",
        intended_topic: Topic::Diagnosis,
    },
    TopicCard {
        label: "School & education basics",
        prompt: "What should I know about supporting my child at school after an autism diagnosis?",
        intended_topic: Topic::School,
    },
    TopicCard {
        label: "Communication & behavior support",
        prompt: "How can I support my child’s communication and behavior in daily routines?",
        intended_topic: Topic::Communication,
    },
    TopicCard {
        label: "Trusted academic resources",
        prompt: "Share trusted academic and institution-approved resources on autism I can read next.",
        intended_topic: Topic::Resources,
    },
    TopicCard {
        label: "What this assistant can and can’t do",
        prompt: "Explain the limits: this tool is educational, non-diagnostic, and uses approved sources only.",
        intended_topic: Topic::Guardrails,
    },
];
