//! Symptom triage responder: ordered keyword rule engine over free text.
//!
//! Matching is a deliberate linear scan with first-match-wins semantics,
//! not a ranked classifier. The declared condition order is externally
//! observable: an utterance mentioning symptoms of two conditions resolves
//! to whichever condition is declared first. Preserve that order.

use serde::{Deserialize, Serialize};

use crate::domain::ChatSession;

/// Exact phrase that asks a condition for its advisory directly.
const ADVISORY_PHRASE: &str = "advice";

/// One condition's triage rule: symptom keywords and the advisory they
/// trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRule {
    /// Condition name, used only for logging
    pub name: String,

    /// Symptom keywords in match-priority order, stored lower case
    pub symptom_keywords: Vec<String>,

    /// Advisory returned on any keyword hit
    pub advisory_text: String,
}

impl ConditionRule {
    /// Create a rule; keywords are normalized to lower case so containment
    /// against the lowercased utterance works.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        symptom_keywords: &[&str],
        advisory_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symptom_keywords: symptom_keywords
                .iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
            advisory_text: advisory_text.into(),
        }
    }

    /// Exact-phrase entries this condition answers directly.
    fn phrase_response(&self, normalized: &str) -> Option<&str> {
        (normalized == ADVISORY_PHRASE).then_some(self.advisory_text.as_str())
    }

    /// First keyword (in declared order) contained in the utterance.
    fn matching_keyword(&self, normalized: &str) -> Option<&str> {
        self.symptom_keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| normalized.contains(keyword))
    }
}

/// Fixed symptom knowledge: per-condition rules in priority order, general
/// phrases, and the fallback response.
///
/// Loaded once at process start and shared read-only across all chat turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomKnowledgeBase {
    conditions: Vec<ConditionRule>,
    phrases: Vec<(String, String)>,
    fallback: String,
}

impl SymptomKnowledgeBase {
    /// Build a knowledge base; phrase keys are normalized to lower case.
    #[must_use]
    pub fn new(
        conditions: Vec<ConditionRule>,
        phrases: Vec<(String, String)>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            conditions,
            phrases: phrases
                .into_iter()
                .map(|(phrase, response)| (phrase.to_lowercase(), response))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// Condition rules in declared priority order.
    #[must_use]
    pub fn conditions(&self) -> &[ConditionRule] {
        &self.conditions
    }
}

impl Default for SymptomKnowledgeBase {
    /// The built-in knowledge base. Condition order (diabetes, heart,
    /// kidney) is part of the observable contract.
    fn default() -> Self {
        let phrase = |p: &str, r: &str| (p.to_string(), r.to_string());

        Self::new(
            vec![
                ConditionRule::new(
                    "diabetes",
                    &["thirst", "urinate", "hunger", "fatigue", "blurry vision"],
                    "These could be diabetes symptoms. Check your glucose levels and consider our diabetes assessment.",
                ),
                ConditionRule::new(
                    "heart",
                    &["chest pain", "shortness of breath", "nausea", "fatigue"],
                    "These may indicate heart issues. Try our heart disease assessment and consult a doctor if symptoms persist.",
                ),
                ConditionRule::new(
                    "kidney",
                    &["swelling", "fatigue", "urination", "back pain"],
                    "Possible kidney health issues.",
                ),
            ],
            vec![
                phrase("hi", "Hello! I'm your health assistant. How can I help?"),
                phrase(
                    "help",
                    "I can help assess risks for diabetes, heart disease, and kidney health. Just describe your symptoms.",
                ),
                phrase("thanks", "You're welcome! Stay healthy!"),
            ],
            "I'm not sure I understand. Could you describe your symptoms more specifically?",
        )
    }
}

/// Stateless triage responder over a fixed knowledge base.
pub struct TriageResponder {
    knowledge: SymptomKnowledgeBase,
}

impl TriageResponder {
    /// Create a responder over the given knowledge base.
    #[must_use]
    pub fn new(knowledge: SymptomKnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Answer one utterance.
    ///
    /// The utterance is lowercased (not trimmed; that is the caller's
    /// responsibility), then matched in priority order:
    /// 1. Exact phrase, condition entries before the general table
    /// 2. Symptom keyword containment, conditions and keywords in
    ///    declared order, first hit wins
    /// 3. The fixed fallback
    ///
    /// Pure function of the utterance and the knowledge base: the same
    /// input always produces the same response.
    #[must_use]
    pub fn respond(&self, utterance: &str) -> &str {
        let normalized = utterance.to_lowercase();

        for condition in self.knowledge.conditions() {
            if let Some(response) = condition.phrase_response(&normalized) {
                return response;
            }
        }
        for (phrase, response) in &self.knowledge.phrases {
            if normalized == *phrase {
                return response;
            }
        }

        for condition in self.knowledge.conditions() {
            if let Some(keyword) = condition.matching_keyword(&normalized) {
                tracing::debug!(
                    "Matched '{}' keyword for condition '{}'",
                    keyword,
                    condition.name
                );
                return &condition.advisory_text;
            }
        }

        &self.knowledge.fallback
    }

    /// Answer one utterance inside a session, recording both turns.
    pub fn converse<'a>(&'a self, session: &mut ChatSession, utterance: &str) -> &'a str {
        session.push_user(utterance);
        let response = self.respond(utterance);
        session.push_bot(response);
        response
    }
}

impl Default for TriageResponder {
    fn default() -> Self {
        Self::new(SymptomKnowledgeBase::default())
    }
}
