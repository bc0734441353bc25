use serde::{Deserialize, Serialize};

/// One subject-governed clause.
///
/// Field names are the row schema downstream consumers key on. Text fields
/// keep the surface form; lemma fields are lowercased. Absent elements are
/// empty strings. `has_modal` holds exactly when `modal_lemma` is non-empty,
/// and `is_passive` is fixed when the statement is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub subject_text: String,
    pub subject_lemma: String,
    /// The negator as found (lowercased), or empty.
    pub negation: String,
    pub modal_text: String,
    pub modal_lemma: String,
    pub helping_verb_text: String,
    pub helping_verb_lemma: String,
    pub verb_text: String,
    pub verb_lemma: String,
    pub is_passive: bool,
    pub has_modal: bool,
    /// Position of the subject token within its sentence.
    #[serde(default)]
    pub subject_index: usize,
    /// Position of the predicate's verb token.
    #[serde(default)]
    pub verb_index: usize,
    /// Position of the modal token; `None` when there is none or it was synthesized.
    #[serde(default)]
    pub modal_index: Option<usize>,
    /// Position of the helping-verb token; `None` when there is none or it was synthesized.
    #[serde(default)]
    pub helping_verb_index: Option<usize>,
}

impl Statement {
    /// Whether `negation` holds the given negator, ignoring case.
    pub fn is_negated_by(&self, negator: &str) -> bool {
        !self.negation.is_empty() && self.negation.to_lowercase() == negator.to_lowercase()
    }
}

/// A statement located within a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatement {
    pub contract_id: String,
    /// Sentence position within the document.
    pub sentence_index: usize,
    /// Statement position within its sentence (subject encounter order).
    pub statement_index: usize,
    #[serde(flatten)]
    pub statement: Statement,
}
