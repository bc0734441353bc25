//! Extraction tables: which relations, tags, lemmas and suffixes the clause
//! extractor recognizes.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Dependency-relation labels the child cascade dispatches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relations {
    /// Open clausal complement ("deve *cumprir*")
    pub open_complement: String,
    /// Copula ("*é* responsável")
    pub copula: String,
    /// Expletive, used for the reflexive clitic
    pub expletive: String,
    /// Prefix shared by all auxiliary relations (`aux`, `aux:pass`)
    pub auxiliary_prefix: String,
    /// The plain auxiliary relation
    pub auxiliary: String,
}

/// Coarse part-of-speech tags the extractor checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    pub verb: String,
    pub subordinating_conjunction: String,
}

/// Closed lemma classes and morphological markers for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Relations that mark a token as a clause subject.
    pub subject_dependencies: BTreeSet<String>,
    /// The passive nominal subject relation; its subjects are always passive.
    pub passive_subject_dependency: String,
    pub relations: Relations,
    pub tags: Tags,
    /// Forms of "to be" (inflected forms guard against lemmatizer slips).
    pub copula_lemmas: BTreeSet<String>,
    pub modal_verb_lemmas: BTreeSet<String>,
    /// Auxiliaries adopted as helping verbs when nothing else was found.
    pub auxiliary_verb_lemmas: BTreeSet<String>,
    /// The lexical negator, lowercased.
    pub negator: String,
    /// Subjects with this lemma head no autonomous clause.
    pub relative_pronoun: String,
    /// Lemma of the reflexive clitic; also the helping-verb lemma it yields.
    pub reflexive_clitic: String,
    /// Marker of a clitic attached to the verb form ("compromete*-se*").
    pub reflexive_marker: String,
    /// "to have", as in the "have to" periphrasis.
    pub have_lemma: String,
    /// Complementizer of the "have to" periphrasis.
    pub complementizer: String,
    /// Modal lemma synthesized for the "have to" periphrasis.
    pub have_to_lemma: String,
    /// Modal lemma synthesized for the periphrastic future.
    pub future_modal_lemma: String,
    /// "to guarantee"; with `have_lemma` as helping verb the clause is passive.
    pub guarantee_lemma: String,
    /// Gerund ending; progressive copula clauses are not passive.
    pub gerund_suffix: String,
    /// Third-person future endings.
    pub future_suffixes: Vec<String>,
    /// Contracted reflexive-future endings ("pagar*-se-á*").
    pub reflexive_future_suffixes: Vec<String>,
    /// Irregular future stems and their infinitives ("far" → "fazer").
    #[serde(default)]
    pub irregular_future_stems: BTreeMap<String, String>,
}

impl Grammar {
    pub fn is_subject_dependency(&self, dep: &str) -> bool {
        self.subject_dependencies.contains(dep)
    }

    pub fn is_passive_subject(&self, dep: &str) -> bool {
        dep == self.passive_subject_dependency
    }

    pub fn is_copula(&self, lemma: &str) -> bool {
        self.copula_lemmas.contains(lemma)
    }

    pub fn is_modal_verb(&self, lemma: &str) -> bool {
        self.modal_verb_lemmas.contains(lemma)
    }

    pub fn is_auxiliary_verb(&self, lemma: &str) -> bool {
        self.auxiliary_verb_lemmas.contains(lemma)
    }

    pub fn is_auxiliary_relation(&self, dep: &str) -> bool {
        dep.starts_with(&self.relations.auxiliary_prefix)
    }

    pub fn is_negator(&self, text: &str) -> bool {
        text.to_lowercase() == self.negator
    }

    pub fn has_future_suffix(&self, text: &str) -> bool {
        self.future_suffixes.iter().any(|s| text.ends_with(s.as_str()))
    }

    /// The reflexive-future suffix `text` ends with, if any.
    pub fn reflexive_future_suffix(&self, text: &str) -> Option<&str> {
        self.reflexive_future_suffixes
            .iter()
            .map(String::as_str)
            .find(|s| text.ends_with(s))
    }

    /// Infinitive for an irregular future stem, if the stem is irregular.
    pub fn irregular_infinitive(&self, stem: &str) -> Option<&str> {
        self.irregular_future_stems.get(stem).map(String::as_str)
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        let required: [(&'static str, bool); 6] = [
            ("subject_dependencies", self.subject_dependencies.is_empty()),
            ("copula_lemmas", self.copula_lemmas.is_empty()),
            ("modal_verb_lemmas", self.modal_verb_lemmas.is_empty()),
            ("auxiliary_verb_lemmas", self.auxiliary_verb_lemmas.is_empty()),
            ("negator", self.negator.is_empty()),
            ("reflexive_marker", self.reflexive_marker.is_empty()),
        ];
        if let Some((name, _)) = required.iter().find(|(_, empty)| *empty) {
            return Err(ConfigError::EmptyTable(name));
        }

        if !self.is_subject_dependency(&self.passive_subject_dependency) {
            return Err(ConfigError::PassiveSubjectNotSubject(
                self.passive_subject_dependency.clone(),
            ));
        }

        Ok(())
    }
}
