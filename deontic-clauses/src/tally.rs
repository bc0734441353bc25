//! Lemma frequencies across extracted statements.

use crate::Statement;
use std::collections::HashMap;

/// Counts of verb, modal and subject lemmas.
///
/// Statements without a modal are counted under the empty lemma so the modal
/// counts sum to the number of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaTally {
    statements: usize,
    verbs: HashMap<String, usize>,
    modals: HashMap<String, usize>,
    subjects: HashMap<String, usize>,
}

impl LemmaTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, statement: &Statement) {
        self.statements += 1;
        *self.verbs.entry(statement.verb_lemma.clone()).or_default() += 1;
        *self.modals.entry(statement.modal_lemma.clone()).or_default() += 1;
        *self.subjects.entry(statement.subject_lemma.clone()).or_default() += 1;
    }

    pub fn statements(&self) -> usize {
        self.statements
    }

    pub fn verbs(&self) -> Vec<(&str, usize)> {
        most_common(&self.verbs)
    }

    pub fn modals(&self) -> Vec<(&str, usize)> {
        most_common(&self.modals)
    }

    pub fn subjects(&self) -> Vec<(&str, usize)> {
        most_common(&self.subjects)
    }
}

/// Highest count first; equal counts in lemma order.
fn most_common(counts: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

impl<'a> Extend<&'a Statement> for LemmaTally {
    fn extend<I: IntoIterator<Item = &'a Statement>>(&mut self, iter: I) {
        for statement in iter {
            self.add(statement);
        }
    }
}

impl<'a> FromIterator<&'a Statement> for LemmaTally {
    fn from_iter<I: IntoIterator<Item = &'a Statement>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}
