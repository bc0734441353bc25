//! Row-wise provision classification.
//!
//! Every row is classified from its own base fields only, so batches can be
//! split, classified independently and concatenated.

use crate::{ClauseSignals, Provision, ProvisionConditions, ProvisionLabels};
use deontic_clauses::{DocumentStatement, Statement};
use deontic_lexicon::{AgentCategory, DeonticConfig, Lexicon};
use serde::{Deserialize, Serialize};

/// A statement with its agent category, signals, conditions and labels.
///
/// Serializes as one flat row: the statement's columns followed by the
/// derived ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedStatement {
    #[serde(flatten)]
    pub statement: Statement,
    pub subject_category: AgentCategory,
    #[serde(flatten)]
    pub signals: ClauseSignals,
    #[serde(flatten)]
    pub conditions: ProvisionConditions,
    #[serde(flatten)]
    pub labels: ProvisionLabels,
}

impl ClassifiedStatement {
    /// Recompute every derived column from the base statement.
    pub fn reclassify(&self, classifier: &ProvisionClassifier<'_>) -> ClassifiedStatement {
        classifier.classify_one(&self.statement)
    }

    /// All labels that hold; never collapsed to one.
    pub fn provisions(&self) -> Vec<Provision> {
        self.labels.provisions()
    }
}

/// A classified statement located within a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDocumentStatement {
    pub contract_id: String,
    pub sentence_index: usize,
    pub statement_index: usize,
    #[serde(flatten)]
    pub classified: ClassifiedStatement,
}

/// Applies the lexicon-driven provision rules.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionClassifier<'c> {
    lexicon: &'c Lexicon,
    negator: &'c str,
}

impl Default for ProvisionClassifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionClassifier<'static> {
    /// Classifier over the built-in Portuguese tables.
    pub fn new() -> Self {
        Self::with_config(DeonticConfig::builtin())
    }
}

impl<'c> ProvisionClassifier<'c> {
    pub fn with_config(config: &'c DeonticConfig) -> Self {
        Self {
            lexicon: &config.lexicon,
            negator: &config.grammar.negator,
        }
    }

    pub fn classify_one(&self, statement: &Statement) -> ClassifiedStatement {
        let signals = ClauseSignals::read(self.lexicon, self.negator, statement);
        let conditions = ProvisionConditions::evaluate(statement, &signals);
        ClassifiedStatement {
            statement: statement.clone(),
            subject_category: self.lexicon.agent_category(&statement.subject_lemma),
            signals,
            conditions,
            labels: ProvisionLabels::from_conditions(&conditions),
        }
    }

    /// Classify a batch, preserving row order.
    pub fn classify(&self, statements: &[Statement]) -> Vec<ClassifiedStatement> {
        let classified: Vec<_> = statements.iter().map(|s| self.classify_one(s)).collect();
        log::debug!(
            "classified {} statements, {} without a provision",
            classified.len(),
            classified
                .iter()
                .filter(|c| c.labels.other_provision)
                .count()
        );
        classified
    }

    pub fn classify_document(&self, statements: &[DocumentStatement]) -> Vec<ClassifiedDocumentStatement> {
        statements
            .iter()
            .map(|located| ClassifiedDocumentStatement {
                contract_id: located.contract_id.clone(),
                sentence_index: located.sentence_index,
                statement_index: located.statement_index,
                classified: self.classify_one(&located.statement),
            })
            .collect()
    }

    /// Recompute a classified batch from its base statements.
    pub fn reclassify(&self, rows: &[ClassifiedStatement]) -> Vec<ClassifiedStatement> {
        rows.iter().map(|row| row.reclassify(self)).collect()
    }
}

/// Classify with the built-in tables.
pub fn classify(statements: &[Statement]) -> Vec<ClassifiedStatement> {
    ProvisionClassifier::new().classify(statements)
}
