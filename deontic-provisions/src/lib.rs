//! Provision classification of extracted clauses.
//!
//! Each [`Statement`](deontic_clauses::Statement) is labelled with its
//! subject's agent category and any of four provision types:
//!
//! - **obligation** - the subject must do something
//! - **constraint** - the subject must not do something
//! - **permission** - the subject may do something
//! - **entitlement** - the subject is owed something
//!
//! Labels are not exclusive. A clause with none of them is an
//! `other_provision`. The intermediate signals and rule disjuncts are kept on
//! every row so the result can be audited.
//!
//! ## Example
//!
//! ```
//! use deontic_clauses::StatementExtractor;
//! use deontic_lexicon::AgentCategory;
//! use deontic_nlp::{LemmatizeError, Sentence, Token};
//! use deontic_provisions::{classify, Provision};
//!
//! // O empregado deverá apresentar atestado
//! let sentence = Sentence::new(vec![
//!     Token::new("O", "o", "DET", "det", 1),
//!     Token::new("empregado", "empregado", "NOUN", "nsubj", 2),
//!     Token::new("deverá", "dever", "VERB", "root", 2),
//!     Token::new("apresentar", "apresentar", "VERB", "xcomp", 2),
//!     Token::new("atestado", "atestado", "NOUN", "obj", 3),
//! ])
//! .unwrap();
//!
//! let extractor = StatementExtractor::new(|stem: &str| -> Result<String, LemmatizeError> {
//!     Ok(stem.to_lowercase())
//! });
//! let rows = classify(&extractor.extract(&sentence));
//! assert_eq!(rows[0].subject_category, AgentCategory::Worker);
//! assert_eq!(rows[0].provisions(), vec![Provision::Obligation]);
//! ```

mod classifier;
mod conditions;
mod errors;
mod export;
mod provision;
mod verb_class;

pub use classifier::{classify, ClassifiedDocumentStatement, ClassifiedStatement, ProvisionClassifier};
pub use conditions::{ClauseSignals, ProvisionConditions};
pub use errors::ExportError;
pub use export::write_json_lines;
pub use provision::{Provision, ProvisionLabels};
pub use verb_class::{VerbCategory, VerbFlags};
