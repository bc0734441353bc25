//! Clause extraction for deontic analysis.
//!
//! For every token attached to its head by a subject relation, the
//! [`StatementExtractor`] reconstructs the clause's logical predicate: the
//! main verb, any modal, helping verb or copula, the negator and the voice.
//! Portuguese morphology hides the true verb in several ways (reflexive
//! clitics, the "ter que" periphrasis, synthetic and mesoclitic futures), so
//! the extractor recovers those before emitting a [`Statement`].
//!
//! ## Example
//!
//! ```
//! use deontic_clauses::StatementExtractor;
//! use deontic_nlp::{conllu, LemmatizeError};
//!
//! let sentence = conllu::parse_sentence(
//!     "1\tOs\to\tDET\t_\t_\t2\tdet\t_\t_\n\
//!      2\tempregados\tempregado\tNOUN\t_\t_\t3\tnsubj\t_\t_\n\
//!      3\tdeverão\tdever\tVERB\t_\t_\t0\troot\t_\t_\n\
//!      4\tcumprir\tcumprir\tVERB\t_\t_\t3\txcomp\t_\t_\n\
//!      5\to\to\tDET\t_\t_\t6\tdet\t_\t_\n\
//!      6\thorário\thorário\tNOUN\t_\t_\t4\tobj\t_\t_\n",
//! )
//! .unwrap();
//!
//! let extractor = StatementExtractor::new(|stem: &str| -> Result<String, LemmatizeError> {
//!     Ok(stem.to_string())
//! });
//! let statements = extractor.extract(&sentence);
//! assert_eq!(statements[0].modal_lemma, "dever");
//! assert_eq!(statements[0].verb_lemma, "cumprir");
//! ```

mod cascade;
mod extractor;
mod morphology;
mod statement;
mod subject;
mod tally;

pub use cascade::{resolve_predicate, CascadeBranch, Predicate};
pub use extractor::{extract_statements, StatementExtractor, MIN_SURFACE_TOKENS};
pub use statement::{DocumentStatement, Statement};
pub use subject::{SkipRelativePronouns, SubjectStrategy};
pub use tally::LemmaTally;
