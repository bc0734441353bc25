//! Dependency-parse model for deontic analysis of labor contracts.
//!
//! The parser that produces these trees is an external collaborator. This
//! crate only defines the shape of its output and the seams through which
//! the rest of the workspace talks to it:
//!
//! - [`Sentence`] / [`Token`] / [`TokenRef`] - a read-only dependency tree
//! - [`Document`] - a segmented sequence of sentences
//! - [`DependencyParser`] - raw text in, [`Document`] out
//! - [`Lemmatizer`] - stem in, lemma out (used for morphological recovery)
//! - [`SentenceResolver`] - a plug-in that produces attributes for one sentence
//! - [`conllu`] - reader for the CoNLL-U export most parsers support
//! - [`SentenceDisplay`] - column-aligned rendering used by snapshot tests
//!
//! ## Example
//!
//! ```
//! use deontic_nlp::conllu;
//!
//! let doc = conllu::parse_document(
//!     "1\tOs\to\tDET\t_\t_\t2\tdet\t_\t_\n\
//!      2\tempregados\tempregado\tNOUN\t_\t_\t3\tnsubj\t_\t_\n\
//!      3\ttrabalham\ttrabalhar\tVERB\t_\t_\t0\troot\t_\t_\n",
//! )
//! .unwrap();
//! let sentence = &doc.sentences[0];
//! let subject = sentence.token(1);
//! assert_eq!(subject.head().lemma(), "trabalhar");
//! ```

pub mod conllu;
mod resolver;
mod sentence;

pub use resolver::{
    DependencyParser, LemmatizeError, Lemmatizer, ParserLemmatizer, SentenceResolver,
};
pub use sentence::{Document, ParseError, Sentence, SentenceDisplay, Token, TokenRef};
