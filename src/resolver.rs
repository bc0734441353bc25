//! Seams between the analysis crates and the external parser.

use crate::{Document, ParseError, Sentence};
use thiserror::Error;

/// A plug-in that derives attributes from one parsed sentence.
///
/// Resolvers hold only configuration; each call is independent, so
/// sentences can be processed in any order or in parallel.
pub trait SentenceResolver {
    type Attr;

    fn go(&self, sentence: &Sentence) -> Vec<Self::Attr>;
}

/// The external dependency parser: raw text in, segmented trees out.
pub trait DependencyParser {
    fn parse(&self, text: &str) -> Result<Document, ParseError>;
}

/// Failure to recover a lemma for a bare stem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("could not lemmatize {stem:?}: {reason}")]
pub struct LemmatizeError {
    pub stem: String,
    pub reason: String,
}

impl LemmatizeError {
    pub fn new(stem: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            reason: reason.into(),
        }
    }
}

/// Maps a word stem to its lemma.
pub trait Lemmatizer {
    fn lemmatize(&self, stem: &str) -> Result<String, LemmatizeError>;
}

impl<F> Lemmatizer for F
where
    F: Fn(&str) -> Result<String, LemmatizeError>,
{
    fn lemmatize(&self, stem: &str) -> Result<String, LemmatizeError> {
        self(stem)
    }
}

/// Lemmatizes by parsing the bare stem and reading the first token's lemma.
pub struct ParserLemmatizer<'p, P: ?Sized> {
    parser: &'p P,
}

impl<'p, P: DependencyParser + ?Sized> ParserLemmatizer<'p, P> {
    pub fn new(parser: &'p P) -> Self {
        Self { parser }
    }
}

impl<'p, P: DependencyParser + ?Sized> Lemmatizer for ParserLemmatizer<'p, P> {
    fn lemmatize(&self, stem: &str) -> Result<String, LemmatizeError> {
        let doc = self
            .parser
            .parse(stem)
            .map_err(|e| LemmatizeError::new(stem, e.to_string()))?;
        doc.sentences
            .iter()
            .find_map(|sentence| sentence.tokens().first())
            .map(|token| token.lemma.to_lowercase())
            .ok_or_else(|| LemmatizeError::new(stem, "parser returned no tokens"))
    }
}
