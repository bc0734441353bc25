//! Read-only dependency trees as produced by an external parser.
//!
//! Token identity is positional: a [`TokenRef`] is a sentence plus an index,
//! and heads are stored as indices into the same sentence.

mod display;

pub use display::SentenceDisplay;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while building or reading parser output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token points at a head outside its sentence.
    #[error("token {token} has head {head}, but the sentence only has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    /// A line of parser output could not be read.
    #[error("malformed parser output at line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// The parser itself failed.
    #[error("parser failed: {0}")]
    Parser(String),
}

/// One token of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form.
    pub text: String,
    /// Lemma as reported by the parser (case not normalized).
    pub lemma: String,
    /// Coarse part-of-speech tag (`VERB`, `SCONJ`, ...).
    pub tag: String,
    /// Dependency relation to the head (`nsubj`, `xcomp`, ...).
    pub dep: String,
    /// Index of the head token; the root is its own head.
    pub head: usize,
    /// Whether a space follows this token in the original text.
    #[serde(default = "default_space_after")]
    pub space_after: bool,
}

fn default_space_after() -> bool {
    true
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
        dep: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            tag: tag.into(),
            dep: dep.into(),
            head,
            space_after: true,
        }
    }
}

/// A dependency-parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SentenceParts", into = "SentenceParts")]
pub struct Sentence {
    tokens: Vec<Token>,
    /// `children[i]` lists the dependents of token `i` in document order.
    children: Vec<Vec<usize>>,
    metadata: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize)]
struct SentenceParts {
    tokens: Vec<Token>,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

impl TryFrom<SentenceParts> for Sentence {
    type Error = ParseError;

    fn try_from(parts: SentenceParts) -> Result<Self, Self::Error> {
        Ok(Sentence::new(parts.tokens)?.with_metadata(parts.metadata))
    }
}

impl From<Sentence> for SentenceParts {
    fn from(sentence: Sentence) -> Self {
        SentenceParts {
            tokens: sentence.tokens,
            metadata: sentence.metadata,
        }
    }
}

impl Sentence {
    /// Build a sentence, indexing children. Fails if any head is out of range.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        let len = tokens.len();
        let mut children = vec![Vec::new(); len];
        for (idx, token) in tokens.iter().enumerate() {
            if token.head >= len {
                return Err(ParseError::HeadOutOfRange {
                    token: idx,
                    head: token.head,
                    len,
                });
            }
            if token.head != idx {
                children[token.head].push(idx);
            }
        }

        Ok(Self {
            tokens,
            children,
            metadata: BTreeMap::new(),
        })
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Comment metadata carried over from the parser (`text`, `sent_id`, ...).
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Cursor for the token at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn token(&self, idx: usize) -> TokenRef<'_> {
        assert!(idx < self.tokens.len(), "token index {} out of range", idx);
        TokenRef {
            sentence: self,
            idx,
        }
    }

    /// Tokens in document order.
    pub fn iter(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        (0..self.tokens.len()).map(move |idx| TokenRef {
            sentence: self,
            idx,
        })
    }

    /// Surface text, honouring `space_after`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            out.push_str(&token.text);
            if token.space_after && idx + 1 < self.tokens.len() {
                out.push(' ');
            }
        }
        out
    }

    /// Number of whitespace-separated words in the surface text.
    pub fn surface_token_count(&self) -> usize {
        self.text().split_whitespace().count()
    }

    /// Run a resolver over this sentence.
    pub fn run<R: crate::SentenceResolver>(&self, resolver: &R) -> Vec<R::Attr> {
        resolver.go(self)
    }
}

/// A borrowed token within its sentence.
#[derive(Clone, Copy)]
pub struct TokenRef<'s> {
    sentence: &'s Sentence,
    idx: usize,
}

impl<'s> TokenRef<'s> {
    /// Position within the sentence.
    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn sentence(&self) -> &'s Sentence {
        self.sentence
    }

    fn data(&self) -> &'s Token {
        &self.sentence.tokens[self.idx]
    }

    pub fn text(&self) -> &'s str {
        &self.data().text
    }

    pub fn lemma(&self) -> &'s str {
        &self.data().lemma
    }

    pub fn lemma_lower(&self) -> String {
        self.data().lemma.to_lowercase()
    }

    pub fn tag(&self) -> &'s str {
        &self.data().tag
    }

    pub fn dep(&self) -> &'s str {
        &self.data().dep
    }

    pub fn head(&self) -> TokenRef<'s> {
        TokenRef {
            sentence: self.sentence,
            idx: self.data().head,
        }
    }

    pub fn is_root(&self) -> bool {
        self.data().head == self.idx
    }

    /// Direct dependents in document order.
    pub fn children(&self) -> impl Iterator<Item = TokenRef<'s>> + 's {
        let sentence = self.sentence;
        sentence.children[self.idx]
            .iter()
            .map(move |&idx| TokenRef { sentence, idx })
    }
}

impl PartialEq for TokenRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sentence, other.sentence) && self.idx == other.idx
    }
}

impl Eq for TokenRef<'_> {}

impl std::fmt::Debug for TokenRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}({})", self.text(), self.idx, self.dep())
    }
}

/// Sentence segmentation of one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}
