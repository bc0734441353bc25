use crate::{
    morphology, resolve_predicate, DocumentStatement, Predicate, SkipRelativePronouns, Statement,
    SubjectStrategy,
};
use deontic_lexicon::{DeonticConfig, Grammar};
use deontic_nlp::{Document, LemmatizeError, Lemmatizer, Sentence, SentenceResolver, TokenRef};

/// Sentences with fewer whitespace-separated words carry no clause.
pub const MIN_SURFACE_TOKENS: usize = 3;

/// Finds every subject-governed clause in a sentence.
///
/// ```
/// # use deontic_clauses::StatementExtractor;
/// # use deontic_nlp::{LemmatizeError, Sentence, Token};
/// let sentence = Sentence::new(vec![
///     Token::new("A", "a", "DET", "det", 1),
///     Token::new("empresa", "empresa", "NOUN", "nsubj", 2),
///     Token::new("fornecerá", "fornecer", "VERB", "root", 2),
///     Token::new("uniformes", "uniforme", "NOUN", "obj", 2),
/// ])
/// .unwrap();
///
/// let extractor = StatementExtractor::new(|stem: &str| -> Result<String, LemmatizeError> {
///     Err(LemmatizeError::new(stem, "offline"))
/// });
/// let statement = &extractor.extract(&sentence)[0];
/// assert_eq!(statement.subject_lemma, "empresa");
/// // the synthetic future counts as a modal
/// assert_eq!(statement.modal_lemma, "ir");
/// assert!(statement.has_modal);
/// ```
pub struct StatementExtractor<'c, L, S = SkipRelativePronouns> {
    grammar: &'c Grammar,
    lemmatizer: L,
    subjects: S,
}

impl<L: Lemmatizer> StatementExtractor<'static, L> {
    /// Extractor over the built-in Portuguese grammar.
    pub fn new(lemmatizer: L) -> Self {
        Self {
            grammar: &DeonticConfig::builtin().grammar,
            lemmatizer,
            subjects: SkipRelativePronouns,
        }
    }
}

impl<'c, L: Lemmatizer, S: SubjectStrategy> StatementExtractor<'c, L, S> {
    pub fn with_grammar<'g>(self, grammar: &'g Grammar) -> StatementExtractor<'g, L, S> {
        StatementExtractor {
            grammar,
            lemmatizer: self.lemmatizer,
            subjects: self.subjects,
        }
    }

    pub fn with_subject_strategy<T: SubjectStrategy>(self, subjects: T) -> StatementExtractor<'c, L, T> {
        StatementExtractor {
            grammar: self.grammar,
            lemmatizer: self.lemmatizer,
            subjects,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        self.grammar
    }

    /// Statements in subject order.
    ///
    /// A clause whose stem cannot be re-lemmatized is dropped and the rest of
    /// the sentence is still processed.
    pub fn extract(&self, sentence: &Sentence) -> Vec<Statement> {
        let words = sentence.surface_token_count();
        if words < MIN_SURFACE_TOKENS {
            log::trace!("skipping {:?}: {} words", sentence.text(), words);
            return Vec::new();
        }

        let grammar = self.grammar;
        let mut statements = Vec::new();
        for subject in sentence
            .iter()
            .filter(|t| grammar.is_subject_dependency(t.dep()))
        {
            let mention = match self.subjects.resolve(grammar, subject) {
                Some(mention) => mention,
                None => {
                    log::trace!("subject {:?} heads no clause", subject);
                    continue;
                }
            };

            match self.extract_clause(subject, mention) {
                Ok(statement) => statements.push(statement),
                Err(err) => log::warn!(
                    "dropping clause of {:?} in {:?}: {}",
                    subject.text(),
                    sentence.text(),
                    err
                ),
            }
        }
        statements
    }

    /// Statements of every sentence, located by contract and position.
    pub fn extract_document(&self, document: &Document, contract_id: &str) -> Vec<DocumentStatement> {
        let mut located = Vec::new();
        for (sentence_index, sentence) in document.sentences.iter().enumerate() {
            located.extend(self.extract(sentence).into_iter().enumerate().map(
                |(statement_index, statement)| DocumentStatement {
                    contract_id: contract_id.to_string(),
                    sentence_index,
                    statement_index,
                    statement,
                },
            ));
        }
        log::debug!(
            "{}: {} statements from {} sentences",
            contract_id,
            located.len(),
            document.sentences.len()
        );
        located
    }

    fn extract_clause<'s>(
        &self,
        subject: TokenRef<'s>,
        mention: TokenRef<'s>,
    ) -> Result<Statement, LemmatizeError> {
        let (predicate, branch) = resolve_predicate(self.grammar, subject.head());
        log::trace!("{:?} -> {:?} via {:?}", subject, predicate.verb, branch);

        let mut draft = Draft::new(subject, mention, predicate);
        morphology::recover(self.grammar, &self.lemmatizer, &mut draft)?;
        Ok(draft.finish(self.grammar))
    }
}

impl<'c, L: Lemmatizer, S: SubjectStrategy> SentenceResolver for StatementExtractor<'c, L, S> {
    type Attr = Statement;

    fn go(&self, sentence: &Sentence) -> Vec<Statement> {
        self.extract(sentence)
    }
}

/// Extract with the built-in grammar and the default subject strategy.
pub fn extract_statements<L: Lemmatizer>(sentence: &Sentence, lemmatizer: L) -> Vec<Statement> {
    StatementExtractor::new(lemmatizer).extract(sentence)
}

/// A statement under construction.
///
/// Text and lemma slots start from the resolved predicate's tokens;
/// morphological recovery may fill or overwrite them without a token.
pub(crate) struct Draft<'s> {
    subject: TokenRef<'s>,
    mention: TokenRef<'s>,
    pub(crate) verb: TokenRef<'s>,
    modal: Option<TokenRef<'s>>,
    helping_verb: Option<TokenRef<'s>>,
    pub(crate) verb_text: String,
    pub(crate) verb_lemma: String,
    pub(crate) modal_text: String,
    pub(crate) modal_lemma: String,
    pub(crate) helping_verb_text: String,
    pub(crate) helping_verb_lemma: String,
}

fn text_of(token: Option<TokenRef<'_>>) -> String {
    token.map(|t| t.text().to_string()).unwrap_or_default()
}

fn lemma_of(token: Option<TokenRef<'_>>) -> String {
    token.map(|t| t.lemma_lower()).unwrap_or_default()
}

impl<'s> Draft<'s> {
    pub(crate) fn new(subject: TokenRef<'s>, mention: TokenRef<'s>, predicate: Predicate<'s>) -> Self {
        Self {
            subject,
            mention,
            verb: predicate.verb,
            modal: predicate.modal,
            helping_verb: predicate.helping_verb,
            verb_text: predicate.verb.text().to_string(),
            verb_lemma: predicate.verb.lemma_lower(),
            modal_text: text_of(predicate.modal),
            modal_lemma: lemma_of(predicate.modal),
            helping_verb_text: text_of(predicate.helping_verb),
            helping_verb_lemma: lemma_of(predicate.helping_verb),
        }
    }

    pub(crate) fn set_helping_verb(&mut self, token: TokenRef<'s>) {
        self.helping_verb = Some(token);
        self.helping_verb_text = token.text().to_string();
        self.helping_verb_lemma = token.lemma_lower();
    }

    /// The negator below the verb or the helping verb, lowercased.
    fn negation(&self, grammar: &Grammar) -> String {
        self.verb
            .children()
            .chain(self.helping_verb.into_iter().flat_map(|hv| hv.children()))
            .find(|t| grammar.is_negator(t.text()))
            .map(|t| t.text().to_lowercase())
            .unwrap_or_default()
    }

    fn is_passive(&self, grammar: &Grammar) -> bool {
        let helping = self.helping_verb_lemma.as_str();
        grammar.is_passive_subject(self.subject.dep())
            || helping == grammar.reflexive_clitic
            || (grammar.is_copula(helping) && !self.verb_text.ends_with(&grammar.gerund_suffix))
            || (helping == grammar.have_lemma && self.verb_lemma == grammar.guarantee_lemma)
    }

    pub(crate) fn finish(self, grammar: &Grammar) -> Statement {
        let negation = self.negation(grammar);
        let is_passive = self.is_passive(grammar);
        let has_modal = !self.modal_lemma.is_empty();
        Statement {
            subject_text: self.mention.text().to_string(),
            subject_lemma: self.mention.lemma_lower(),
            negation,
            modal_text: self.modal_text,
            modal_lemma: self.modal_lemma,
            helping_verb_text: self.helping_verb_text,
            helping_verb_lemma: self.helping_verb_lemma,
            verb_text: self.verb_text,
            verb_lemma: self.verb_lemma,
            is_passive,
            has_modal,
            subject_index: self.subject.idx(),
            verb_index: self.verb.idx(),
            modal_index: self.modal.map(|t| t.idx()),
            helping_verb_index: self.helping_verb.map(|t| t.idx()),
        }
    }
}
