//! Choosing which subject tokens head a clause.

use deontic_lexicon::Grammar;
use deontic_nlp::TokenRef;

/// Decides, for a token attached by a subject relation, which token supplies
/// the clause subject's text and lemma, or that no clause is headed here.
///
/// The subject's relation and head are always read from the original token;
/// a strategy only substitutes the mention. A coreference-aware strategy can
/// return an antecedent from an earlier sentence.
pub trait SubjectStrategy {
    fn resolve<'s>(&self, grammar: &Grammar, subject: TokenRef<'s>) -> Option<TokenRef<'s>>;
}

/// Skips relative pronouns ("que"); every other subject stands for itself.
///
/// No antecedent search is attempted for the skipped pronouns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipRelativePronouns;

impl SubjectStrategy for SkipRelativePronouns {
    fn resolve<'s>(&self, grammar: &Grammar, subject: TokenRef<'s>) -> Option<TokenRef<'s>> {
        if subject.lemma_lower() == grammar.relative_pronoun {
            None
        } else {
            Some(subject)
        }
    }
}
