//! Resolution of a clause's predicate from the subject's head.
//!
//! The head's children are scanned in document order. For each child the
//! rules below are tried in priority order and the first rule whose trigger
//! matches decides that child: either it resolves the predicate and the scan
//! stops, or its guard rejects the child and the scan moves to the next child
//! without trying lower-priority rules. Rule order is part of the behaviour.

use deontic_lexicon::Grammar;
use deontic_nlp::TokenRef;

/// The cascade rule that resolved a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeBranch {
    /// Modal head with an open complement: "deve *cumprir*"
    ModalComplement,
    /// "to be" head with a verbal open complement: "está *obrigado*"
    CopulaComplement,
    /// Auxiliary "to be" child: "*são* concedidas"
    CopularAuxiliary,
    /// Reflexive clitic as expletive: "paga-*se*"
    ReflexiveExpletive,
    /// Copula child becomes the predicate: "*é* responsável"
    Copula,
}

/// Predicate roles read off the dependency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate<'s> {
    pub verb: TokenRef<'s>,
    pub modal: Option<TokenRef<'s>>,
    pub helping_verb: Option<TokenRef<'s>>,
}

impl<'s> Predicate<'s> {
    fn bare(verb: TokenRef<'s>) -> Self {
        Self {
            verb,
            modal: None,
            helping_verb: None,
        }
    }
}

struct CascadeRule {
    branch: CascadeBranch,
    /// Does this rule own the child?
    triggers: fn(&Grammar, TokenRef<'_>, TokenRef<'_>) -> bool,
    /// `None` when a guard rejects the child.
    resolve: for<'s> fn(&Grammar, TokenRef<'s>, TokenRef<'s>) -> Option<Predicate<'s>>,
}

const CASCADE: [CascadeRule; 5] = [
    CascadeRule {
        branch: CascadeBranch::ModalComplement,
        triggers: |g, head, child| {
            child.dep() == g.relations.open_complement && g.is_modal_verb(&head.lemma_lower())
        },
        resolve: modal_complement,
    },
    CascadeRule {
        branch: CascadeBranch::CopulaComplement,
        triggers: |g, head, child| {
            child.dep() == g.relations.open_complement
                && child.tag() == g.tags.verb
                && g.is_copula(&head.lemma_lower())
        },
        resolve: copula_complement,
    },
    CascadeRule {
        branch: CascadeBranch::CopularAuxiliary,
        triggers: |g, _, child| {
            g.is_auxiliary_relation(child.dep()) && g.is_copula(&child.lemma_lower())
        },
        resolve: copular_auxiliary,
    },
    CascadeRule {
        branch: CascadeBranch::ReflexiveExpletive,
        triggers: |g, _, child| {
            child.dep() == g.relations.expletive && child.lemma_lower() == g.reflexive_clitic
        },
        resolve: reflexive_expletive,
    },
    CascadeRule {
        branch: CascadeBranch::Copula,
        triggers: |g, _, child| child.dep() == g.relations.copula,
        resolve: copula,
    },
];

/// Resolve the predicate governed by `head`, the subject's head token.
///
/// Returns the bare head as verb when no rule resolves.
pub fn resolve_predicate<'s>(
    grammar: &Grammar,
    head: TokenRef<'s>,
) -> (Predicate<'s>, Option<CascadeBranch>) {
    'children: for child in head.children() {
        for rule in CASCADE.iter() {
            if !(rule.triggers)(grammar, head, child) {
                continue;
            }
            match (rule.resolve)(grammar, head, child) {
                Some(predicate) => return (predicate, Some(rule.branch)),
                None => continue 'children,
            }
        }
    }

    (Predicate::bare(head), None)
}

/// Guard against descending into an unrelated subordinate clause.
fn has_subordinator(grammar: &Grammar, token: TokenRef<'_>) -> bool {
    token
        .children()
        .any(|t| t.tag() == grammar.tags.subordinating_conjunction)
}

fn modal_complement<'s>(
    grammar: &Grammar,
    head: TokenRef<'s>,
    child: TokenRef<'s>,
) -> Option<Predicate<'s>> {
    // last auxiliary or copula of the complement wins
    let helping_verb = child
        .children()
        .filter(|t| grammar.is_auxiliary_relation(t.dep()) || t.dep() == grammar.relations.copula)
        .last();
    Some(Predicate {
        verb: child,
        modal: Some(head),
        helping_verb,
    })
}

fn copula_complement<'s>(
    grammar: &Grammar,
    head: TokenRef<'s>,
    child: TokenRef<'s>,
) -> Option<Predicate<'s>> {
    if has_subordinator(grammar, child) {
        return None;
    }
    Some(Predicate {
        verb: child,
        modal: None,
        helping_verb: Some(head),
    })
}

fn copular_auxiliary<'s>(
    grammar: &Grammar,
    head: TokenRef<'s>,
    child: TokenRef<'s>,
) -> Option<Predicate<'s>> {
    if has_subordinator(grammar, child) {
        return None;
    }
    Some(Predicate {
        verb: head,
        modal: None,
        helping_verb: Some(child),
    })
}

fn reflexive_expletive<'s>(
    _grammar: &Grammar,
    head: TokenRef<'s>,
    child: TokenRef<'s>,
) -> Option<Predicate<'s>> {
    Some(Predicate {
        verb: head,
        modal: None,
        helping_verb: Some(child),
    })
}

fn copula<'s>(
    _grammar: &Grammar,
    _head: TokenRef<'s>,
    child: TokenRef<'s>,
) -> Option<Predicate<'s>> {
    Some(Predicate::bare(child))
}
