//! Clause signals and the provision rules over them.
//!
//! Each rule is kept as its own named condition so downstream consumers can
//! see which disjunct fired. The expressions are empirically tuned; their
//! exact boolean shape is the behaviour.

use crate::VerbFlags;
use deontic_clauses::Statement;
use deontic_lexicon::{Lexicon, Voice};
use serde::{Deserialize, Serialize};

/// What the rules read from a statement beyond its own fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSignals {
    /// `negation` holds the lexical negator, ignoring case.
    pub negated: bool,
    pub strict_modal: bool,
    pub permissive_modal: bool,
    #[serde(flatten)]
    pub verbs: VerbFlags,
    /// Any of the five main verb categories.
    pub special_verb: bool,
    /// Active voice and no special verb.
    pub active_verb: bool,
}

impl ClauseSignals {
    pub fn read(lexicon: &Lexicon, negator: &str, statement: &Statement) -> Self {
        let strict_modal = statement.has_modal && lexicon.is_strict_modal(&statement.modal_lemma);
        let verbs = VerbFlags::read(
            lexicon,
            &statement.verb_lemma,
            Voice::from_passive(statement.is_passive),
        );
        let special_verb = verbs.special();

        Self {
            negated: statement.is_negated_by(negator),
            strict_modal,
            permissive_modal: statement.has_modal && !strict_modal,
            verbs,
            special_verb,
            active_verb: !statement.is_passive && !special_verb,
        }
    }
}

/// The named disjuncts of the four provision labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionConditions {
    pub obligation_1: bool,
    pub obligation_2: bool,
    pub constraint_1: bool,
    pub constraint_2: bool,
    pub constraint_3: bool,
    pub permission_1: bool,
    pub permission_2: bool,
    pub permission_3: bool,
    pub entitlement_1: bool,
    pub entitlement_2: bool,
    pub entitlement_3: bool,
}

impl ProvisionConditions {
    pub fn evaluate(statement: &Statement, signals: &ClauseSignals) -> Self {
        let neg = signals.negated;
        let has_modal = statement.has_modal;
        let passive = statement.is_passive;
        let strict = signals.strict_modal;
        let permissive = signals.permissive_modal;
        let special = signals.special_verb;
        let v = &signals.verbs;

        Self {
            obligation_1: !neg && strict && signals.active_verb,
            obligation_2: !neg && !permissive && (v.obligation_verb || v.promise_verb),

            constraint_1: neg
                && has_modal
                && !v.obligation_verb
                && !v.negative_verb
                && !v.constraint_verb,
            constraint_2: !neg && strict && v.constraint_verb,
            constraint_3: neg && v.permission_verb,

            permission_1: !neg && permissive && !special,
            permission_2: !neg && v.permission_verb,
            permission_3: neg && v.constraint_verb,

            entitlement_1: !neg && v.entitlement_verb,
            entitlement_2: !neg && strict && passive && !special && !v.negative_verb,
            entitlement_3: neg && (v.obligation_verb || v.negative_verb),
        }
    }

    pub fn obligation(&self) -> bool {
        self.obligation_1 || self.obligation_2
    }

    pub fn constraint(&self) -> bool {
        self.constraint_1 || self.constraint_2 || self.constraint_3
    }

    pub fn permission(&self) -> bool {
        self.permission_1 || self.permission_2 || self.permission_3
    }

    pub fn entitlement(&self) -> bool {
        self.entitlement_1 || self.entitlement_2 || self.entitlement_3
    }
}
