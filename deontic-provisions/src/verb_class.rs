//! Voice-qualified verb categories.

use deontic_lexicon::{Lexicon, VerbLexicons, Voice, VoicedLemmas};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbCategory {
    Obligation,
    Constraint,
    Permission,
    Entitlement,
    Promise,
    /// Adverse outcomes for the subject ("ser dispensado", "sofrer")
    Negative,
}

impl VerbCategory {
    pub const ALL: [VerbCategory; 6] = [
        VerbCategory::Obligation,
        VerbCategory::Constraint,
        VerbCategory::Permission,
        VerbCategory::Entitlement,
        VerbCategory::Promise,
        VerbCategory::Negative,
    ];

    /// Membership in any of these makes a verb special. `Negative` is not one.
    pub const SPECIAL: [VerbCategory; 5] = [
        VerbCategory::Obligation,
        VerbCategory::Constraint,
        VerbCategory::Permission,
        VerbCategory::Entitlement,
        VerbCategory::Promise,
    ];

    pub fn lemmas(self, verbs: &VerbLexicons) -> &VoicedLemmas {
        match self {
            Self::Obligation => &verbs.obligation,
            Self::Constraint => &verbs.constraint,
            Self::Permission => &verbs.permission,
            Self::Entitlement => &verbs.entitlement,
            Self::Promise => &verbs.promise,
            Self::Negative => &verbs.negative,
        }
    }

    /// A lemma signals the category only in the voice its entry lists.
    pub fn contains(self, lexicon: &Lexicon, verb_lemma: &str, voice: Voice) -> bool {
        self.lemmas(lexicon.verbs()).contains(verb_lemma, voice)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Obligation => "obligation",
            Self::Constraint => "constraint",
            Self::Permission => "permission",
            Self::Entitlement => "entitlement",
            Self::Promise => "promise",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for VerbCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flag per category. Several may hold for the same verb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbFlags {
    pub obligation_verb: bool,
    pub constraint_verb: bool,
    pub permission_verb: bool,
    pub entitlement_verb: bool,
    pub promise_verb: bool,
    pub negative_verb: bool,
}

impl VerbFlags {
    pub fn read(lexicon: &Lexicon, verb_lemma: &str, voice: Voice) -> Self {
        let mut flags = Self::default();
        for category in VerbCategory::ALL.iter() {
            if category.contains(lexicon, verb_lemma, voice) {
                *flags.flag_mut(*category) = true;
            }
        }
        flags
    }

    pub fn get(&self, category: VerbCategory) -> bool {
        match category {
            VerbCategory::Obligation => self.obligation_verb,
            VerbCategory::Constraint => self.constraint_verb,
            VerbCategory::Permission => self.permission_verb,
            VerbCategory::Entitlement => self.entitlement_verb,
            VerbCategory::Promise => self.promise_verb,
            VerbCategory::Negative => self.negative_verb,
        }
    }

    fn flag_mut(&mut self, category: VerbCategory) -> &mut bool {
        match category {
            VerbCategory::Obligation => &mut self.obligation_verb,
            VerbCategory::Constraint => &mut self.constraint_verb,
            VerbCategory::Permission => &mut self.permission_verb,
            VerbCategory::Entitlement => &mut self.entitlement_verb,
            VerbCategory::Promise => &mut self.promise_verb,
            VerbCategory::Negative => &mut self.negative_verb,
        }
    }

    pub fn special(&self) -> bool {
        VerbCategory::SPECIAL.iter().any(|c| self.get(*c))
    }

    /// Categories whose flag is set, in declaration order.
    pub fn categories(&self) -> Vec<VerbCategory> {
        VerbCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.get(*c))
            .collect()
    }
}
