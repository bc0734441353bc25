//! Classification tables: strict modals, voice-qualified verb lexicons and
//! the agent lexicon.

use crate::{AgentCategory, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Grammatical voice of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub fn from_passive(is_passive: bool) -> Self {
        if is_passive {
            Voice::Passive
        } else {
            Voice::Active
        }
    }
}

/// Verb lemmas that signal a category only under the listed voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicedLemmas {
    #[serde(default)]
    pub active: BTreeSet<String>,
    #[serde(default)]
    pub passive: BTreeSet<String>,
}

impl VoicedLemmas {
    pub fn contains(&self, lemma: &str, voice: Voice) -> bool {
        match voice {
            Voice::Active => self.active.contains(lemma),
            Voice::Passive => self.passive.contains(lemma),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.passive.is_empty()
    }
}

/// The five main verb categories plus the adverse-outcome (`negative`) lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbLexicons {
    pub obligation: VoicedLemmas,
    pub constraint: VoicedLemmas,
    pub permission: VoicedLemmas,
    pub entitlement: VoicedLemmas,
    pub promise: VoicedLemmas,
    pub negative: VoicedLemmas,
}

/// Subject lemmas per agent category, as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTables {
    #[serde(default)]
    pub worker: Vec<String>,
    #[serde(default)]
    pub firm: Vec<String>,
    #[serde(default)]
    pub union: Vec<String>,
    #[serde(default)]
    pub manager: Vec<String>,
}

impl AgentTables {
    fn entries(&self) -> impl Iterator<Item = (AgentCategory, &String)> {
        let tables = [&self.worker, &self.firm, &self.union, &self.manager];
        AgentCategory::KNOWN
            .into_iter()
            .zip(tables)
            .flat_map(|(category, lemmas)| lemmas.iter().map(move |lemma| (category, lemma)))
    }
}

/// Serialized form of a [`Lexicon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconTables {
    pub strict_modal_lemmas: BTreeSet<String>,
    pub verbs: VerbLexicons,
    pub agents: AgentTables,
}

/// Validated classification tables with an agent lookup index.
#[derive(Debug, Clone)]
pub struct Lexicon {
    tables: LexiconTables,
    agent_index: HashMap<String, AgentCategory>,
}

impl Lexicon {
    /// Validate tables and build the agent index.
    pub fn from_tables(tables: LexiconTables) -> ConfigResult<Self> {
        if tables.strict_modal_lemmas.is_empty() {
            return Err(ConfigError::EmptyTable("strict_modal_lemmas"));
        }

        let verbs = &tables.verbs;
        let categories: [(&'static str, &VoicedLemmas); 6] = [
            ("verbs.obligation", &verbs.obligation),
            ("verbs.constraint", &verbs.constraint),
            ("verbs.permission", &verbs.permission),
            ("verbs.entitlement", &verbs.entitlement),
            ("verbs.promise", &verbs.promise),
            ("verbs.negative", &verbs.negative),
        ];
        if let Some((name, _)) = categories.iter().find(|(_, lemmas)| lemmas.is_empty()) {
            return Err(ConfigError::EmptyTable(name));
        }

        let mut agent_index = HashMap::new();
        for (category, lemma) in tables.agents.entries() {
            let lemma = lemma.to_lowercase();
            match agent_index.get(&lemma) {
                Some(&first) if first != category => {
                    return Err(ConfigError::ConflictingAgent {
                        lemma,
                        first,
                        second: category,
                    })
                }
                Some(_) => {}
                None => {
                    agent_index.insert(lemma, category);
                }
            }
        }
        if agent_index.is_empty() {
            return Err(ConfigError::EmptyTable("agents"));
        }

        Ok(Self {
            tables,
            agent_index,
        })
    }

    pub fn tables(&self) -> &LexiconTables {
        &self.tables
    }

    pub fn verbs(&self) -> &VerbLexicons {
        &self.tables.verbs
    }

    pub fn is_strict_modal(&self, modal_lemma: &str) -> bool {
        self.tables.strict_modal_lemmas.contains(modal_lemma)
    }

    /// Agent category of a subject lemma; unknown lemmas are [`AgentCategory::Other`].
    pub fn agent_category(&self, subject_lemma: &str) -> AgentCategory {
        self.agent_index
            .get(subject_lemma)
            .or_else(|| self.agent_index.get(&subject_lemma.to_lowercase()))
            .copied()
            .unwrap_or(AgentCategory::Other)
    }
}
