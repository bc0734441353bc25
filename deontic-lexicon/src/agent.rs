use serde::{Deserialize, Serialize};

/// Normalized role of a clause subject in a labor contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    Worker,
    Firm,
    Union,
    Manager,
    /// Any subject lemma absent from the agent lexicon
    Other,
}

impl AgentCategory {
    /// The four categories an agent lexicon can map to.
    pub const KNOWN: [AgentCategory; 4] = [
        AgentCategory::Worker,
        AgentCategory::Firm,
        AgentCategory::Union,
        AgentCategory::Manager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Firm => "firm",
            Self::Union => "union",
            Self::Manager => "manager",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
