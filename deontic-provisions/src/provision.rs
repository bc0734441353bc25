use crate::ProvisionConditions;
use serde::{Deserialize, Serialize};

/// A provision label. A clause may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provision {
    Obligation,
    Constraint,
    Permission,
    Entitlement,
    /// None of the other four
    #[serde(rename = "other_provision")]
    Other,
}

impl Provision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Obligation => "obligation",
            Self::Constraint => "constraint",
            Self::Permission => "permission",
            Self::Entitlement => "entitlement",
            Self::Other => "other_provision",
        }
    }
}

impl std::fmt::Display for Provision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five output columns. `other_provision` holds exactly when the other
/// four are all false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionLabels {
    pub obligation: bool,
    pub constraint: bool,
    pub permission: bool,
    pub entitlement: bool,
    pub other_provision: bool,
}

impl ProvisionLabels {
    pub fn from_conditions(conditions: &ProvisionConditions) -> Self {
        let obligation = conditions.obligation();
        let constraint = conditions.constraint();
        let permission = conditions.permission();
        let entitlement = conditions.entitlement();
        Self {
            obligation,
            constraint,
            permission,
            entitlement,
            other_provision: !(obligation || constraint || permission || entitlement),
        }
    }

    pub fn contains(&self, provision: Provision) -> bool {
        match provision {
            Provision::Obligation => self.obligation,
            Provision::Constraint => self.constraint,
            Provision::Permission => self.permission,
            Provision::Entitlement => self.entitlement,
            Provision::Other => self.other_provision,
        }
    }

    /// Every label that holds, in column order.
    pub fn provisions(&self) -> Vec<Provision> {
        [
            Provision::Obligation,
            Provision::Constraint,
            Provision::Permission,
            Provision::Entitlement,
            Provision::Other,
        ]
        .iter()
        .copied()
        .filter(|p| self.contains(*p))
        .collect()
    }
}
