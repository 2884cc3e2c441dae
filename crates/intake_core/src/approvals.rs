use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::domain::ApproverRole;

/// Identity assigned to each of the six fixed approver roles.
///
/// Every role is always present; an unassigned role holds an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproverAssignment {
    assignments: BTreeMap<ApproverRole, String>,
}

impl Default for ApproverAssignment {
    fn default() -> Self {
        Self {
            assignments: ApproverRole::ALL
                .into_iter()
                .map(|role| (role, String::new()))
                .collect(),
        }
    }
}

impl ApproverAssignment {
    pub fn assign(&mut self, role: ApproverRole, identity: impl Into<String>) {
        let identity: String = identity.into();
        self.assignments.insert(role, identity.trim().to_string());
    }

    pub fn get(&self, role: ApproverRole) -> &str {
        self.assignments.get(&role).map(String::as_str).unwrap_or_default()
    }

    /// Assignments in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ApproverRole, &str)> {
        self.assignments
            .iter()
            .map(|(role, identity)| (*role, identity.as_str()))
    }

    pub fn unassigned(&self) -> Vec<ApproverRole> {
        self.iter()
            .filter(|(_, identity)| identity.is_empty())
            .map(|(role, _)| role)
            .collect()
    }
}
