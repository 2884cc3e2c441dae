//! Access roster for the approval step: users, their tool entitlements,
//! row expansion state, approver assignments and the memo.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use shared::{
    domain::{ApproverRole, EntryId, ToolId},
    error::IntakeError,
};
use tracing::{debug, warn};

use crate::{
    approvals::ApproverAssignment,
    email::{self, display_name_from_email, validate_email},
    memo::Memo,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    id: EntryId,
    display_name: String,
    email: String,
    entitlements: BTreeSet<ToolId>,
}

impl RosterEntry {
    fn new(email: String, entitlements: BTreeSet<ToolId>) -> Self {
        Self {
            id: EntryId::new(),
            display_name: display_name_from_email(&email),
            email,
            entitlements,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn entitlements(&self) -> &BTreeSet<ToolId> {
        &self.entitlements
    }

    pub fn has_tool(&self, tool: ToolId) -> bool {
        self.entitlements.contains(&tool)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    entries: Vec<RosterEntry>,
    expanded: HashSet<EntryId>,
    approvers: ApproverAssignment,
    memo: Memo,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry, expanded. Emails are unique ignoring ASCII case.
    pub fn add_user(
        &mut self,
        email: &str,
        initial_tools: impl IntoIterator<Item = ToolId>,
    ) -> Result<RosterEntry, IntakeError> {
        let email = validate_email(email).inspect_err(|err| warn!(%err, "rejected roster add"))?;
        if self.find_by_email(&email).is_some() {
            warn!(email = %email, "rejected duplicate roster entry");
            return Err(IntakeError::DuplicateEntry { email });
        }

        let entry = RosterEntry::new(email, initial_tools.into_iter().collect());
        debug!(entry_id = %entry.id, email = %entry.email, "roster entry added");
        self.expanded.insert(entry.id);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn remove_user(&mut self, id: EntryId) -> Result<RosterEntry, IntakeError> {
        let position = self.position(id)?;
        let removed = self.entries.remove(position);
        self.expanded.remove(&id);
        debug!(entry_id = %id, email = %removed.email, "roster entry removed");
        Ok(removed)
    }

    pub fn toggle_tool(&mut self, id: EntryId, tool: ToolId) -> Result<RosterEntry, IntakeError> {
        let position = self.position(id)?;
        let entry = &mut self.entries[position];
        let granted = if entry.entitlements.remove(&tool) {
            false
        } else {
            entry.entitlements.insert(tool)
        };
        debug!(entry_id = %id, tool = %tool, granted, "entitlement toggled");
        Ok(entry.clone())
    }

    /// Flips the row's expansion and returns the new state.
    pub fn toggle_expanded(&mut self, id: EntryId) -> Result<bool, IntakeError> {
        self.position(id)?;
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id)
        };
        Ok(expanded)
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn suggest_emails<S: AsRef<str>>(partial: &str, directory: &[S]) -> Vec<String> {
        email::suggest_emails(partial, directory)
    }

    /// Assigns a role given by label or key; unknown roles are rejected.
    pub fn set_approver(&mut self, role: &str, identity: &str) -> Result<(), IntakeError> {
        let role: ApproverRole = role
            .parse()
            .inspect_err(|err| warn!(%err, "rejected approver assignment"))?;
        self.assign_approver(role, identity);
        Ok(())
    }

    pub fn assign_approver(&mut self, role: ApproverRole, identity: &str) {
        debug!(role = %role, "approver assigned");
        self.approvers.assign(role, identity);
    }

    pub fn set_memo(&mut self, text: &str) -> &str {
        self.memo.set_text(text)
    }

    pub fn set_attestation(&mut self, attested: bool) {
        self.memo.set_attested(attested);
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&RosterEntry> {
        let email = email.trim();
        self.entries
            .iter()
            .find(|entry| email::same_email(&entry.email, email))
    }

    pub fn approvers(&self) -> &ApproverAssignment {
        &self.approvers
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: EntryId) -> Result<usize, IntakeError> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| IntakeError::entry_not_found(id))
    }
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
