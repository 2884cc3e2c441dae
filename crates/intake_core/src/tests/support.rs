use chrono::NaiveDate;
use shared::{
    domain::{ApproverRole, ExistingProject, ToolId},
    protocol::ProjectDetails,
};

use crate::{Classification, FormState, RosterStore, ToolConfiguration};

#[derive(Default)]
pub(crate) struct Draft {
    pub classification: Classification,
    pub project: ProjectDetails,
    pub tools: ToolConfiguration,
    pub roster: RosterStore,
}

impl Draft {
    pub fn complete() -> Self {
        let mut draft = Self::default();
        draft.classification.existing_project = Some(ExistingProject::No);
        draft.project = ProjectDetails {
            ertm_id: Some("PRJ-8YV03FK".into()),
            sap_id: Some("SAP-PRJ001".into()),
            code_name: "PCN-0001".into(),
            project_type: "Development".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 7),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 30),
            personal_data: Some(true),
            goals: None,
            description: None,
        };
        draft.tools.select(ToolId::TeamsSite, "AP Platform");
        draft
            .roster
            .add_user("john.doe@example.com", [ToolId::TeamsSite])
            .expect("add john");
        for role in ApproverRole::ALL {
            draft.roster.assign_approver(role, "James Anderson");
        }
        draft.roster.set_attestation(true);
        draft
    }

    pub fn form(&self) -> FormState<'_> {
        FormState {
            classification: &self.classification,
            project: &self.project,
            tools: &self.tools,
            roster: &self.roster,
        }
    }
}
