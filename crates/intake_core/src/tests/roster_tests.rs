use super::*;

fn emails(store: &RosterStore) -> Vec<&str> {
    store.entries().iter().map(RosterEntry::email).collect()
}

#[test]
fn add_toggle_remove_scenario() {
    let mut store = RosterStore::new();
    let entry = store
        .add_user("john.doe@example.com", [])
        .expect("add john");
    assert_eq!(entry.display_name(), "John Doe");
    assert!(entry.entitlements().is_empty());
    assert!(store.is_expanded(entry.id()));

    let tool: ToolId = "Teams Site".parse().expect("known tool");
    let updated = store.toggle_tool(entry.id(), tool).expect("toggle");
    assert_eq!(
        updated.entitlements().iter().copied().collect::<Vec<_>>(),
        vec![ToolId::TeamsSite]
    );

    store.remove_user(entry.id()).expect("remove");
    assert!(store.is_empty());
    assert!(!store.is_expanded(entry.id()));
}

#[test]
fn add_then_remove_restores_previous_roster() {
    let mut store = RosterStore::new();
    store
        .add_user("jane.smith@example.com", [ToolId::ToolBuilder])
        .expect("jane");
    store.add_user("admin@company.com", []).expect("admin");
    let before = store.entries().to_vec();

    let added = store
        .add_user("support@company.com", [ToolId::TeamsSite])
        .expect("support");
    store.remove_user(added.id()).expect("remove support");

    assert_eq!(store.entries(), before.as_slice());
}

#[test]
fn duplicate_email_is_rejected_ignoring_case() {
    let mut store = RosterStore::new();
    store.add_user("jane.smith@example.com", []).expect("jane");

    let err = store
        .add_user(" Jane.Smith@Example.com", [ToolId::TeamsSite])
        .expect_err("duplicate");
    assert_eq!(err.code(), shared::error::ErrorCode::DuplicateEntry);
    assert_eq!(store.len(), 1);
}

#[test]
fn invalid_email_leaves_roster_unchanged() {
    let mut store = RosterStore::new();
    let err = store.add_user("not-an-email", []).expect_err("invalid");
    assert!(matches!(err, IntakeError::InvalidEmail { .. }));
    assert!(store.is_empty());
}

#[test]
fn double_toggle_restores_entitlements() {
    let mut store = RosterStore::new();
    let entry = store
        .add_user("jane.smith@example.com", [ToolId::TeamsSite, ToolId::CompanyHealthCheck])
        .expect("jane");
    let original = entry.entitlements().clone();

    for tool in ToolId::ALL {
        store.toggle_tool(entry.id(), tool).expect("first toggle");
        let restored = store.toggle_tool(entry.id(), tool).expect("second toggle");
        assert_eq!(restored.entitlements(), &original);
    }
}

#[test]
fn expansion_follows_identity_across_removal() {
    let mut store = RosterStore::new();
    let first = store.add_user("a.one@example.com", []).expect("first");
    let second = store.add_user("b.two@example.com", []).expect("second");
    let third = store.add_user("c.three@example.com", []).expect("third");

    assert_eq!(store.toggle_expanded(second.id()), Ok(false));
    assert_eq!(store.toggle_expanded(third.id()), Ok(false));

    store.remove_user(first.id()).expect("remove first");

    assert_eq!(emails(&store), vec!["b.two@example.com", "c.three@example.com"]);
    assert!(!store.is_expanded(second.id()));
    assert!(!store.is_expanded(third.id()));
    assert_eq!(store.toggle_expanded(third.id()), Ok(true));
}

#[test]
fn unknown_identity_is_not_found() {
    let mut store = RosterStore::new();
    let ghost = EntryId::new();

    assert!(matches!(
        store.remove_user(ghost),
        Err(IntakeError::NotFound { .. })
    ));
    assert!(matches!(
        store.toggle_tool(ghost, ToolId::TeamsSite),
        Err(IntakeError::NotFound { .. })
    ));
    assert!(matches!(
        store.toggle_expanded(ghost),
        Err(IntakeError::NotFound { .. })
    ));
}

#[test]
fn approvers_always_hold_all_six_roles() {
    let mut store = RosterStore::new();
    assert_eq!(store.approvers().iter().count(), 6);
    assert_eq!(store.approvers().unassigned().len(), 6);

    store
        .set_approver("Information Owner", "Kevin Brown")
        .expect("known role");
    store
        .set_approver("project_manager", "Richard Harris")
        .expect("known role by key");
    store
        .set_approver("Information Owner", "Alex Johnson")
        .expect("overwrite");

    assert_eq!(store.approvers().get(ApproverRole::InformationOwner), "Alex Johnson");
    assert_eq!(store.approvers().get(ApproverRole::ProjectManager), "Richard Harris");
    assert_eq!(store.approvers().iter().count(), 6);
    assert_eq!(store.approvers().unassigned().len(), 4);
}

#[test]
fn unknown_role_is_rejected() {
    let mut store = RosterStore::new();
    let before = store.approvers().clone();

    let err = store.set_approver("Chief Vibes Officer", "Someone").expect_err("unknown");
    assert_eq!(
        err,
        IntakeError::UnknownRole {
            role: "Chief Vibes Officer".to_string()
        }
    );
    assert_eq!(store.approvers(), &before);
}

#[test]
fn memo_is_truncated_at_write_time() {
    let mut store = RosterStore::new();
    let short = "Please approve by Friday.";
    assert_eq!(store.set_memo(short), short);

    let long = "x".repeat(120);
    assert_eq!(store.set_memo(&long), "x".repeat(80));
    assert_eq!(store.memo().len(), 80);
    assert_eq!(store.memo().remaining(), 0);

    let wide = "é".repeat(81);
    assert_eq!(store.set_memo(&wide).chars().count(), 80);

    store.set_attestation(true);
    assert!(store.memo().attested());
}
