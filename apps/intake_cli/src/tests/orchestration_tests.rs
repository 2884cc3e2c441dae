use std::io::Cursor;

use super::*;
use crate::submitter::LoggingSubmitter;

#[tokio::test]
async fn replays_lines_and_counts_rejections() {
    let script = r#"
# classification
{"type":"set_existing_project","payload":{"answer":"yes"}}
{"type":"advance"}

{"type":"add_user","payload":{"email":"john.doe@example.com","tools":["Teams Site"]}}
{"type":"add_user","payload":{"email":"John.Doe@example.com"}}
"#;
    let mut session = IntakeSession::new();
    let mut out = Vec::new();

    let stats = replay_script(&mut session, Cursor::new(script), &LoggingSubmitter, &mut out)
        .await
        .expect("replay");

    assert_eq!(stats, ReplayStats { applied: 4, rejected: 1 });

    let events: Vec<serde_json::Value> = String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("event json"))
        .collect();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["type"], "draft_updated");
    assert_eq!(events[1]["payload"]["step"], "project_details");
    assert_eq!(events[2]["payload"]["email"], "john.doe@example.com");
    assert_eq!(events[3]["payload"]["error"]["code"], "duplicate_entry");
}

#[tokio::test]
async fn malformed_line_aborts_with_line_number() {
    let script = "{\"type\":\"advance\"}\n{\"type\":\"teleport\"}\n";
    let mut session = IntakeSession::new();

    let err = replay_script(
        &mut session,
        Cursor::new(script),
        &LoggingSubmitter,
        Vec::new(),
    )
    .await
    .expect_err("unknown action");
    assert!(err.to_string().contains("line 2"));
}
