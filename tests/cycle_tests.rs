//! End-to-end poll cycle behavior over the api/notifier seams.

use reviewbot::app::run_cycle;
use reviewbot::error::ApiError;
use reviewbot::testkit::{payload, FailingNotifier, RecordingNotifier, ScriptedApi};
use serde_json::json;

#[tokio::test]
async fn status_change_produces_one_notification_and_advances_cursor() {
    let api = ScriptedApi::new();
    api.push_ok(payload::single_submission("HW1", "rejected", Some(1_700_000_000)));
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 1_600_000_000).await;

    assert_eq!(next, 1_700_000_000);
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("HW1"));
    assert!(messages[0].contains("remarks to address"));
}

#[tokio::test]
async fn empty_list_produces_no_notification_and_keeps_cursor() {
    let api = ScriptedApi::new();
    api.push_ok(payload::no_submissions(None));
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 1_600_000_000).await;

    assert_eq!(next, 1_600_000_000);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn empty_list_still_advances_cursor_when_current_date_present() {
    let api = ScriptedApi::new();
    api.push_ok(payload::no_submissions(Some(1_700_000_042)));
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 1_600_000_000).await;

    assert_eq!(next, 1_700_000_042);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn fetch_receives_the_current_cursor() {
    let api = ScriptedApi::new();
    api.push_ok(payload::no_submissions(Some(200)));
    api.push_ok(payload::no_submissions(None));
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 100).await;
    let next = run_cycle(&api, &notifier, next).await;

    assert_eq!(next, 200);
    assert_eq!(api.cursors(), vec![100, 200]);
}

#[tokio::test]
async fn bad_status_becomes_a_failure_notification() {
    let api = ScriptedApi::new();
    api.push_err(ApiError::BadStatus {
        status: 403,
        from_date: 100,
        body: "forbidden".into(),
    });
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 100).await;

    // The cursor must not move on a failed cycle.
    assert_eq!(next, 100);
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Homework bot failure:"));
    assert!(messages[0].contains("403"));
}

#[tokio::test]
async fn malformed_payload_becomes_a_failure_notification() {
    let api = ScriptedApi::new();
    api.push_ok(json!("not-a-dict"));
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 100).await;

    assert_eq!(next, 100);
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("not a JSON object"));
}

#[tokio::test]
async fn unknown_status_becomes_a_failure_notification() {
    let api = ScriptedApi::new();
    api.push_ok(payload::single_submission("HW1", "lost", Some(1_700_000_000)));
    let notifier = RecordingNotifier::new();

    let next = run_cycle(&api, &notifier, 100).await;

    // Translation failed before the cursor-advance step.
    assert_eq!(next, 100);
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("unrecognized review status"));
}

#[tokio::test]
async fn only_the_first_record_is_translated() {
    let api = ScriptedApi::new();
    api.push_ok(json!({
        "homeworks": [
            {"homework_name": "HW-new", "status": "approved"},
            {"homework_name": "HW-old", "status": "rejected"},
        ],
        "current_date": 1_700_000_000,
    }));
    let notifier = RecordingNotifier::new();

    run_cycle(&api, &notifier, 100).await;

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("HW-new"));
}

#[tokio::test]
async fn notifier_failure_never_escapes_the_cycle() {
    let api = ScriptedApi::new();
    api.push_ok(payload::single_submission("HW1", "approved", Some(1_700_000_000)));

    // Delivery fails, the cycle must still complete and advance the cursor.
    let next = run_cycle(&api, &FailingNotifier, 100).await;
    assert_eq!(next, 1_700_000_000);
}

#[tokio::test]
async fn notifier_failure_during_error_recovery_is_swallowed_too() {
    let api = ScriptedApi::new();
    api.push_err(ApiError::BadStatus {
        status: 500,
        from_date: 100,
        body: String::new(),
    });

    let next = run_cycle(&api, &FailingNotifier, 100).await;
    assert_eq!(next, 100);
}
