//! Builders for canonical review API payloads.

use serde_json::{json, Value};

/// A payload with one submission record and an optional `current_date`.
pub fn single_submission(name: &str, status: &str, current_date: Option<i64>) -> Value {
    let mut payload = json!({
        "homeworks": [{"homework_name": name, "status": status}],
    });
    if let Some(date) = current_date {
        payload["current_date"] = json!(date);
    }
    payload
}

/// A payload with no submissions and an optional `current_date`.
pub fn no_submissions(current_date: Option<i64>) -> Value {
    let mut payload = json!({ "homeworks": [] });
    if let Some(date) = current_date {
        payload["current_date"] = json!(date);
    }
    payload
}
