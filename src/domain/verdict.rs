//! Status-to-message translation.
//!
//! The review API reports one of a small closed set of status codes per
//! submission. Anything outside the table is an error condition, not
//! silently ignored.

use serde_json::Value;

use crate::error::VerdictError;

/// Recognized review statuses and their human-readable verdict sentences.
pub const VERDICTS: [(&str, &str); 3] = [
    (
        "approved",
        "The reviewer checked the work: everything looks good. Hooray!",
    ),
    ("reviewing", "The work was taken up for review."),
    (
        "rejected",
        "The reviewer checked the work: there are remarks to address.",
    ),
];

/// Look up the verdict sentence for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, sentence)| *sentence)
}

/// Translate a single submission record into a notification message.
///
/// The record must carry a non-empty `homework_name` and a recognized
/// `status`; anything else fails with the corresponding [`VerdictError`].
pub fn parse_status(record: &Value) -> Result<String, VerdictError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(VerdictError::MissingName)?;

    let status = record.get("status").and_then(Value::as_str);
    let verdict = status
        .and_then(verdict_for)
        .ok_or_else(|| VerdictError::UnknownStatus {
            status: status.map(str::to_owned),
        })?;

    Ok(format!(
        "Changed review status for submission \"{name}\". {verdict}"
    ))
}
