use serde_json::Value;

use crate::error::ResponseError;

/// Assert the decoded payload has the expected shape and borrow the
/// submissions list out of it.
///
/// Canonical contract: a top-level JSON object with a `homeworks` array and
/// an optional sibling `current_date` integer. This is a pure assertion
/// gate; it performs no transformation.
pub fn check_response(payload: &Value) -> Result<&[Value], ResponseError> {
    let object = payload.as_object().ok_or(ResponseError::NotAnObject)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?;
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ResponseError::HomeworksNotAList)
}
