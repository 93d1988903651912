//! Canned review API for driving poll cycles in tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::ReviewApi;
use crate::error::ApiError;

/// A [`ReviewApi`] that replays a script of responses in order.
///
/// Records every cursor it was called with so tests can assert on the
/// `from_date` progression.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    cursors: Mutex<Vec<i64>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful payload.
    pub fn push_ok(&self, payload: Value) {
        self.responses
            .lock()
            .expect("lock scripted responses")
            .push_back(Ok(payload));
    }

    /// Queue an error.
    pub fn push_err(&self, error: ApiError) {
        self.responses
            .lock()
            .expect("lock scripted responses")
            .push_back(Err(error));
    }

    /// Cursors the script has been fetched with so far.
    pub fn cursors(&self) -> Vec<i64> {
        self.cursors.lock().expect("lock scripted cursors").clone()
    }
}

#[async_trait]
impl ReviewApi for ScriptedApi {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        self.cursors
            .lock()
            .expect("lock scripted cursors")
            .push(from_date);
        self.responses
            .lock()
            .expect("lock scripted responses")
            .pop_front()
            .expect("ScriptedApi ran out of responses")
    }
}
