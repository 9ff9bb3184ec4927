use super::{Method, RemoteClient};
use crate::error::{Result, WrkError};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Client that never touches the network. Unscripted requests answer `[]`.
pub struct RecordingClient {
    member_id: String,
    responses: HashMap<(Method, String), Value>,
    failures: HashMap<(Method, String), u16>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingClient {
    pub fn new() -> Self {
        Self {
            member_id: "me123".to_string(),
            responses: HashMap::new(),
            failures: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn respond(mut self, method: Method, path: &str, body: Value) -> Self {
        self.responses.insert((method, path.to_string()), body);
        self
    }

    pub fn fail(mut self, method: Method, path: &str, status: u16) -> Self {
        self.failures.insert((method, path.to_string()), status);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls[0].clone()
    }
}

impl RemoteClient for RecordingClient {
    fn call(&self, method: Method, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        let key = (method, path.to_string());
        if let Some(status) = self.failures.get(&key) {
            return Err(WrkError::Remote {
                status: *status,
                body: "scripted failure".to_string(),
            });
        }
        Ok(self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    fn my_member_id(&self) -> Result<String> {
        Ok(self.member_id.clone())
    }
}
