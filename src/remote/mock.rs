//! Recording HTTP client for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{Result, SkillGistError};

use super::{HttpClient, HttpRequest};

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct MockHttpClient {
    responses: RefCell<VecDeque<Result<String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.to_string()));
        self
    }

    pub fn fail(self, msg: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(SkillGistError::Http(msg.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for MockHttpClient {
    fn send(&self, request: &HttpRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SkillGistError::Http("No response configured".to_string())))
    }
}
