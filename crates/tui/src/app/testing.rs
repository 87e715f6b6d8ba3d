//! In-memory [`CategoryService`] for editor and app tests.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use api_types::{
    category::{CategoryDto, CategoryRequest},
    error::ErrorBody,
};
use reqwest::StatusCode;

use crate::client::{CategoryService, ClientError};

#[derive(Debug, Clone)]
pub enum Reply {
    /// Succeed; a found category is named after the payload.
    Ok(String),
    Fail(Option<ErrorBody>),
}

#[derive(Debug)]
struct FakeState {
    find: Reply,
    update: Reply,
    delay: Option<Duration>,
    finds: Vec<i64>,
    updates: Vec<CategoryRequest>,
}

#[derive(Debug, Clone)]
pub struct FakeService {
    state: Arc<Mutex<FakeState>>,
}

impl FakeService {
    pub fn with_find(find: Reply) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                find,
                update: Reply::Ok(String::new()),
                delay: None,
                finds: Vec::new(),
                updates: Vec::new(),
            })),
        }
    }

    pub fn with_category(nome: &str) -> Self {
        Self::with_find(Reply::Ok(nome.to_string()))
    }

    pub fn delayed(self, delay: Duration) -> Self {
        self.state.lock().unwrap().delay = Some(delay);
        self
    }

    pub fn failing_updates(self, body: Option<ErrorBody>) -> Self {
        self.state.lock().unwrap().update = Reply::Fail(body);
        self
    }

    pub fn finds(&self) -> Vec<i64> {
        self.state.lock().unwrap().finds.clone()
    }

    pub fn updates(&self) -> Vec<CategoryRequest> {
        self.state.lock().unwrap().updates.clone()
    }
}

fn failure(body: Option<ErrorBody>) -> ClientError {
    ClientError::Response {
        status: StatusCode::BAD_REQUEST,
        body,
    }
}

impl CategoryService for FakeService {
    async fn find_by_id(&self, id: i64) -> Result<CategoryDto, ClientError> {
        let (reply, delay) = {
            let mut state = self.state.lock().unwrap();
            state.finds.push(id);
            (state.find.clone(), state.delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match reply {
            Reply::Ok(nome) => Ok(CategoryDto { id: Some(id), nome }),
            Reply::Fail(body) => Err(failure(body)),
        }
    }

    async fn update(&self, request: CategoryRequest) -> Result<(), ClientError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.updates.push(request);
            state.update.clone()
        };
        match reply {
            Reply::Ok(_) => Ok(()),
            Reply::Fail(body) => Err(failure(body)),
        }
    }
}
