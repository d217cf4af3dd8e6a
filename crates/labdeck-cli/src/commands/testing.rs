//! Scripted backend shared by command tests.

use std::sync::Mutex;

use labdeck_client::api::ContainerApi;
use labdeck_client::error::{ApiError, Result};
use labdeck_common::types::{ContainerId, CreateResponse, DeleteResponse};
use serde_json::{Value, json};

fn failure(endpoint: &'static str) -> ApiError {
    let source = serde_json::from_str::<Value>("bad gateway").unwrap_err();
    ApiError::Decode { endpoint, source }
}

/// Backend double. `None` replies fail the call.
pub struct FakeBackend {
    list_body: Mutex<Option<Value>>,
    create_reply: Mutex<Option<CreateResponse>>,
    delete_reply: Mutex<Option<DeleteResponse>>,
    create_counts: Mutex<Vec<u32>>,
    delete_requests: Mutex<Vec<Vec<ContainerId>>>,
}

impl FakeBackend {
    /// A backend listing containers with the given full ids.
    pub fn listing(ids: &[&str]) -> Self {
        let records: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": id, "name": format!("hlab_{id}"), "status": "running", "ports": {}}))
            .collect();
        Self {
            list_body: Mutex::new(Some(Value::Array(records))),
            create_reply: Mutex::new(Some(CreateResponse::default())),
            delete_reply: Mutex::new(Some(DeleteResponse::default())),
            create_counts: Mutex::new(Vec::new()),
            delete_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn set_list(&self, body: Option<Value>) {
        *self.list_body.lock().unwrap() = body;
    }

    pub fn set_create(&self, reply: Option<CreateResponse>) {
        *self.create_reply.lock().unwrap() = reply;
    }

    pub fn set_delete(&self, reply: Option<DeleteResponse>) {
        *self.delete_reply.lock().unwrap() = reply;
    }

    pub fn create_counts(&self) -> Vec<u32> {
        self.create_counts.lock().unwrap().clone()
    }

    pub fn delete_requests(&self) -> Vec<Vec<ContainerId>> {
        self.delete_requests.lock().unwrap().clone()
    }
}

impl ContainerApi for FakeBackend {
    async fn create(&self, count: u32) -> Result<CreateResponse> {
        self.create_counts.lock().unwrap().push(count);
        let reply = self.create_reply.lock().unwrap().clone();
        reply.ok_or_else(|| failure("/create"))
    }

    async fn list(&self) -> Result<Value> {
        let body = self.list_body.lock().unwrap().clone();
        body.ok_or_else(|| failure("/list"))
    }

    async fn delete(&self, ids: &[ContainerId]) -> Result<DeleteResponse> {
        self.delete_requests.lock().unwrap().push(ids.to_vec());
        let reply = self.delete_reply.lock().unwrap().clone();
        reply.ok_or_else(|| failure("/delete"))
    }
}
