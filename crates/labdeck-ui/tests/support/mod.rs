//! Scripted in-process backend for dispatcher tests.

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use labdeck_client::api::ContainerApi;
use labdeck_client::error::{ApiError, Result};
use labdeck_common::types::{ContainerId, CreateResponse, DeleteResponse};
use serde_json::{Value, json};
use tokio::sync::Notify;

/// A failed call to `endpoint`.
fn failure(endpoint: &'static str) -> ApiError {
    let source = serde_json::from_str::<Value>("<html>bad gateway</html>").unwrap_err();
    ApiError::Decode { endpoint, source }
}

/// A listing entry as the backend returns it.
pub fn record_json(id: &str, host_port: &str) -> Value {
    json!({
        "id": id,
        "name": format!("hlab_{host_port}"),
        "status": "running",
        "ports": {"80/tcp": [{"HostIp": "0.0.0.0", "HostPort": host_port}]}
    })
}

/// Backend double. Replies are scripted; `None` replies fail in transport.
pub struct FakeApi {
    list_body: Mutex<Option<Value>>,
    create_reply: Mutex<Option<CreateResponse>>,
    delete_reply: Mutex<Option<DeleteResponse>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_requests: Mutex<Vec<Vec<ContainerId>>>,
    hold_deletes: AtomicBool,
    /// Notified when a held delete has been received.
    pub delete_entered: Notify,
    /// Notify to let a held delete answer.
    pub delete_release: Notify,
}

impl FakeApi {
    /// A backend listing `ids` with default (empty) create/delete replies.
    pub fn with_records(ids: &[&str]) -> Self {
        let records: Vec<Value> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| record_json(id, &(10_000 + i).to_string()))
            .collect();
        Self {
            list_body: Mutex::new(Some(Value::Array(records))),
            create_reply: Mutex::new(Some(CreateResponse::default())),
            delete_reply: Mutex::new(Some(DeleteResponse::default())),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            delete_requests: Mutex::new(Vec::new()),
            hold_deletes: AtomicBool::new(false),
            delete_entered: Notify::new(),
            delete_release: Notify::new(),
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

    /// Makes every delete wait for `delete_release`.
    pub fn hold_deletes(&self) {
        self.hold_deletes.store(true, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_requests(&self) -> Vec<Vec<ContainerId>> {
        self.delete_requests.lock().unwrap().clone()
    }
}

impl ContainerApi for FakeApi {
    async fn create(&self, _count: u32) -> Result<CreateResponse> {
        let _ = self.create_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.create_reply.lock().unwrap().clone();
        reply.ok_or_else(|| failure("/create"))
    }

    async fn list(&self) -> Result<Value> {
        let _ = self.list_calls.fetch_add(1, Ordering::SeqCst);
        let body = self.list_body.lock().unwrap().clone();
        body.ok_or_else(|| failure("/list"))
    }

    async fn delete(&self, ids: &[ContainerId]) -> Result<DeleteResponse> {
        self.delete_requests.lock().unwrap().push(ids.to_vec());
        if self.hold_deletes.load(Ordering::SeqCst) {
            self.delete_entered.notify_one();
            self.delete_release.notified().await;
        }
        let reply = self.delete_reply.lock().unwrap().clone();
        reply.ok_or_else(|| failure("/delete"))
    }
}
