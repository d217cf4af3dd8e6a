//! The backend seam.

use std::future::Future;

use labdeck_common::types::{ContainerId, CreateResponse, DeleteResponse};

use crate::error::Result;

/// One method per backend endpoint.
///
/// Implementations perform exactly one request per call and never retry.
pub trait ContainerApi {
    /// `POST /create` with `{"count": count}`.
    fn create(&self, count: u32) -> impl Future<Output = Result<CreateResponse>> + Send;

    /// `GET /list`.
    ///
    /// Returns the raw JSON body: callers decide what a non-array body means.
    fn list(&self) -> impl Future<Output = Result<serde_json::Value>> + Send;

    /// `DELETE /delete` with `{"ids": ids}`.
    fn delete(&self, ids: &[ContainerId]) -> impl Future<Output = Result<DeleteResponse>> + Send;
}
