//! Wire types exchanged with the container backend.
//!
//! Decoding is deliberately lenient: the backend is an external collaborator
//! and fields that come back `null` decode to their empty value instead of
//! failing the whole response.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes `null` (or an absent field, together with `#[serde(default)]`)
/// as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unique identifier for a container, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a new container ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A container as returned by `GET /list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Backend identifier.
    pub id: ContainerId,
    /// Container name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Runtime status (`running`, `exited`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Port bindings keyed by `<port>/<proto>`, kept as raw JSON in wire order.
    ///
    /// Values are expected to be arrays of `{"HostPort": "..."}` objects but
    /// any shape is accepted here; see URL resolution in the UI crate.
    #[serde(default)]
    pub ports: serde_json::Value,
    /// Public URL computed by the backend, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `POST /create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Number of containers to create.
    pub count: u32,
}

/// One element of a create response's `created` list.
///
/// Older backends return bare ids; newer ones return an object with the
/// assigned name and host port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedContainer {
    /// Bare container id.
    Id(ContainerId),
    /// Container id with the name and host port it was given.
    Detailed {
        /// Backend identifier.
        id: ContainerId,
        /// Assigned container name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Host port bound to the container.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        port: Option<u16>,
    },
}

impl CreatedContainer {
    /// Returns the container id regardless of the reported shape.
    #[must_use]
    pub const fn id(&self) -> &ContainerId {
        match self {
            Self::Id(id) | Self::Detailed { id, .. } => id,
        }
    }
}

/// Response of `POST /create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    /// Containers created by this request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: Vec<CreatedContainer>,
    /// Error reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateResponse {
    /// Returns the backend error, ignoring an empty string.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Body of `DELETE /delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// Containers to remove.
    pub ids: Vec<ContainerId>,
}

/// A per-id failure reported by `DELETE /delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFailure {
    /// Container that could not be removed.
    pub id: ContainerId,
    /// Backend error message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

/// Response of `DELETE /delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Containers removed by this request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub removed: Vec<ContainerId>,
    /// Per-id failures, when the backend reports them.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DeleteFailure>,
    /// Error reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteResponse {
    /// Returns the backend error, ignoring an empty string.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
