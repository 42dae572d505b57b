//! Payload construction
//!
//! Translates a generic [`CommandRequest`] into a [`CommandPayload`]: a
//! uniquely identified, strictly-typed command ready for the wire encoders.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog;
use crate::command::Command;
use crate::request::CommandRequest;

/// Errors that can occur while building a payload
#[derive(Error, Debug)]
pub enum BuildError {
    /// The request named a command kind the catalog does not support
    #[error("unsupported MDM request type {0:?}")]
    UnsupportedRequestType(String),
}

/// A complete MDM command payload
///
/// `command_uuid` correlates asynchronous device responses back to the
/// command that triggered them; it is generated once per payload and never
/// reused. The payload is handed to the external encoder and then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandPayload {
    #[serde(rename = "CommandUUID")]
    pub command_uuid: String,
    #[serde(rename = "Command")]
    pub command: Command,
}

/// Source of fresh correlation identifiers
///
/// Implementations must return a globally unique, canonically formatted
/// string on every call, including under concurrent use.
pub trait CommandIdSource: Send + Sync {
    /// Produce a fresh correlation identifier
    fn next_id(&self) -> String;
}

/// Default identifier source, backed by random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidCommandIds;

impl CommandIdSource for UuidCommandIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Builds command payloads from generic requests
///
/// Stateless apart from its identifier source; a single builder can be
/// shared across threads and calls are independent.
pub struct PayloadBuilder {
    ids: Box<dyn CommandIdSource>,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadBuilder {
    /// Create a builder using the default UUID identifier source
    pub fn new() -> Self {
        Self::with_id_source(UuidCommandIds)
    }

    /// Create a builder with a custom identifier source
    pub fn with_id_source(ids: impl CommandIdSource + 'static) -> Self {
        Self { ids: Box::new(ids) }
    }

    /// Build a payload from a generic request
    ///
    /// Copies exactly the fields belonging to the requested type; fields for
    /// any other type present in the request are dropped. Returns
    /// [`BuildError::UnsupportedRequestType`] if the type is not in the
    /// catalog.
    pub fn build(&self, request: &CommandRequest) -> Result<CommandPayload, BuildError> {
        let rule = match catalog::copy_rule(&request.request_type) {
            Some(rule) => rule,
            None => {
                warn!("Rejected unsupported MDM request type: {}", request.request_type);
                return Err(BuildError::UnsupportedRequestType(
                    request.request_type.clone(),
                ));
            }
        };

        let payload = CommandPayload {
            command_uuid: self.ids.next_id(),
            command: rule(request),
        };
        debug!(
            "Built {} payload: {}",
            payload.command.request_type(),
            payload.command_uuid
        );
        Ok(payload)
    }
}

/// Build a payload with the default UUID identifier source
pub fn new_payload(request: &CommandRequest) -> Result<CommandPayload, BuildError> {
    PayloadBuilder::new().build(request)
}
