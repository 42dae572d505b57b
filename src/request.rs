//! Generic command request envelope
//!
//! The administrative API submits commands in one flat shape: a request type,
//! a target device, and a superset of every command's fields. Only the fields
//! matching the request type are meaningful; the rest are dropped when the
//! request is translated into a [`crate::CommandPayload`].

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

use crate::command::{is_false, AdminAccount};

/// A loosely-typed command request, as deserialized from the admin API.
///
/// `request_type` selects which fields the translation keeps; `udid`
/// identifies the target device and is carried through uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandRequest {
    pub request_type: String,
    pub udid: String,

    // DeviceInformation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<String>,

    // InstallApplication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itunes_store_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_flags: Option<i64>,
    #[serde(skip_serializing_if = "is_false")]
    pub not_managed: bool,

    // InstallProfile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ByteBuf>,

    // AccountConfiguration
    #[serde(skip_serializing_if = "is_false")]
    pub skip_primary_setup_account_creation: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub set_primary_setup_account_as_regular_user: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auto_setup_admin_accounts: Vec<AdminAccount>,

    // ScheduleOSUpdateScan
    #[serde(skip_serializing_if = "is_false")]
    pub force: bool,
}

impl CommandRequest {
    /// Create a request with the given type and target device
    pub fn new(request_type: impl Into<String>, udid: impl Into<String>) -> Self {
        Self {
            request_type: request_type.into(),
            udid: udid.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_admin_api_request() {
        let request: CommandRequest = serde_json::from_value(json!({
            "request_type": "InstallApplication",
            "udid": "564D1234-AAAA-BBBB-CCCC-1234567890AB",
            "manifest_url": "https://mdm.example.com/apps/munki.plist",
            "management_flags": 1,
        }))
        .expect("deserialize failed");
        assert_eq!(request.request_type, "InstallApplication");
        assert_eq!(
            request.manifest_url.as_deref(),
            Some("https://mdm.example.com/apps/munki.plist")
        );
        assert_eq!(request.management_flags, Some(1));
        assert!(request.queries.is_empty());
    }

    #[test]
    fn test_unknown_request_type_still_parses() {
        // Rejection happens at build time, not parse time
        let request: CommandRequest =
            serde_json::from_value(json!({ "request_type": "EraseDevice" }))
                .expect("deserialize failed");
        assert_eq!(request.request_type, "EraseDevice");
        assert!(request.udid.is_empty());
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let request = CommandRequest::new("ProfileList", "test-udid");
        let value = serde_json::to_value(&request).expect("serialize failed");
        assert_eq!(
            value,
            json!({
                "request_type": "ProfileList",
                "udid": "test-udid",
            })
        );
    }
}
