//! MDM command shapes
//!
//! One type per supported command kind, carrying exactly the fields that
//! kind is allowed to send to a device. The `Command` enum ties the kind
//! discriminator to its field shape, so a payload can never mix fields
//! from two different commands.

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// A fully-formed MDM command: the `RequestType` discriminator plus the
/// fields belonging to that type, and nothing else.
///
/// Serializes as a single dictionary with a `RequestType` key, which is the
/// shape both the property-list and JSON encoders expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "RequestType")]
pub enum Command {
    DeviceInformation(DeviceInformation),
    InstallApplication(InstallApplication),
    InstallProfile(InstallProfile),
    AccountConfiguration(AccountConfiguration),
    ScheduleOSUpdateScan(ScheduleOSUpdateScan),
    // Trigger commands: the request type alone tells the device what to do
    ProfileList,
    SecurityInfo,
    CertificateList,
    OSUpdateStatus,
    DeviceConfigured,
    AvailableOSUpdates,
}

impl Command {
    /// Get the `RequestType` string for this command
    pub fn request_type(&self) -> &'static str {
        match self {
            Command::DeviceInformation(_) => "DeviceInformation",
            Command::InstallApplication(_) => "InstallApplication",
            Command::InstallProfile(_) => "InstallProfile",
            Command::AccountConfiguration(_) => "AccountConfiguration",
            Command::ScheduleOSUpdateScan(_) => "ScheduleOSUpdateScan",
            Command::ProfileList => "ProfileList",
            Command::SecurityInfo => "SecurityInfo",
            Command::CertificateList => "CertificateList",
            Command::OSUpdateStatus => "OSUpdateStatus",
            Command::DeviceConfigured => "DeviceConfigured",
            Command::AvailableOSUpdates => "AvailableOSUpdates",
        }
    }
}

/// Asks the device to report on a list of named queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInformation {
    #[serde(rename = "Queries", default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<String>,
}

/// Installs an app on the device, from the store or a manifest URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallApplication {
    #[serde(rename = "iTunesStoreID", default, skip_serializing_if = "Option::is_none")]
    pub itunes_store_id: Option<i64>,
    #[serde(rename = "Identifier", default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "ManifestURL", default, skip_serializing_if = "Option::is_none")]
    pub manifest_url: Option<String>,
    #[serde(rename = "ManagementFlags", default, skip_serializing_if = "Option::is_none")]
    pub management_flags: Option<i64>,
    #[serde(rename = "NotManaged", default, skip_serializing_if = "is_false")]
    pub not_managed: bool,
}

/// Installs a configuration profile, delivered as a raw blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallProfile {
    #[serde(rename = "Payload", default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ByteBuf>,
}

/// Configures the primary account created during Setup Assistant on macOS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountConfiguration {
    #[serde(
        rename = "SkipPrimarySetupAccountCreation",
        default,
        skip_serializing_if = "is_false"
    )]
    pub skip_primary_setup_account_creation: bool,
    #[serde(
        rename = "SetPrimarySetupAccountAsRegularUser",
        default,
        skip_serializing_if = "is_false"
    )]
    pub set_primary_setup_account_as_regular_user: bool,
    #[serde(
        rename = "AutoSetupAdminAccounts",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub auto_setup_admin_accounts: Vec<AdminAccount>,
}

/// Schedules an OS software update scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOSUpdateScan {
    #[serde(rename = "Force", default, skip_serializing_if = "is_false")]
    pub force: bool,
}

/// An admin account to create during Setup Assistant
///
/// Only used inside [`AccountConfiguration`]. Serializes with the wire key
/// names; the snake_case aliases accept the administrative JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    #[serde(rename = "shortName", alias = "short_name")]
    pub short_name: String,
    #[serde(
        rename = "fullName",
        alias = "full_name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,
    #[serde(rename = "passwordHash", alias = "password_hash", default)]
    pub password_hash: ByteBuf,
    #[serde(rename = "hidden", default, skip_serializing_if = "is_false")]
    pub hidden: bool,
}

// Mirrors the wire contract for boolean flags: false is omitted entirely
pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_type_strings() {
        assert_eq!(
            Command::DeviceInformation(DeviceInformation::default()).request_type(),
            "DeviceInformation"
        );
        assert_eq!(Command::ProfileList.request_type(), "ProfileList");
        assert_eq!(Command::AvailableOSUpdates.request_type(), "AvailableOSUpdates");
    }

    #[test]
    fn test_trigger_command_serializes_as_bare_request_type() {
        let value = serde_json::to_value(&Command::SecurityInfo).expect("serialize failed");
        assert_eq!(value, json!({ "RequestType": "SecurityInfo" }));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let command = Command::InstallApplication(InstallApplication {
            identifier: Some("com.example.app".into()),
            ..Default::default()
        });
        let value = serde_json::to_value(&command).expect("serialize failed");
        assert_eq!(
            value,
            json!({
                "RequestType": "InstallApplication",
                "Identifier": "com.example.app",
            })
        );
    }

    #[test]
    fn test_admin_account_wire_names() {
        let account = AdminAccount {
            short_name: "admin".into(),
            full_name: None,
            password_hash: ByteBuf::from(vec![0xCA, 0xFE]),
            hidden: true,
        };
        let value = serde_json::to_value(&account).expect("serialize failed");
        let object = value.as_object().expect("not an object");
        assert!(object.contains_key("shortName"));
        assert!(object.contains_key("passwordHash"));
        assert!(object.contains_key("hidden"));
        assert!(!object.contains_key("fullName"));
    }

    #[test]
    fn test_admin_account_accepts_snake_case_input() {
        let account: AdminAccount = serde_json::from_value(json!({
            "short_name": "admin",
            "full_name": "Administrator",
            "password_hash": [1, 2, 3],
        }))
        .expect("deserialize failed");
        assert_eq!(account.short_name, "admin");
        assert_eq!(account.full_name.as_deref(), Some("Administrator"));
        assert_eq!(account.password_hash.to_vec(), vec![1, 2, 3]);
        assert!(!account.hidden);
    }
}
