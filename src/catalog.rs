//! Command catalog
//!
//! Declares which request types the protocol supports and which fields each
//! one copies out of a generic request. Adding a command kind is one new
//! table entry; the builder's dispatch never changes.

use crate::command::{
    AccountConfiguration, Command, DeviceInformation, InstallApplication, InstallProfile,
    ScheduleOSUpdateScan,
};
use crate::request::CommandRequest;

/// Copies the fields belonging to one request type out of a generic request
pub type CopyRule = fn(&CommandRequest) -> Command;

// One entry per supported request type. Trigger commands copy nothing.
static CATALOG: &[(&str, CopyRule)] = &[
    ("DeviceInformation", |request| {
        Command::DeviceInformation(DeviceInformation {
            queries: request.queries.clone(),
        })
    }),
    ("InstallApplication", |request| {
        Command::InstallApplication(InstallApplication {
            itunes_store_id: request.itunes_store_id,
            identifier: request.identifier.clone(),
            manifest_url: request.manifest_url.clone(),
            management_flags: request.management_flags,
            not_managed: request.not_managed,
        })
    }),
    ("InstallProfile", |request| {
        Command::InstallProfile(InstallProfile {
            payload: request.payload.clone(),
        })
    }),
    ("AccountConfiguration", |request| {
        Command::AccountConfiguration(AccountConfiguration {
            skip_primary_setup_account_creation: request.skip_primary_setup_account_creation,
            set_primary_setup_account_as_regular_user: request
                .set_primary_setup_account_as_regular_user,
            auto_setup_admin_accounts: request.auto_setup_admin_accounts.clone(),
        })
    }),
    ("ScheduleOSUpdateScan", |request| {
        Command::ScheduleOSUpdateScan(ScheduleOSUpdateScan {
            force: request.force,
        })
    }),
    ("ProfileList", |_| Command::ProfileList),
    ("SecurityInfo", |_| Command::SecurityInfo),
    ("CertificateList", |_| Command::CertificateList),
    ("OSUpdateStatus", |_| Command::OSUpdateStatus),
    ("DeviceConfigured", |_| Command::DeviceConfigured),
    ("AvailableOSUpdates", |_| Command::AvailableOSUpdates),
];

/// Look up the copy rule for a request type, if it is supported
pub fn copy_rule(request_type: &str) -> Option<CopyRule> {
    CATALOG
        .iter()
        .find(|(kind, _)| *kind == request_type)
        .map(|(_, rule)| *rule)
}

/// Check whether a request type is supported
pub fn is_supported(request_type: &str) -> bool {
    copy_rule(request_type).is_some()
}

/// Iterate the supported request type strings
pub fn request_types() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(kind, _)| *kind)
}
