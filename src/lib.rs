//! MDM Command Payloads
//!
//! This crate translates loosely-typed administrative command requests into
//! strictly-typed, uniquely identified MDM command payloads, ready for the
//! external property-list or JSON encoders and the transport that delivers
//! them to managed devices.
//!
//! The [`catalog`] declares which command kinds exist and which request
//! fields each kind keeps; the [`PayloadBuilder`] performs the translation.

pub mod catalog;
pub mod command;
pub mod payload;
pub mod request;

// Re-export commonly used types at crate root
pub use command::{
    AccountConfiguration, AdminAccount, Command, DeviceInformation, InstallApplication,
    InstallProfile, ScheduleOSUpdateScan,
};
pub use payload::{
    new_payload, BuildError, CommandIdSource, CommandPayload, PayloadBuilder, UuidCommandIds,
};
pub use request::CommandRequest;
