//! Error taxonomy shared across the workspace.
//!
//! Two client-error families exist: decoding failures (the request never
//! named a valid action) and usage failures (a valid action referenced a
//! device that is not registered). Removing something absent is neither —
//! removals are idempotent and always succeed.

use crate::key::Serial;

/// Top-level error for request decoding and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The request parameters could not be decoded into an action.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The request referenced a serial with no registered device.
    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),
}

/// Failure to decode an action from the flat request parameter map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A required query parameter was absent or empty.
    #[error("required query parameter is missing: {name}")]
    MissingParam { name: &'static str },

    /// The `action` parameter named no recognized action.
    #[error("action '{action}' not supported")]
    UnknownAction { action: String },

    /// The `port` parameter was not a 16-bit unsigned integer.
    #[error("invalid port value: {value:?}")]
    InvalidPort { value: String },
}

/// An operation referenced a serial with no matching device.
///
/// Only `add_address` raises this: adding an interface requires an owning
/// device, while removals of absent things always succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device not found: {serial}")]
pub struct UnknownDeviceError {
    pub serial: Serial,
}
