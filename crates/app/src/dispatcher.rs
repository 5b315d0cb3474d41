//! Action decoding and dispatch — the seam between stringly request
//! parameters and typed registry calls.

use std::collections::HashMap;

use serde::Serialize;

use roster_domain::device::Device;
use roster_domain::error::{DecodeError, RosterError};
use roster_domain::key::{HwAddress, Serial};

use crate::registry::Registry;

/// The closed set of actions the discovery endpoint understands.
///
/// Each variant carries exactly the parameters its registry operation
/// needs, already coerced to their typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Register or update a device.
    AddDevice {
        serial: Serial,
        name: String,
        port: u16,
    },
    /// Remove a device and all of its interfaces.
    RemoveDevice { serial: Serial },
    /// Register or update an interface of an existing device.
    AddAddress {
        serial: Serial,
        hw_address: HwAddress,
        address: String,
    },
    /// Remove an interface from a device.
    RemoveAddress {
        serial: Serial,
        hw_address: HwAddress,
    },
    /// Snapshot all registered devices.
    List,
}

impl Action {
    /// Decode an action from the flat query parameter map.
    ///
    /// A required parameter that is absent, or present with an empty
    /// value, counts as missing (deployed firmware sends both forms
    /// interchangeably). Parameters an action does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingParam`] when `action` or one of its
    /// required parameters is missing, [`DecodeError::UnknownAction`] for
    /// an unrecognized action name, and [`DecodeError::InvalidPort`] when
    /// `port` does not parse as a `u16`.
    pub fn decode(params: &HashMap<String, String>) -> Result<Self, DecodeError> {
        match require(params, "action")? {
            "list" => Ok(Self::List),
            "add_device" => Ok(Self::AddDevice {
                serial: require(params, "serial")?.into(),
                name: require(params, "name")?.to_owned(),
                port: parse_port(require(params, "port")?)?,
            }),
            "remove_device" => Ok(Self::RemoveDevice {
                serial: require(params, "serial")?.into(),
            }),
            "add_address" => Ok(Self::AddAddress {
                serial: require(params, "serial")?.into(),
                hw_address: require(params, "hw_address")?.into(),
                address: require(params, "address")?.to_owned(),
            }),
            "remove_address" => Ok(Self::RemoveAddress {
                serial: require(params, "serial")?.into(),
                hw_address: require(params, "hw_address")?.into(),
            }),
            other => Err(DecodeError::UnknownAction {
                action: other.to_owned(),
            }),
        }
    }
}

fn require<'p>(
    params: &'p HashMap<String, String>,
    name: &'static str,
) -> Result<&'p str, DecodeError> {
    match params.get(name).map(String::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DecodeError::MissingParam { name }),
    }
}

fn parse_port(value: &str) -> Result<u16, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidPort {
        value: value.to_owned(),
    })
}

/// The result value an action produces, ready for JSON serialization.
///
/// Mutating actions answer an empty object; `list` answers the flat
/// device array.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Empty {},
    Devices(Vec<Device>),
}

/// Run a decoded action against the registry.
///
/// # Errors
///
/// Returns [`RosterError::UnknownDevice`] when an [`Action::AddAddress`]
/// references an unregistered serial. Every other action is infallible.
pub fn dispatch(registry: &Registry, action: Action) -> Result<Reply, RosterError> {
    match action {
        Action::AddDevice { serial, name, port } => {
            registry.add_device(serial, name, port);
            Ok(Reply::Empty {})
        }
        Action::RemoveDevice { serial } => {
            registry.remove_device(&serial);
            Ok(Reply::Empty {})
        }
        Action::AddAddress {
            serial,
            hw_address,
            address,
        } => {
            registry.add_address(&serial, hw_address, address)?;
            Ok(Reply::Empty {})
        }
        Action::RemoveAddress { serial, hw_address } => {
            registry.remove_address(&serial, &hw_address);
            Ok(Reply::Empty {})
        }
        Action::List => Ok(Reply::Devices(registry.list())),
    }
}
