//! Device — a registry entry keyed by hardware serial, owning its interfaces.

use serde::{Deserialize, Serialize};

use crate::key::{HwAddress, Serial};

/// A network interface of a device: MAC address plus IP address literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub hw_address: HwAddress,
    pub address: String,
}

/// A device registered for discovery.
///
/// Serializes to the discovery wire shape, where the interface collection
/// is exposed under the `list` key:
/// `{"serial": …, "name": …, "port": …, "list": [{"hw_address": …, "address": …}, …]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub serial: Serial,
    pub name: String,
    pub port: u16,
    #[serde(rename = "list")]
    pub interfaces: Vec<Interface>,
}

impl Device {
    /// Create a device with an empty interface collection.
    #[must_use]
    pub fn new(serial: Serial, name: impl Into<String>, port: u16) -> Self {
        Self {
            serial,
            name: name.into(),
            port,
            interfaces: Vec::new(),
        }
    }

    /// Look up an interface by MAC address.
    #[must_use]
    pub fn interface(&self, hw_address: &HwAddress) -> Option<&Interface> {
        self.interfaces
            .iter()
            .find(|iface| iface.hw_address == *hw_address)
    }

    /// Insert an interface, or update the address of the one already
    /// registered under `hw_address`.
    ///
    /// Interfaces keep their insertion order; an update rewrites the entry
    /// in place and never moves it.
    pub fn upsert_interface(&mut self, hw_address: HwAddress, address: impl Into<String>) {
        let address = address.into();
        match self
            .interfaces
            .iter_mut()
            .find(|iface| iface.hw_address == hw_address)
        {
            Some(existing) => existing.address = address,
            None => self.interfaces.push(Interface { hw_address, address }),
        }
    }

    /// Remove the interface registered under `hw_address`.
    ///
    /// Removing an unknown MAC address is a no-op.
    pub fn remove_interface(&mut self, hw_address: &HwAddress) {
        self.interfaces
            .retain(|iface| iface.hw_address != *hw_address);
    }
}
