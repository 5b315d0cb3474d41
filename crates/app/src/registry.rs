//! In-memory device registry guarded by a single read-write lock.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use roster_domain::device::Device;
use roster_domain::error::UnknownDeviceError;
use roster_domain::key::{HwAddress, Serial};

/// The process-wide device store.
///
/// Every operation takes `&self` and serializes through an internal
/// [`RwLock`] spanning the whole registry: readers share, writers exclude,
/// and a [`Registry::list`] snapshot never observes a half-applied
/// mutation. Hold times are bounded by plain map edits, so the sync lock
/// is fine to use from async handlers.
///
/// Devices iterate in insertion order; removing one preserves the relative
/// order of the remainder.
#[derive(Debug, Default)]
pub struct Registry {
    devices: RwLock<IndexMap<Serial, Device>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Critical sections below are panic-free, so a poisoned guard still
    // holds consistent data and can be recovered.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<Serial, Device>> {
        self.devices.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<Serial, Device>> {
        self.devices.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a device, or update the name and port of the device
    /// already registered under `serial`.
    ///
    /// An update leaves the device's interfaces untouched. Never fails.
    #[tracing::instrument(skip_all, fields(serial = %serial, port = port))]
    pub fn add_device(&self, serial: Serial, name: impl Into<String>, port: u16) {
        let name = name.into();
        let mut devices = self.write();
        if let Some(existing) = devices.get_mut(&serial) {
            existing.name = name;
            existing.port = port;
            tracing::debug!("device updated");
        } else {
            devices.insert(serial.clone(), Device::new(serial, name, port));
            tracing::debug!("device registered");
        }
    }

    /// Remove the device registered under `serial`, along with all of its
    /// interfaces. Removing an unknown serial is a no-op.
    #[tracing::instrument(skip_all, fields(serial = %serial))]
    pub fn remove_device(&self, serial: &Serial) {
        if self.write().shift_remove(serial).is_some() {
            tracing::debug!("device removed");
        }
    }

    /// Insert an interface under the device registered at `serial`, or
    /// update the address of the interface already registered under
    /// `hw_address`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when `serial` names no registered
    /// device; the registry is left unchanged.
    #[tracing::instrument(skip_all, fields(serial = %serial, hw_address = %hw_address))]
    pub fn add_address(
        &self,
        serial: &Serial,
        hw_address: HwAddress,
        address: impl Into<String>,
    ) -> Result<(), UnknownDeviceError> {
        let mut devices = self.write();
        let device = devices.get_mut(serial).ok_or_else(|| UnknownDeviceError {
            serial: serial.clone(),
        })?;
        device.upsert_interface(hw_address, address);
        Ok(())
    }

    /// Remove the interface registered under `(serial, hw_address)`.
    /// A no-op when either the device or the interface is unknown.
    #[tracing::instrument(skip_all, fields(serial = %serial, hw_address = %hw_address))]
    pub fn remove_address(&self, serial: &Serial, hw_address: &HwAddress) {
        if let Some(device) = self.write().get_mut(serial) {
            device.remove_interface(hw_address);
        }
    }

    /// Snapshot all registered devices in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Device> {
        self.read().values().cloned().collect()
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
