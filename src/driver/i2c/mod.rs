//! I2C board info and client instantiation.

use alloc::format;
use alloc::string::String;
use crate::base::errno::Errno;
use crate::board::Error;
use crate::dev::property::SoftwareNode;
use crate::logk::PR_FMT;
use super::acpi::{AcpiHandle, AcpiPath, Namespace};


/// Size of the `type` buffer of an I2C client, including the terminating NUL.
pub const I2C_NAME_SIZE: usize = 20;

/// A 7-bit address outside the ranges the I2C protocol reserves (`0x00..=0x07`, `0x78..=0x7f`).
pub const fn is_valid_7bit_addr(addr: u16) -> bool {
    addr >= 0x08 && addr <= 0x77
}

/// A device type name fits the client `type` buffer.
pub const fn is_valid_type(ty: &str) -> bool {
    !ty.is_empty() && ty.len() < I2C_NAME_SIZE
}

/// Template for creating an I2C device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardInfo {
    /// Device type, used for driver matching.
    pub ty: &'static str,
    pub addr: u16,
    /// Fixed device name; the device is named `<adapter>-<addr>` when not set.
    pub dev_name: Option<&'static str>,
    pub swnode: Option<&'static SoftwareNode>,
}

impl BoardInfo {
    pub const fn new(ty: &'static str, addr: u16) -> Self {
        Self {
            ty,
            addr,
            dev_name: None,
            swnode: None,
        }
    }

    pub const fn with_dev_name(mut self, dev_name: &'static str) -> Self {
        self.dev_name = Some(dev_name);
        self
    }

    pub const fn with_swnode(mut self, swnode: &'static SoftwareNode) -> Self {
        self.swnode = Some(swnode);
        self
    }

    pub const fn is_valid(&self) -> bool {
        is_valid_type(self.ty) && is_valid_7bit_addr(self.addr)
    }
}

/// A counted reference to an I2C adapter. Hand it back with [`I2cCore::put_adapter`].
#[derive(Debug, PartialEq, Eq)]
pub struct I2cAdapter {
    /// Bus number.
    pub nr: i32,
    /// Opaque value owned by the I2C core.
    pub id: usize,
}

/// A registered I2C device. Owned by whoever registered it until handed back to
/// [`I2cCore::unregister_device`].
#[derive(Debug, PartialEq, Eq)]
pub struct I2cClient {
    id: usize,
    adapter_nr: i32,
    addr: u16,
    ty: &'static str,
    dev_name: Option<&'static str>,
}

impl I2cClient {
    /// Used by the I2C core when it registers `info` on `adapter`.
    pub fn new(id: usize, adapter: &I2cAdapter, info: &BoardInfo) -> Self {
        Self {
            id,
            adapter_nr: adapter.nr,
            addr: info.addr,
            ty: info.ty,
            dev_name: info.dev_name,
        }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn adapter_nr(&self) -> i32 {
        self.adapter_nr
    }

    #[inline]
    pub fn addr(&self) -> u16 {
        self.addr
    }

    #[inline]
    pub fn ty(&self) -> &'static str {
        self.ty
    }

    /// Name of the device in the device model.
    pub fn device_name(&self) -> String {
        match self.dev_name {
            Some(name) => format!("i2c-{}", name),
            None => format!("{}-{:04x}", self.adapter_nr, self.addr),
        }
    }
}

/// The I2C core of the host OS.
pub trait I2cCore {
    /// Find the adapter bound to the ACPI node `handle`, taking a reference on it.
    fn find_adapter_by_handle(&self, handle: AcpiHandle) -> Option<I2cAdapter>;

    /// Drop a reference taken by [`I2cCore::find_adapter_by_handle`].
    fn put_adapter(&self, adapter: I2cAdapter);

    /// Register a device described by `info` on `adapter`. The new client holds its own
    /// reference on the adapter.
    fn new_client_device(&self, adapter: &I2cAdapter, info: &BoardInfo) -> Result<I2cClient, Errno>;

    /// Unregister a device. Never fails from the caller's point of view.
    fn unregister_device(&self, client: I2cClient);
}

/// Register `info` on the I2C adapter the ACPI node `adapter_path` describes.
pub fn instantiate_client<N, C>(
    namespace: &N,
    core: &C,
    adapter_path: &AcpiPath<'static>,
    info: &BoardInfo) -> Result<I2cClient, Error>
    where N: Namespace + ?Sized, C: I2cCore + ?Sized {
    let handle = match namespace.get_handle(adapter_path) {
        Some(handle) => handle,
        None => {
            error!(target: PR_FMT, "Error could not get {} handle", adapter_path);
            return Err(Error::BusNotFound { path: *adapter_path });
        }
    };

    let adapter = match core.find_adapter_by_handle(handle) {
        Some(adapter) => adapter,
        None => {
            error!(target: PR_FMT, "Error could not get {} adapter", adapter_path);
            return Err(Error::BusNotFound { path: *adapter_path });
        }
    };

    let client = core.new_client_device(&adapter, info);
    core.put_adapter(adapter);

    client.map_err(|errno| {
        error!(target: PR_FMT, "Error could not instantiate {} on {}: {}", info.ty, adapter_path, errno);
        Error::RegistrationFailed { ty: info.ty, errno }
    })
}
