//! Board descriptions: which systems a board-file applies to and which devices it
//! instantiates on them.

mod mipad2;

pub use mipad2::{Mipad2, MIPAD2_IDS, PERIPHERALS};

use core::fmt;
use crate::base::errno::{Errno, ENODEV};
use crate::driver::acpi::AcpiPath;
use crate::driver::i2c::BoardInfo;


/// A device hidden by the firmware: the ACPI path of its I2C adapter and the board info
/// to register there.
#[derive(Copy, Clone, Debug)]
pub struct Peripheral {
    pub adapter_path: AcpiPath<'static>,
    pub info: BoardInfo,
}

impl Peripheral {
    pub const fn new(adapter_path: &'static str, info: BoardInfo) -> Self {
        Self {
            adapter_path: AcpiPath::from_static(adapter_path),
            info,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The ACPI path does not resolve to a live I2C adapter.
    BusNotFound { path: AcpiPath<'static> },
    /// The I2C core refused to register the device.
    RegistrationFailed { ty: &'static str, errno: Errno },
}

impl Error {
    pub fn errno(&self) -> Errno {
        match self {
            Error::BusNotFound { .. } => ENODEV,
            Error::RegistrationFailed { errno, .. } => *errno,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BusNotFound { path } => write!(f, "no I2C adapter at {}", path),
            Error::RegistrationFailed { ty, errno } => write!(f, "failed to register {}: {}", ty, errno),
        }
    }
}

impl From<Error> for Errno {
    fn from(e: Error) -> Self {
        e.errno()
    }
}
