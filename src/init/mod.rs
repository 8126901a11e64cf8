//! Module init/exit entry points.
//!
//! The host calls [`module_init`] once at load time and [`module_exit`] once at unload
//! time. Between the two calls the registered board is kept in a static slot.

use alloc::string::String;
use crate::base::errno::{Errno, EBUSY, ENODEV};
use crate::base::sync::spin_lock::SpinLock;
use crate::board::{Mipad2, MIPAD2_IDS};
use crate::driver::acpi::Namespace;
use crate::driver::dmi::{self, DmiSource};
use crate::driver::i2c::I2cCore;
use crate::logk::PR_FMT;


/// Everything the board-file needs from the host OS.
pub trait Platform: DmiSource + Namespace + I2cCore {}

impl<T: DmiSource + Namespace + I2cCore + ?Sized> Platform for T {}

pub struct ModuleInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub license: &'static str,
}

pub static MODULE_INFO: ModuleInfo = ModuleInfo {
    name: "xiaomi-mipad2",
    description: "Xiaomi Mi Pad 2 board-file",
    author: "Hans de Goede",
    license: "GPL",
};

/// The modalias the host should autoload this module for.
pub fn module_alias() -> String {
    dmi::modalias(&MIPAD2_IDS[0])
}

/// Successful outcomes of [`module_init`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitStatus {
    /// The devices are registered.
    Active,
    /// Not running on a Mi Pad 2; nothing was done.
    NotApplicable,
}

impl InitStatus {
    /// C-style init return code. A non-matching system reports `-ENODEV` so that the
    /// host does not keep the module loaded.
    pub const fn return_code(self) -> i32 {
        match self {
            InitStatus::Active => 0,
            InitStatus::NotApplicable => ENODEV.to_return_code(),
        }
    }
}

/// C-style return code of a [`module_init`] result.
pub fn init_return_code(result: &Result<InitStatus, Errno>) -> i32 {
    match result {
        Ok(status) => status.return_code(),
        Err(errno) => errno.to_return_code(),
    }
}

static ACTIVE: SpinLock<Option<Mipad2>> = SpinLock::new(None);

pub fn module_init<P: Platform + ?Sized>(platform: &P) -> Result<InitStatus, Errno> {
    if ACTIVE.lock().is_some() {
        warn!(target: PR_FMT, "already initialized");
        return Err(EBUSY);
    }

    // The lock is not held across the host callbacks.
    match Mipad2::probe(platform, platform, platform) {
        Ok(Some(board)) => {
            *ACTIVE.lock() = Some(board);
            Ok(InitStatus::Active)
        }
        Ok(None) => Ok(InitStatus::NotApplicable),
        Err(e) => Err(e.errno()),
    }
}

pub fn module_exit<P: Platform + ?Sized>(platform: &P) {
    let board = ACTIVE.lock().take();
    match board {
        Some(board) => board.remove(platform),
        None => debug!(target: PR_FMT, "exit without active devices"),
    }
}

/// Whether the devices are currently registered.
pub fn is_active() -> bool {
    ACTIVE.lock().is_some()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::errno::EINVAL;

    #[test]
    fn return_codes() {
        assert_eq!(init_return_code(&Ok(InitStatus::Active)), 0);
        assert_eq!(init_return_code(&Ok(InitStatus::NotApplicable)), -19);
        assert_eq!(init_return_code(&Err(EINVAL)), -22);
    }

    #[test]
    fn alias() {
        assert_eq!(module_alias(), "dmi*:svn*XiaomiInc*:pn*Mipad2*:");
        assert_eq!(MODULE_INFO.name, PR_FMT);
    }
}
