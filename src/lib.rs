//! Xiaomi Mi Pad 2 board-file.
//!
//! On the Xiaomi Mi Pad 2 X86 tablet some devices are hidden when the EFI thinks the OS it
//! is booting is Windows (OSID in the DSDT is set to 1), and the EFI code thinks this as
//! soon as the bootloader is not Xiaomi's own signed Android loader.
//!
//! This crate detects the tablet through its DMI strings and instantiates the hidden
//! devices by hand, so the regular drivers can bind to them. The OS services it needs
//! (DMI, ACPI namespace, I2C core) are reached through the traits in [`driver`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;
extern crate static_assertions as sa;
extern crate alloc;

pub mod base;
pub mod board;
pub mod dev;
pub mod driver;
pub mod init;
pub mod logk;

pub use board::{Error, Mipad2};
pub use init::{module_exit, module_init, InitStatus, Platform};
