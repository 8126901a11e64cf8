//! Interfaces to the host OS services the board-file relies on.
//!
//! * [`dmi`]: system identity strings and the DMI match tables;
//! * [`acpi`]: ACPI namespace paths and handle lookup;
//! * [`i2c`]: I2C adapters, board info and client registration.

pub mod acpi;
pub mod dmi;
pub mod i2c;
