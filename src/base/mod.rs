//! Basic types shared by the whole crate.

pub mod errno;
pub mod sync;
