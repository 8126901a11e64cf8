//! Synchronization primitives.

pub mod spin_lock;
