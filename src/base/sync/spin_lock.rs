//! Provides the spin-lock implementation.

use core::cell::UnsafeCell;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicBool, Ordering};


/// A spin lock object works like the C type, it only provides the lock semantic but
/// does not manage any data.
#[repr(C)]
pub struct SpinLockPure {
    lock: AtomicBool,
}

impl SpinLockPure {
    #[inline]
    pub const fn new() -> Self {
        Self {
            lock: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn lock(&self) {
        while self.lock.compare_exchange_weak(
            false, true, Ordering::AcqRel, Ordering::Relaxed).is_err() {
            core::hint::spin_loop();
        }
    }

    #[inline]
    pub fn unlock(&self) {
        self.lock.store(false, Ordering::Release);
    }
}

impl Default for SpinLockPure {
    fn default() -> Self {
        Self::new()
    }
}

/// A spin lock protecting a value of `T`. The value is reachable only through the
/// [`SpinLockGuard`] returned by [`SpinLock::lock`].
pub struct SpinLock<T> {
    lock: SpinLockPure,
    data: UnsafeCell<T>,
}

// SAFETY: the data is only handed out while `lock` is held.
unsafe impl<T: Send> Sync for SpinLock<T> {}

impl<T> SpinLock<T> {
    #[inline]
    pub const fn new(data: T) -> Self {
        Self {
            lock: SpinLockPure::new(),
            data: UnsafeCell::new(data),
        }
    }

    #[inline]
    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        self.lock.lock();
        SpinLockGuard {
            lock: self
        }
    }
}

pub struct SpinLockGuard<'a, T> {
    lock: &'a SpinLock<T>,
}

impl<'a, T> Deref for SpinLockGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: the guard proves the lock is held.
        unsafe { &*self.lock.data.get() }
    }
}

impl<'a, T> DerefMut for SpinLockGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the guard proves the lock is held, and `&mut self` makes it unique.
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<'a, T> Drop for SpinLockGuard<'a, T> {
    fn drop(&mut self) {
        self.lock.lock.unlock();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let lock = SpinLock::new(1u32);
        {
            let mut g = lock.lock();
            *g += 1;
        }
        // Would spin forever if the first guard had kept the lock.
        assert_eq!(*lock.lock(), 2);
        *lock.lock() += 1;
        assert_eq!(*lock.lock(), 3);
    }

    #[test]
    fn pure_lock_semantic() {
        let lock = SpinLockPure::new();
        lock.lock();
        assert!(lock.lock.load(Ordering::Acquire));
        lock.unlock();
        assert!(!lock.lock.load(Ordering::Acquire));
        lock.lock();
        lock.unlock();
    }
}
