//! Device definitions.
//!
//! [`ClientList`] owns the devices a board registered, in registration order. While a
//! board is being brought up it sits inside a [`Rollback`] guard, which unregisters
//! everything again unless the bring-up is committed.

pub mod property;

use alloc::vec::Vec;
use crate::driver::i2c::{I2cClient, I2cCore};
use crate::logk::PR_FMT;


#[derive(Debug, Default)]
pub struct ClientList {
    clients: Vec<I2cClient>,
}

impl ClientList {
    pub const fn new() -> Self {
        Self {
            clients: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, client: I2cClient) {
        self.clients.push(client);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// The clients in registration order.
    #[inline]
    pub fn as_slice(&self) -> &[I2cClient] {
        &self.clients
    }

    pub fn find(&self, ty: &str) -> Option<&I2cClient> {
        self.clients.iter().find(|c| c.ty() == ty)
    }

    /// Unregister all clients, last registered first.
    pub fn unregister_all<C: I2cCore + ?Sized>(mut self, core: &C) {
        while let Some(client) = self.clients.pop() {
            debug!(target: PR_FMT, "unregister {}", client.device_name());
            core.unregister_device(client);
        }
    }
}

/// Undo stack for a multi-device bring-up. Dropping it without [`Rollback::commit`]
/// unregisters every pushed client in reverse order.
pub struct Rollback<'a, C: I2cCore + ?Sized> {
    core: &'a C,
    list: Option<ClientList>,
}

impl<'a, C: I2cCore + ?Sized> Rollback<'a, C> {
    pub fn new(core: &'a C) -> Self {
        Self {
            core,
            list: Some(ClientList::new()),
        }
    }

    pub fn push(&mut self, client: I2cClient) {
        if let Some(list) = self.list.as_mut() {
            list.push(client);
        }
    }

    /// Keep the registered clients.
    pub fn commit(mut self) -> ClientList {
        self.list.take().unwrap_or_default()
    }
}

impl<'a, C: I2cCore + ?Sized> Drop for Rollback<'a, C> {
    fn drop(&mut self) {
        if let Some(list) = self.list.take() {
            if !list.is_empty() {
                warn!(target: PR_FMT, "rolling back {} registered device(s)", list.len());
            }
            list.unregister_all(self.core);
        }
    }
}
