//! Xiaomi Mi Pad 2.
//!
//! Instantiates the BQ27520 fuel-gauge and the KTD2026 RGB notification LED controller.

use sa::const_assert;
use crate::dev::{ClientList, Rollback};
use crate::dev::property::{PropertyEntry, SoftwareNode};
use crate::driver::acpi::Namespace;
use crate::driver::dmi::{self, DmiField, DmiSource, StrMatch, SystemId};
use crate::driver::i2c::{self, BoardInfo, I2cClient, I2cCore};
use crate::logk::PR_FMT;
use super::{Error, Peripheral};


/********** BQ27520 fuel-gauge info **********/
const BQ27520_ADAPTER: &str = "\\_SB_.PCI0.I2C1";

const BQ27520_SUPPLIERS: [&str; 1] = ["bq25890-charger"];

const BQ27520_NODE: SoftwareNode = SoftwareNode::new(&[
    PropertyEntry::string_array("supplied-from", &BQ27520_SUPPLIERS),
]);

const BQ27520_BOARD_INFO: BoardInfo = BoardInfo::new("bq27520", 0x55)
    .with_dev_name("bq27520")
    .with_swnode(&BQ27520_NODE);

/********** KTD2026 RGB notification LED controller **********/
const KTD2026_ADAPTER: &str = "\\_SB_.PCI0.I2C3";

const KTD2026_BOARD_INFO: BoardInfo = BoardInfo::new("ktd2026", 0x30)
    .with_dev_name("ktd2026");

const_assert!(BQ27520_BOARD_INFO.is_valid());
const_assert!(KTD2026_BOARD_INFO.is_valid());

/// Devices to instantiate, in registration order.
pub static PERIPHERALS: [Peripheral; 2] = [
    Peripheral::new(BQ27520_ADAPTER, BQ27520_BOARD_INFO),
    Peripheral::new(KTD2026_ADAPTER, KTD2026_BOARD_INFO),
];

/********** DMI-match, probe(), etc. **********/
pub static MIPAD2_IDS: [SystemId; 1] = [
    SystemId::new("Xiaomi Mi Pad 2", &[
        StrMatch::exact(DmiField::SysVendor, "Xiaomi Inc"),
        StrMatch::exact(DmiField::ProductName, "Mipad2"),
    ]),
];

/// The board-file while its devices are registered.
///
/// A value exists only when every entry of [`PERIPHERALS`] is registered; [`Mipad2::remove`]
/// consumes it.
#[derive(Debug)]
pub struct Mipad2 {
    clients: ClientList,
}

impl Mipad2 {
    /// Check for a Mi Pad 2 and register its hidden devices.
    ///
    /// Returns `Ok(None)` when running on other hardware. On error, devices registered
    /// by this call have been unregistered again.
    pub fn probe<D, N, C>(dmi_src: &D, namespace: &N, core: &C) -> Result<Option<Self>, Error>
        where D: DmiSource + ?Sized, N: Namespace + ?Sized, C: I2cCore + ?Sized {
        let id = match dmi::first_match(dmi_src, &MIPAD2_IDS) {
            Some(id) => id,
            None => {
                debug!(target: PR_FMT, "not a Xiaomi Mi Pad 2, nothing to do");
                return Ok(None);
            }
        };
        debug!(target: PR_FMT, "found {}", id.ident);

        let clients = register_all(namespace, core, &PERIPHERALS)?;
        for c in clients.as_slice() {
            info!(target: PR_FMT, "instantiated {} at {:#04x} ({})", c.ty(), c.addr(), c.device_name());
        }

        Ok(Some(Self { clients }))
    }

    /// Unregister the devices, in reverse registration order.
    pub fn remove<C: I2cCore + ?Sized>(self, core: &C) {
        self.clients.unregister_all(core);
    }

    /// The registered devices, in registration order.
    pub fn clients(&self) -> &[I2cClient] {
        self.clients.as_slice()
    }

    pub fn fuel_gauge(&self) -> Option<&I2cClient> {
        self.clients.find(BQ27520_BOARD_INFO.ty)
    }

    pub fn led_controller(&self) -> Option<&I2cClient> {
        self.clients.find(KTD2026_BOARD_INFO.ty)
    }
}

/// Register every peripheral of `table`, or none of them.
fn register_all<N, C>(namespace: &N, core: &C, table: &[Peripheral]) -> Result<ClientList, Error>
    where N: Namespace + ?Sized, C: I2cCore + ?Sized {
    let mut rollback = Rollback::new(core);
    for p in table {
        let client = i2c::instantiate_client(namespace, core, &p.adapter_path, &p.info)?;
        rollback.push(client);
    }
    Ok(rollback.commit())
}
