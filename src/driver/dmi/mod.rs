//! DMI (SMBIOS) system identification.
//!
//! A [`SystemId`] is one entry of a match table. It matches when all of its [`StrMatch`]
//! entries match the identity strings reported by the [`DmiSource`].

use alloc::string::String;


/// The DMI identity strings a [`StrMatch`] can test, in the canonical SMBIOS order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DmiField {
    BiosVendor,
    BiosVersion,
    BiosDate,
    SysVendor,
    ProductName,
    ProductVersion,
    ProductSerial,
    BoardVendor,
    BoardName,
    BoardVersion,
    ChassisVendor,
    ChassisType,
    ChassisVersion,
}

impl DmiField {
    /// All fields, in the order used to build a modalias.
    pub const ALL: [DmiField; 13] = [
        DmiField::BiosVendor,
        DmiField::BiosVersion,
        DmiField::BiosDate,
        DmiField::SysVendor,
        DmiField::ProductName,
        DmiField::ProductVersion,
        DmiField::ProductSerial,
        DmiField::BoardVendor,
        DmiField::BoardName,
        DmiField::BoardVersion,
        DmiField::ChassisVendor,
        DmiField::ChassisType,
        DmiField::ChassisVersion,
    ];

    /// Prefix of the field in a `dmi:` modalias. `None` for fields that never show up in
    /// a modalias.
    pub const fn alias_prefix(self) -> Option<&'static str> {
        match self {
            DmiField::BiosVendor => Some("bvn"),
            DmiField::BiosVersion => Some("bvr"),
            DmiField::BiosDate => Some("bd"),
            DmiField::SysVendor => Some("svn"),
            DmiField::ProductName => Some("pn"),
            DmiField::ProductVersion => Some("pvr"),
            DmiField::ProductSerial => None,
            DmiField::BoardVendor => Some("rvn"),
            DmiField::BoardName => Some("rn"),
            DmiField::BoardVersion => Some("rvr"),
            DmiField::ChassisVendor => Some("cvn"),
            DmiField::ChassisType => Some("ct"),
            DmiField::ChassisVersion => Some("cvr"),
        }
    }
}

/// Read-only access to the identity strings of the running system.
pub trait DmiSource {
    /// Returns the string for `field`, or `None` if the firmware does not provide it.
    fn system_info(&self, field: DmiField) -> Option<&str>;
}

/// One string test of a [`SystemId`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StrMatch {
    pub field: DmiField,
    pub substr: &'static str,
    pub exact: bool,
}

impl StrMatch {
    /// The field must equal `s`.
    pub const fn exact(field: DmiField, s: &'static str) -> Self {
        Self {
            field,
            substr: s,
            exact: true,
        }
    }

    /// The field must contain `s`.
    pub const fn contains(field: DmiField, s: &'static str) -> Self {
        Self {
            field,
            substr: s,
            exact: false,
        }
    }

    pub fn matches(&self, source: &(impl DmiSource + ?Sized)) -> bool {
        match source.system_info(self.field) {
            Some(value) if self.exact => value == self.substr,
            Some(value) => value.contains(self.substr),
            None => false,
        }
    }
}

/// An entry of a DMI match table.
#[derive(Copy, Clone, Debug)]
pub struct SystemId {
    pub ident: &'static str,
    pub matches: &'static [StrMatch],
}

impl SystemId {
    pub const fn new(ident: &'static str, matches: &'static [StrMatch]) -> Self {
        Self {
            ident,
            matches,
        }
    }

    /// An entry without any test never matches.
    pub fn matches(&self, source: &(impl DmiSource + ?Sized)) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(|m| m.matches(source))
    }
}

/// Returns the first entry of `table` matching the running system.
pub fn first_match<'t, S: DmiSource + ?Sized>(source: &S, table: &'t [SystemId]) -> Option<&'t SystemId> {
    table.iter().find(|id| id.matches(source))
}

/// Build the `dmi:` modalias a module carrying `id` in its device table is loaded for.
///
/// Every value is written as `*<value>*`; spaces, control characters and `:` are
/// dropped from the value.
pub fn modalias(id: &SystemId) -> String {
    let mut alias = String::from("dmi*");
    for field in DmiField::ALL {
        let prefix = match field.alias_prefix() {
            Some(prefix) => prefix,
            None => continue,
        };
        for m in id.matches.iter().filter(|m| m.field == field) {
            alias.push(':');
            alias.push_str(prefix);
            alias.push('*');
            alias.extend(m.substr.chars().filter(|&c| c > ' ' && c != ':'));
            alias.push('*');
        }
    }
    alias.push(':');
    alias
}
