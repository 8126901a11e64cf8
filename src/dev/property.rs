//! Software nodes: firmware-independent device properties.
//!
//! Used to hand properties to a driver when the firmware does not describe the device.

/// Value of a [`PropertyEntry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    StringArray(&'static [&'static str]),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PropertyEntry {
    pub name: &'static str,
    pub value: PropertyValue,
}

impl PropertyEntry {
    pub const fn string_array(name: &'static str, a: &'static [&'static str]) -> Self {
        Self { name, value: PropertyValue::StringArray(a) }
    }
}

/// A set of properties attached to a device at registration time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SoftwareNode {
    pub properties: &'static [PropertyEntry],
}

impl SoftwareNode {
    pub const fn new(properties: &'static [PropertyEntry]) -> Self {
        Self { properties }
    }

    pub fn property(&self, name: &str) -> Option<&'static PropertyValue> {
        self.properties.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    pub fn read_string_array(&self, name: &str) -> Option<&'static [&'static str]> {
        match self.property(name)? {
            PropertyValue::StringArray(a) => Some(*a),
        }
    }
}
