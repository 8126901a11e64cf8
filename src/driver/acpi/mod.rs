//! ACPI namespace paths and handle lookup.

use core::fmt;
use crate::base::errno::{Errno, EINVAL};


/// Maximum length of one name segment.
pub const NAME_SEG_SIZE: usize = 4;

/// An absolute ACPI namespace path such as `\_SB_.PCI0.I2C1`.
///
/// The path starts with `\` followed by one or more name segments separated by `.`. A
/// segment is 1 to 4 characters out of `[A-Z0-9_]` and does not start with a digit.
/// Relative paths (`^` prefixes, bare names) are not accepted.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct AcpiPath<'a>(&'a str);

impl AcpiPath<'static> {
    /// Wrap a compiled-in path. Panics on an invalid path, which is a build error when
    /// evaluated in a `const` or `static` initializer.
    pub const fn from_static(path: &'static str) -> Self {
        assert!(Self::is_valid(path), "invalid ACPI path");
        Self(path)
    }
}

impl<'a> AcpiPath<'a> {
    pub fn parse(path: &'a str) -> Result<Self, Errno> {
        if Self::is_valid(path) {
            Ok(Self(path))
        } else {
            Err(EINVAL)
        }
    }

    pub const fn is_valid(path: &str) -> bool {
        let b = path.as_bytes();
        if b.len() < 2 || b[0] != b'\\' {
            return false;
        }

        let mut i = 1;
        let mut seg_len = 0;
        while i < b.len() {
            let c = b[i];
            if c == b'.' {
                if seg_len == 0 {
                    return false;
                }
                seg_len = 0;
            } else {
                let ok = match c {
                    b'A'..=b'Z' | b'_' => true,
                    b'0'..=b'9' => seg_len != 0,
                    _ => false,
                };
                if !ok || seg_len == NAME_SEG_SIZE {
                    return false;
                }
                seg_len += 1;
            }
            i += 1;
        }

        seg_len != 0
    }

    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Iterate the name segments, from the root down.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        let s: &'a str = self.0;
        s[1..].split('.')
    }
}

impl fmt::Display for AcpiPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Debug for AcpiPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AcpiPath({})", self.0)
    }
}

/// A resolved node of the ACPI namespace. The value is opaque to this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AcpiHandle(pub usize);

/// The firmware namespace resolver.
pub trait Namespace {
    /// Look up `path`. Returns `None` if the firmware does not describe such a node.
    fn get_handle(&self, path: &AcpiPath<'_>) -> Option<AcpiHandle>;
}
