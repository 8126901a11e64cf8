//! OS error numbers.
//!
//! Host callbacks and the module entry points report failures with the classic errno
//! values. [`Errno`] stores the positive value; the negated C-style return code is
//! available through [`Errno::to_return_code`].

use core::fmt;
use core::num::NonZeroI32;


#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Errno(NonZeroI32);

impl Errno {
    /// Construct from a positive or negative errno value. Returns `None` for 0 and for
    /// `i32::MIN`, which has no positive counterpart.
    #[inline]
    pub const fn new(errno: i32) -> Option<Self> {
        let errno = if errno < 0 {
            match errno.checked_neg() {
                Some(v) => v,
                None => return None,
            }
        } else {
            errno
        };
        match NonZeroI32::new(errno) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Positive errno value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get()
    }

    /// Negated value, as returned from a C module init routine.
    #[inline]
    pub const fn to_return_code(self) -> i32 {
        -self.0.get()
    }

    const fn name(self) -> Option<&'static str> {
        match self.0.get() {
            12 => Some("ENOMEM"),
            16 => Some("EBUSY"),
            17 => Some("EEXIST"),
            19 => Some("ENODEV"),
            22 => Some("EINVAL"),
            _ => None,
        }
    }
}

macro_rules! declare_errno {
    ($($name:ident = $val:literal;)+) => {
        $(
            pub const $name: Errno = match NonZeroI32::new($val) {
                Some(v) => Errno(v),
                None => panic!("errno must be non-zero"),
            };
        )+
    };
}

declare_errno! {
    ENOMEM = 12;
    EBUSY = 16;
    EEXIST = 17;
    ENODEV = 19;
    EINVAL = 22;
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Errno({})", self.0),
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.to_return_code()),
            None => write!(f, "error {}", self.to_return_code()),
        }
    }
}

impl From<Errno> for NonZeroI32 {
    fn from(e: Errno) -> Self {
        e.0
    }
}
