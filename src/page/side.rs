//! Page side selector
use log::warn;

/// Which face of a page an operation targets. Values form a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Side {
    Front = 1,
    Back = 2,
    Both = 3,
}

impl Side {
    pub const fn bits(self) -> u32 {
        self as u32
    }

    pub const fn includes_front(self) -> bool {
        self.bits() & Side::Front.bits() != 0
    }

    pub const fn includes_back(self) -> bool {
        self.bits() & Side::Back.bits() != 0
    }

    /// Unknown values fall back to `Back`
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Front,
            2 => Self::Back,
            3 => Self::Both,
            other => {
                warn!("unknown page side {}, using back", other);
                Self::Back
            }
        }
    }
}

impl From<u32> for Side {
    fn from(bits: u32) -> Self {
        Side::from_bits(bits)
    }
}
