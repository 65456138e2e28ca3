use core::ops::{BitOr, BitOrAssign};

/// Transfer codings a server declared for the response body.
///
/// The client only reports them; the body stream always yields the bytes
/// exactly as they arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransferEncoding(u8);

impl TransferEncoding {
    /// No `Transfer-Encoding` header, or one naming no known coding.
    pub const NORMAL: Self = Self(0);
    /// The body uses the chunked transfer coding.
    pub const CHUNKED: Self = Self(1);
    /// The body is gzip-compressed.
    pub const GZIP: Self = Self(1 << 1);

    /// Returns whether every flag in `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no coding is declared.
    pub fn is_normal(self) -> bool {
        self.0 == 0
    }

    /// The raw flag bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Derives the flags from the text of a `Transfer-Encoding` header.
    ///
    /// Coding names are found by substring search, so the list separator and
    /// spacing do not matter.
    pub(crate) fn from_header_value(value: &[u8]) -> Self {
        let mut flags = Self::NORMAL;
        if super::scan::contains(value, b"chunked") {
            flags |= Self::CHUNKED;
        }
        if super::scan::contains(value, b"gzip") {
            flags |= Self::GZIP;
        }
        flags
    }
}

impl BitOr for TransferEncoding {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TransferEncoding {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransferEncoding {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "TransferEncoding {{ chunked: {}, gzip: {} }}",
            self.contains(Self::CHUNKED),
            self.contains(Self::GZIP)
        );
    }
}
