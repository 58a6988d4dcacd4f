//! Scalar primitives of the serialized transaction format.

use derive_more::{
    Display,
    From,
    Into,
};

/// Width of every fixed field fetched from the serialized transaction image.
pub type Word = u64;

/// Opaque pointer into the transaction's serialized memory image.
///
/// The view layer never dereferences a `RawPointer` itself; it only hands the
/// pointer back to the host when a region copy is requested.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct RawPointer(Word);

impl RawPointer {
    /// Wraps a raw word fetched from the host.
    pub const fn new(raw: Word) -> Self {
        Self(raw)
    }

    /// The raw word form the host understands.
    pub const fn raw(self) -> Word {
        self.0
    }

    /// Pointer `bytes` further into the same region.
    ///
    /// Saturates at the top of the address space; an out-of-range pointer is
    /// the host's concern, exactly like an out-of-range index.
    pub const fn offset(self, bytes: Word) -> Self {
        Self(self.0.saturating_add(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_pointer_offset_moves_forward() {
        let ptr = RawPointer::new(0x100);
        assert_eq!(ptr.offset(8), RawPointer::new(0x108));
        assert_eq!(ptr.offset(0), ptr);
    }

    #[test]
    fn raw_pointer_offset_saturates() {
        let ptr = RawPointer::new(Word::MAX);
        assert_eq!(ptr.offset(1), RawPointer::new(Word::MAX));
    }

    #[test]
    fn raw_pointer_round_trips_through_word() {
        let ptr: RawPointer = 0xDEAD_u64.into();
        let raw: Word = ptr.into();
        assert_eq!(raw, 0xDEAD);
    }
}
