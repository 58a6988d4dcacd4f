//! Host-side collaborators consumed by the view layer.

use crate::tags::{
    FieldTag,
    TxKind,
};
use txview_types::{
    Bytes32,
    RawPointer,
    Word,
};

/// Tagged access to the fields of the serialized transaction, supplied by
/// the host execution environment.
///
/// Indices are passed through untouched: out-of-range behavior is the host's
/// responsibility, this layer never bounds-checks them against the input
/// count.
pub trait FieldSource {
    /// Fetches the fixed-width word field `tag` of the input at `index`.
    fn fetch_word(&self, index: Word, tag: FieldTag) -> Word;

    /// Fetches the 32-byte field `tag` of the input at `index`.
    fn fetch_bytes32(&self, index: Word, tag: FieldTag) -> Bytes32;

    /// Borrows `len` bytes of transaction memory starting at `ptr`.
    ///
    /// The view layer always fetches the region's length field before calling
    /// this, and copies out of the borrow immediately; the underlying memory
    /// is never retained or mutated.
    fn region(&self, ptr: RawPointer, len: Word) -> &[u8];
}

/// Reports which transaction kind encloses the input list.
pub trait KindSource {
    /// The kind of the enclosing transaction.
    fn transaction_kind(&self) -> TxKind;
}
