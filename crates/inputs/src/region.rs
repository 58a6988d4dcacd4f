//! Extraction of variable-length byte regions into owned buffers.

use crate::{
    error::{
        InputError,
        Result,
    },
    ports::{
        FieldSource,
        KindSource,
    },
    view::InputsView,
};
use core::fmt;
use txview_types::Word;

/// The variable-length regions an input can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Predicate bytecode of a coin or message input.
    Predicate,
    /// Auxiliary data consumed by predicate evaluation.
    PredicateData,
    /// Payload of a message input.
    MessageData,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::Predicate => "predicate",
            RegionKind::PredicateData => "predicate data",
            RegionKind::MessageData => "message data",
        };
        f.write_str(name)
    }
}

impl<'a, S> InputsView<'a, S>
where
    S: FieldSource + KindSource,
{
    /// Copies the `kind` region of the input at `index` into a freshly
    /// allocated buffer.
    ///
    /// The order is fixed: the length field is fetched before the source
    /// pointer is handed back to the host, and the copy uses exactly that
    /// length. `offset` shifts where the copy starts within the region and
    /// is only meaningful for message payloads; it is not bounds-checked
    /// against the declared length beyond what the fetch implies.
    ///
    /// Requesting a region the resolved variant doesn't define is a format
    /// violation, not an empty buffer.
    pub fn extract(&self, index: Word, kind: RegionKind, offset: Word) -> Result<Vec<u8>> {
        let variant = self.input_type(index)?;
        let not_applicable = || {
            tracing::warn!(index, %kind, %variant, "region not defined for input variant");
            InputError::RegionNotApplicable {
                index,
                region: kind,
                variant,
            }
        };

        // Length first, then pointer. Never the other way around.
        let len = match kind {
            RegionKind::Predicate => self.input_predicate_length(index)?,
            RegionKind::PredicateData => self.input_predicate_data_length(index)?,
            RegionKind::MessageData => self.input_message_data_length(index)?,
        }
        .ok_or_else(not_applicable)?;
        let ptr = match kind {
            RegionKind::Predicate => self.input_predicate_pointer(index)?,
            RegionKind::PredicateData => self.input_predicate_data_pointer(index)?,
            RegionKind::MessageData => self.input_message_data_pointer(index)?,
        }
        .ok_or_else(not_applicable)?;

        let len = Word::from(len);
        tracing::trace!(index, %kind, len, "extracting input region");
        Ok(self.source().region(ptr.offset(offset), len).to_vec())
    }

    /// Owned copy of the predicate bytecode of the input at `index`.
    pub fn input_predicate(&self, index: Word) -> Result<Vec<u8>> {
        self.extract(index, RegionKind::Predicate, 0)
    }

    /// Owned copy of the raw predicate data of the input at `index`.
    pub fn input_predicate_data(&self, index: Word) -> Result<Vec<u8>> {
        self.extract(index, RegionKind::PredicateData, 0)
    }

    /// Owned copy of the message payload of the input at `index`, starting
    /// `offset` bytes into the payload.
    pub fn input_message_data(&self, index: Word, offset: Word) -> Result<Vec<u8>> {
        self.extract(index, RegionKind::MessageData, offset)
    }
}
