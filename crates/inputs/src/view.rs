//! Variant-aware field accessors over the serialized input list.

use crate::{
    error::{
        InputError,
        Result,
    },
    input::InputType,
    ports::{
        FieldSource,
        KindSource,
    },
    tags::FieldTag,
};
use txview_types::{
    Address,
    AssetId,
    Nonce,
    RawPointer,
    Word,
};

/// Read-only projection over the input list of the enclosing transaction.
///
/// Every accessor re-resolves the input's variant from the discriminant
/// field and either issues the single tagged fetch the field is statically
/// associated with, or answers `None` without touching the image. Nothing is
/// cached and nothing is mutated; callers that want to avoid re-resolution
/// can cache [`InputsView::input_type`] themselves.
#[derive(Debug, Clone, Copy)]
pub struct InputsView<'a, S> {
    source: &'a S,
}

impl<'a, S> InputsView<'a, S>
where
    S: FieldSource + KindSource,
{
    /// Creates a view over the host-provided `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub(crate) fn source(&self) -> &'a S {
        self.source
    }

    /// Number of inputs carried by the enclosing transaction.
    pub fn input_count(&self) -> Word {
        let tags = self.source.transaction_kind().tags();
        self.source.fetch_word(0, tags.inputs_count)
    }

    /// Pointer to the serialized input at `index`.
    pub fn input_pointer(&self, index: Word) -> RawPointer {
        let tags = self.source.transaction_kind().tags();
        RawPointer::new(self.source.fetch_word(index, tags.input_at_index))
    }

    /// Resolves the variant of the input at `index`.
    ///
    /// Deterministic and idempotent for a given index within one
    /// transaction. A discriminant outside the closed set is a format
    /// violation in the host's image, never a fourth variant.
    pub fn input_type(&self, index: Word) -> Result<InputType> {
        let discriminant = self.source.fetch_word(index, FieldTag::InputType);
        InputType::from_discriminant(discriminant).ok_or_else(|| {
            tracing::warn!(index, discriminant, "unknown input discriminant");
            InputError::UnknownDiscriminant {
                index,
                discriminant,
            }
        })
    }

    /// Iterates `(index, variant)` pairs over the whole input list.
    pub fn inputs(&self) -> impl Iterator<Item = Result<(Word, InputType)>> + '_ {
        (0..self.input_count()).map(move |index| Ok((index, self.input_type(index)?)))
    }

    /// Amount carried by the input. Defined for coin and message inputs.
    pub fn input_amount(&self, index: Word) -> Result<Option<Word>> {
        let tag = match self.input_type(index)? {
            InputType::Coin => FieldTag::InputCoinAmount,
            InputType::Message => FieldTag::InputMessageAmount,
            InputType::Contract => return Ok(None),
        };
        Ok(Some(self.source.fetch_word(index, tag)))
    }

    /// Address allowed to spend the input. Defined for coin inputs.
    pub fn input_coin_owner(&self, index: Word) -> Result<Option<Address>> {
        match self.input_type(index)? {
            InputType::Coin => {
                let owner = self.source.fetch_bytes32(index, FieldTag::InputCoinOwner);
                Ok(Some(owner.into()))
            }
            InputType::Contract | InputType::Message => Ok(None),
        }
    }

    /// Asset id of the input. Defined for coin inputs.
    pub fn input_asset_id(&self, index: Word) -> Result<Option<AssetId>> {
        match self.input_type(index)? {
            InputType::Coin => {
                let asset = self.source.fetch_bytes32(index, FieldTag::InputCoinAssetId);
                Ok(Some(asset.into()))
            }
            InputType::Contract | InputType::Message => Ok(None),
        }
    }

    /// Index of the witness unlocking the input. Defined for coin and
    /// message inputs.
    pub fn input_witness_index(&self, index: Word) -> Result<Option<u8>> {
        let tag = match self.input_type(index)? {
            InputType::Coin => FieldTag::InputCoinWitnessIndex,
            InputType::Message => FieldTag::InputMessageWitnessIndex,
            InputType::Contract => return Ok(None),
        };
        Ok(Some(self.fetch_u8(index, tag)?))
    }

    /// Length of the input's predicate bytecode. Defined for coin and
    /// message inputs.
    pub fn input_predicate_length(&self, index: Word) -> Result<Option<u16>> {
        let tag = match self.input_type(index)? {
            InputType::Coin => FieldTag::InputCoinPredicateLength,
            InputType::Message => FieldTag::InputMessagePredicateLength,
            InputType::Contract => return Ok(None),
        };
        Ok(Some(self.fetch_u16(index, tag)?))
    }

    /// Length of the input's predicate data. Defined for coin and message
    /// inputs.
    pub fn input_predicate_data_length(&self, index: Word) -> Result<Option<u16>> {
        let tag = match self.input_type(index)? {
            InputType::Coin => FieldTag::InputCoinPredicateDataLength,
            InputType::Message => FieldTag::InputMessagePredicateDataLength,
            InputType::Contract => return Ok(None),
        };
        Ok(Some(self.fetch_u16(index, tag)?))
    }

    /// Pointer to the input's predicate bytecode. Defined for coin and
    /// message inputs; dereferencing is the region extractor's job.
    pub fn input_predicate_pointer(&self, index: Word) -> Result<Option<RawPointer>> {
        let tag = match self.input_type(index)? {
            InputType::Coin => FieldTag::InputCoinPredicate,
            InputType::Message => FieldTag::InputMessagePredicate,
            InputType::Contract => return Ok(None),
        };
        Ok(Some(RawPointer::new(self.source.fetch_word(index, tag))))
    }

    /// Pointer to the input's predicate data. Defined for coin and message
    /// inputs.
    pub fn input_predicate_data_pointer(&self, index: Word) -> Result<Option<RawPointer>> {
        let tag = match self.input_type(index)? {
            InputType::Coin => FieldTag::InputCoinPredicateData,
            InputType::Message => FieldTag::InputMessagePredicateData,
            InputType::Contract => return Ok(None),
        };
        Ok(Some(RawPointer::new(self.source.fetch_word(index, tag))))
    }

    /// Sender of a message input.
    pub fn input_message_sender(&self, index: Word) -> Result<Option<Address>> {
        self.message_bytes32(index, FieldTag::InputMessageSender)
            .map(|value| value.map(Address::from))
    }

    /// Recipient of a message input.
    pub fn input_message_recipient(&self, index: Word) -> Result<Option<Address>> {
        self.message_bytes32(index, FieldTag::InputMessageRecipient)
            .map(|value| value.map(Address::from))
    }

    /// Nonce of a message input.
    pub fn input_message_nonce(&self, index: Word) -> Result<Option<Nonce>> {
        self.message_bytes32(index, FieldTag::InputMessageNonce)
            .map(|value| value.map(Nonce::from))
    }

    /// Payload length of a message input.
    pub fn input_message_data_length(&self, index: Word) -> Result<Option<u16>> {
        match self.input_type(index)? {
            InputType::Message => Ok(Some(self.fetch_u16(index, FieldTag::InputMessageDataLength)?)),
            InputType::Coin | InputType::Contract => Ok(None),
        }
    }

    /// Pointer to the payload of a message input.
    pub fn input_message_data_pointer(&self, index: Word) -> Result<Option<RawPointer>> {
        match self.input_type(index)? {
            InputType::Message => {
                let raw = self.source.fetch_word(index, FieldTag::InputMessageData);
                Ok(Some(RawPointer::new(raw)))
            }
            InputType::Coin | InputType::Contract => Ok(None),
        }
    }

    fn message_bytes32(
        &self,
        index: Word,
        tag: FieldTag,
    ) -> Result<Option<txview_types::Bytes32>> {
        match self.input_type(index)? {
            InputType::Message => Ok(Some(self.source.fetch_bytes32(index, tag))),
            InputType::Coin | InputType::Contract => Ok(None),
        }
    }

    fn fetch_u16(&self, index: Word, tag: FieldTag) -> Result<u16> {
        let value = self.source.fetch_word(index, tag);
        u16::try_from(value).map_err(|_| {
            tracing::warn!(index, ?tag, value, "word exceeds the field's declared width");
            InputError::FieldWidth { index, tag, value }
        })
    }

    fn fetch_u8(&self, index: Word, tag: FieldTag) -> Result<u8> {
        let value = self.source.fetch_word(index, tag);
        u8::try_from(value).map_err(|_| {
            tracing::warn!(index, ?tag, value, "word exceeds the field's declared width");
            InputError::FieldWidth { index, tag, value }
        })
    }
}
