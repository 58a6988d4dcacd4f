//! Generic decoding of predicate data into caller-chosen value types.

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
use serde::de::DeserializeOwned;
use txview_types::Word;

/// A value type that can be decoded out of a predicate-data region.
///
/// Blanket-implemented for every [`serde::Deserialize`] type through the
/// workspace's binary codec, so deriving `Deserialize` is all a caller
/// needs.
pub trait Decodable: Sized {
    /// Decodes `Self` from the exact byte region `bytes`.
    fn decode(bytes: &[u8]) -> core::result::Result<Self, DecodeError>;
}

/// A malformed encoding for the requested value type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(String);

impl From<postcard::Error> for DecodeError {
    fn from(err: postcard::Error) -> Self {
        Self(err.to_string())
    }
}

impl<T: DeserializeOwned> Decodable for T {
    fn decode(bytes: &[u8]) -> core::result::Result<Self, DecodeError> {
        postcard::from_bytes(bytes).map_err(Into::into)
    }
}

impl<'a, S> InputsView<'a, S>
where
    S: FieldSource + KindSource,
{
    /// Decodes a `T` out of the predicate-data region of the input at
    /// `index`.
    ///
    /// The region is located through the usual length-then-pointer fetches;
    /// a malformed encoding propagates as
    /// [`InputError::PredicateDataDecode`]. No validation beyond the codec's
    /// own is performed.
    pub fn input_predicate_data_decoded<T: Decodable>(&self, index: Word) -> Result<T> {
        let bytes = self.input_predicate_data(index)?;
        T::decode(&bytes)
            .map_err(|source| InputError::PredicateDataDecode { index, source })
    }
}
