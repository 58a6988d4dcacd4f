//! Errors surfaced by the view layer.
//!
//! Only format violations and decode failures are errors. Requesting a field
//! that the resolved variant doesn't define is the normal, expected outcome
//! for most field/variant combinations and is surfaced as `Ok(None)` by the
//! accessors, never through this enum.

use crate::{
    decode::DecodeError,
    input::InputType,
    region::RegionKind,
    tags::FieldTag,
};
use txview_types::Word;

/// The alias for the view layer's result.
pub type Result<T> = core::result::Result<T, InputError>;

/// A fatal violation of the serialized transaction format, or a failed
/// decode of predicate data. Unrecoverable at this layer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// The input's discriminant is outside the closed coin/contract/message
    /// set.
    #[error("input {index} carries unknown discriminant {discriminant}")]
    UnknownDiscriminant {
        /// Index of the offending input.
        index: Word,
        /// The raw discriminant word fetched from the image.
        discriminant: Word,
    },
    /// A byte-region extraction was attempted against a variant that doesn't
    /// define that region.
    #[error("the {region} region is not defined for the {variant} input at index {index}")]
    RegionNotApplicable {
        /// Index of the offending input.
        index: Word,
        /// The requested region.
        region: RegionKind,
        /// The variant the input resolved to.
        variant: InputType,
    },
    /// A fetched word does not fit the field's declared width.
    #[error("field {tag:?} of input {index} holds {value:#x}, which exceeds the field's declared width")]
    FieldWidth {
        /// Index of the offending input.
        index: Word,
        /// Tag of the narrow field.
        tag: FieldTag,
        /// The out-of-range word.
        value: Word,
    },
    /// The predicate-data region doesn't hold a valid encoding of the
    /// requested value type.
    #[error("predicate data of input {index} failed to decode: {source}")]
    PredicateDataDecode {
        /// Index of the offending input.
        index: Word,
        /// The underlying codec error.
        #[source]
        source: DecodeError,
    },
}
