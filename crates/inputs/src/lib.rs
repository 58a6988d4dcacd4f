//! Typed, safe accessors over the input section of a transaction's
//! serialized representation.
//!
//! A transaction carries an ordered list of inputs; each input is a coin, a
//! contract reference, or a message, and each variant defines its own subset
//! of fields. The host execution environment exposes the serialized image
//! only through an opcode-like tagged fetch ([`ports::FieldSource`]), so this
//! crate is the projection layer that resolves the variant of an input,
//! answers field requests with `Some`/`None` per variant applicability, and
//! copies variable-length regions (predicate bytecode, predicate data,
//! message payloads) into freshly owned buffers.
//!
//! The layer is read-only: nothing here mutates the transaction image, and
//! every extracted buffer is an independent copy owned by the caller.

#![deny(clippy::arithmetic_side_effects)]
#![deny(clippy::cast_possible_truncation)]
#![deny(unused_crate_dependencies)]
#![deny(missing_docs)]
#![deny(warnings)]

pub mod decode;
pub mod error;
pub mod input;
pub mod ports;
pub mod region;
pub mod tags;
pub mod view;

pub use decode::{
    Decodable,
    DecodeError,
};
pub use error::{
    InputError,
    Result,
};
pub use input::InputType;
pub use region::RegionKind;
pub use view::InputsView;
