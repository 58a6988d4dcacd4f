//! Plain value types shared by the transaction-view workspace. This crate
//! doesn't contain any business logic and is to be as primitive as possible.

#![deny(clippy::arithmetic_side_effects)]
#![deny(clippy::cast_possible_truncation)]
#![deny(unused_crate_dependencies)]
#![deny(missing_docs)]
#![deny(warnings)]

mod fixed;
mod primitives;

pub use fixed::{
    Address,
    AssetId,
    Bytes32,
    Nonce,
};
pub use primitives::{
    RawPointer,
    Word,
};
