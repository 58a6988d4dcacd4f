//! The closed classification of an input.

use core::fmt;
use num_enum::TryFromPrimitive;
use txview_types::Word;

/// The variant of one entry in the transaction's input list.
///
/// The set is closed: a discriminant outside it is a format violation in the
/// host's serialized image, reported as
/// [`InputError::UnknownDiscriminant`](crate::InputError::UnknownDiscriminant)
/// rather than degraded into a guess.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u64)]
pub enum InputType {
    /// A spendable coin, gated by an owner and optionally a predicate.
    Coin = 0,
    /// A reference to a deployed contract. Defines none of the coin or
    /// message fields.
    Contract = 1,
    /// A message from the data-availability layer, carrying a payload and
    /// optionally a predicate.
    Message = 2,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputType::Coin => "coin",
            InputType::Contract => "contract",
            InputType::Message => "message",
        };
        f.write_str(name)
    }
}

impl InputType {
    /// Maps a raw discriminant word onto the closed variant set.
    pub fn from_discriminant(discriminant: Word) -> Option<Self> {
        Self::try_from(discriminant).ok()
    }
}
