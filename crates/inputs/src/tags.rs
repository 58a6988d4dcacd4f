//! The field-tag table shared with the host's serialized transaction format.
//!
//! Tags are a closed, versioned enumeration; the numeric values are the
//! actual external contract and must be preserved byte-for-byte across
//! releases.

use num_enum::IntoPrimitive;

/// One field of the serialized transaction, keyed the way the host's tagged
/// fetch expects it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, IntoPrimitive)]
#[repr(u16)]
pub enum FieldTag {
    /// Number of inputs of a script transaction.
    ScriptInputsCount = 0x007,
    /// Pointer to the input at a given index of a script transaction.
    ScriptInputAtIndex = 0x00D,
    /// Number of inputs of a create transaction.
    CreateInputsCount = 0x102,
    /// Pointer to the input at a given index of a create transaction.
    CreateInputAtIndex = 0x105,
    /// Discriminant of the input's variant.
    InputType = 0x200,
    /// Address allowed to spend a coin input.
    InputCoinOwner = 0x203,
    /// Amount of a coin input.
    InputCoinAmount = 0x204,
    /// Asset id of a coin input.
    InputCoinAssetId = 0x205,
    /// Witness index of a coin input.
    InputCoinWitnessIndex = 0x207,
    /// Predicate bytecode length of a coin input.
    InputCoinPredicateLength = 0x209,
    /// Predicate data length of a coin input.
    InputCoinPredicateDataLength = 0x20A,
    /// Pointer to the predicate bytecode of a coin input.
    InputCoinPredicate = 0x20B,
    /// Pointer to the predicate data of a coin input.
    InputCoinPredicateData = 0x20C,
    /// Sender of a message input.
    InputMessageSender = 0x240,
    /// Recipient of a message input.
    InputMessageRecipient = 0x241,
    /// Amount of a message input.
    InputMessageAmount = 0x242,
    /// Nonce of a message input.
    InputMessageNonce = 0x243,
    /// Witness index of a message input.
    InputMessageWitnessIndex = 0x244,
    /// Payload length of a message input.
    InputMessageDataLength = 0x245,
    /// Predicate bytecode length of a message input.
    InputMessagePredicateLength = 0x246,
    /// Predicate data length of a message input.
    InputMessagePredicateDataLength = 0x247,
    /// Pointer to the payload of a message input.
    InputMessageData = 0x248,
    /// Pointer to the predicate bytecode of a message input.
    InputMessagePredicate = 0x249,
    /// Pointer to the predicate data of a message input.
    InputMessagePredicateData = 0x24A,
}

/// The kind of the transaction enclosing the input list.
///
/// The two kinds serialize their input lists under different tag namespaces,
/// so the count/pointer accessors dispatch through [`TxKind::tags`] instead
/// of duplicating the two-way branch at every call site.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TxKind {
    /// A transaction executing a script.
    Script,
    /// A transaction deploying a contract.
    Create,
}

/// Tags a transaction kind uses for its input list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KindTags {
    /// Number of inputs in the list.
    pub inputs_count: FieldTag,
    /// Pointer to the serialized input at a given index.
    pub input_at_index: FieldTag,
}

impl TxKind {
    /// The input-list tags of this kind. Exhaustive over exactly the two
    /// kinds; an unmatched kind cannot exist.
    pub const fn tags(self) -> KindTags {
        match self {
            TxKind::Script => KindTags {
                inputs_count: FieldTag::ScriptInputsCount,
                input_at_index: FieldTag::ScriptInputAtIndex,
            },
            TxKind::Create => KindTags {
                inputs_count: FieldTag::CreateInputsCount,
                input_at_index: FieldTag::CreateInputAtIndex,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tag_namespaces_are_disjoint() {
        let script = TxKind::Script.tags();
        let create = TxKind::Create.tags();
        assert_ne!(script.inputs_count, create.inputs_count);
        assert_ne!(script.input_at_index, create.input_at_index);
    }

    #[test]
    fn tags_convert_to_their_wire_value() {
        assert_eq!(u16::from(FieldTag::InputType), 0x200);
        assert_eq!(u16::from(FieldTag::InputCoinOwner), 0x203);
        assert_eq!(u16::from(FieldTag::InputMessagePredicateData), 0x24A);
    }
}
