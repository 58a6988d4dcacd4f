//! The fixed 32-byte identifier family.

use core::{
    fmt,
    str::FromStr,
};

/// A malformed textual or sliced representation of a 32-byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBytes32;

impl fmt::Display for InvalidBytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected exactly 32 bytes")
    }
}

impl std::error::Error for InvalidBytes32 {}

macro_rules! fixed_bytes_32 {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(
            Copy,
            Clone,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name([u8; 32]);

        impl $name {
            /// Byte length of the value.
            pub const LEN: usize = 32;

            /// Wraps raw bytes.
            pub const fn new(bytes: [u8; Self::LEN]) -> Self {
                Self(bytes)
            }

            /// The all-zero value.
            pub const fn zeroed() -> Self {
                Self([0; Self::LEN])
            }

            /// Borrows the raw bytes.
            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            /// Unwraps into the raw bytes.
            pub const fn into_bytes(self) -> [u8; Self::LEN] {
                self.0
            }
        }

        impl From<[u8; $name::LEN]> for $name {
            fn from(bytes: [u8; $name::LEN]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $name::LEN] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = InvalidBytes32;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; Self::LEN]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| InvalidBytes32)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    write!(f, "0x")?;
                }
                f.write_str(&hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = InvalidBytes32;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                let bytes = hex::decode(s).map_err(|_| InvalidBytes32)?;
                Self::try_from(bytes.as_slice())
            }
        }

        #[cfg(feature = "random")]
        impl rand::distributions::Distribution<$name> for rand::distributions::Standard {
            fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> $name {
                $name(rng.gen())
            }
        }
    };
}

fixed_bytes_32!(
    /// An untyped 32-byte value fetched from the serialized image.
    Bytes32
);
fixed_bytes_32!(
    /// An account address.
    Address
);
fixed_bytes_32!(
    /// Identifier of an asset. Different incompatible coins coexist with
    /// different asset ids.
    AssetId
);
fixed_bytes_32!(
    /// Unique value carried by a message to prevent replays.
    Nonce
);

impl AssetId {
    /// The base asset of the chain.
    pub const BASE: AssetId = AssetId::zeroed();

    /// Returns the base asset id.
    pub const fn base() -> Self {
        Self::BASE
    }
}

macro_rules! from_bytes32 {
    ($name:ident) => {
        impl From<Bytes32> for $name {
            fn from(value: Bytes32) -> Self {
                Self(value.0)
            }
        }

        impl From<$name> for Bytes32 {
            fn from(value: $name) -> Self {
                Self(value.0)
            }
        }
    };
}

from_bytes32!(Address);
from_bytes32!(AssetId);
from_bytes32!(Nonce);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_from_str_round_trip() {
        let address = Address::new([0xAB; 32]);
        let text = address.to_string();
        assert!(text.starts_with("0x"));
        assert_eq!(text.parse::<Address>().unwrap(), address);
        // Parsing also accepts the unprefixed form.
        assert_eq!(text[2..].parse::<Address>().unwrap(), address);
    }

    #[test]
    fn from_str_rejects_wrong_lengths() {
        assert_eq!("0xabcd".parse::<Bytes32>(), Err(InvalidBytes32));
        assert_eq!("not hex".parse::<Bytes32>(), Err(InvalidBytes32));
    }

    #[test]
    fn try_from_slice_requires_exact_length() {
        assert!(Nonce::try_from([1u8; 32].as_slice()).is_ok());
        assert_eq!(Nonce::try_from([1u8; 31].as_slice()), Err(InvalidBytes32));
        assert_eq!(Nonce::try_from([1u8; 33].as_slice()), Err(InvalidBytes32));
    }

    #[test]
    fn base_asset_is_zeroed() {
        assert_eq!(AssetId::base(), AssetId::new([0; 32]));
    }

    #[test]
    fn bytes32_converts_into_typed_wrappers() {
        let raw = Bytes32::new([7; 32]);
        let owner: Address = raw.into();
        assert_eq!(owner.as_slice(), raw.as_slice());
        assert_eq!(Bytes32::from(owner), raw);
    }

    #[test]
    fn debug_prints_hex() {
        let asset = AssetId::new([0x01; 32]);
        let debug = format!("{asset:?}");
        assert!(debug.starts_with("AssetId(0x01"));
    }
}
